use sea_orm::Order;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Pagination and ordering parameters accepted by every list endpoint.
///
/// All fields are optional. Absent `skip`/`limit` mean the full result set is
/// returned; an absent `sort` leaves the store's natural order untouched.
/// Unknown query parameters are ignored, so resources remain free to read
/// their own parameters off the request without tripping deserialisation.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of leading records to drop from the result set.
    #[param(example = 0)]
    pub skip: Option<u64>,
    /// Maximum number of records to return. `0` returns an empty list.
    #[param(example = 20)]
    pub limit: Option<u64>,
    /// Column to sort by. Unknown columns fall back to the resource's
    /// default sort column.
    #[param(example = "created_at")]
    pub sort: Option<String>,
    /// Sort direction, `asc` (default) or `desc`.
    #[param(example = "desc")]
    pub order: Option<SortOrder>,
}

/// Sort direction for list queries. Accepts lower, upper and title case on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "ASC", alias = "Asc")]
    Asc,
    #[serde(alias = "DESC", alias = "Desc")]
    Desc,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Body returned by the mutating endpoints, echoing the record's id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    pub id: Uuid,
}
