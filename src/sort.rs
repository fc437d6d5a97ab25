use sea_orm::{ColumnTrait, sea_query::Order};

use crate::models::{ListQuery, SortOrder};

/// Resolves the `sort`/`order` parameters of a list query against a
/// resource's sortable columns.
///
/// Returns `None` when no sort was requested, leaving the store's natural
/// order in place. A requested column that is not in `sortable_columns` falls
/// back to `default_column` rather than erroring, so clients cannot probe for
/// column names. The direction defaults to ascending.
#[must_use]
pub fn resolve_sort<C>(
    query: &ListQuery,
    sortable_columns: &[(&str, C)],
    default_column: C,
) -> Option<(C, Order)>
where
    C: ColumnTrait + Copy,
{
    let requested = query.sort.as_deref()?;

    let order_column = sortable_columns
        .iter()
        .find(|&&(col_name, _)| col_name == requested)
        .map_or(default_column, |&(_, col)| col);

    let order_direction: Order = query.order.unwrap_or(SortOrder::Asc).into();

    Some((order_column, order_direction))
}
