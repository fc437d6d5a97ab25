use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, request::Parts},
    routing::get,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::RestError;
use crate::models::{IdResponse, ListQuery};
use crate::traits::RestResource;

/// `GET /`: lists records. `skip`, `limit`, `sort` and `order` parameters
/// shape the result set; unknown parameters are ignored.
pub async fn list<T>(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListQuery>,
    parts: Parts,
) -> Result<Json<Vec<T>>, RestError>
where
    T: RestResource,
{
    let records = T::list(&db, &parts, &query).await?;
    Ok(Json(records))
}

/// `GET /{id}`: fetches one record, or `404` if the id matches nothing
/// visible to the resource.
pub async fn get_one<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
    parts: Parts,
) -> Result<Json<T>, RestError>
where
    T: RestResource,
{
    let record = T::get_one(&db, &parts, id).await?;
    Ok(Json(record))
}

/// `POST /`: creates a record and responds `201 Created` with the new id.
pub async fn create<T>(
    State(db): State<DatabaseConnection>,
    parts: Parts,
    Json(data): Json<T::CreateData>,
) -> Result<(StatusCode, Json<IdResponse>), RestError>
where
    T: RestResource,
{
    let id = T::create(&db, &parts, data).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// `PUT`/`PATCH /{id}`: patches a record and responds `204 No Content`.
///
/// The response still carries the `{"id": ...}` body. Intermediaries are
/// entitled to drop the body of a `204`, so clients should treat it as
/// advisory.
pub async fn update<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
    parts: Parts,
    Json(data): Json<T::UpdateData>,
) -> Result<(StatusCode, Json<IdResponse>), RestError>
where
    T: RestResource,
{
    let id = T::update(&db, &parts, id, data).await?;
    Ok((StatusCode::NO_CONTENT, Json(IdResponse { id })))
}

/// `DELETE /{id}`: deletes a record and responds `202 Accepted` with the
/// deleted id.
pub async fn delete<T>(
    State(db): State<DatabaseConnection>,
    Path(id): Path<Uuid>,
    parts: Parts,
) -> Result<(StatusCode, Json<IdResponse>), RestError>
where
    T: RestResource,
{
    let id = T::delete(&db, &parts, id).await?;
    Ok((StatusCode::ACCEPTED, Json(IdResponse { id })))
}

/// Builds a router exposing the CRUD endpoints of `T`, rooted at `/`:
///
/// - `GET /`: list, `200`
/// - `POST /`: create, `201`
/// - `GET /{id}`: fetch, `200`
/// - `PUT`/`PATCH /{id}`: update, `204`
/// - `DELETE /{id}`: delete, `202`
///
/// Nest the router under the resource's path and supply the database
/// connection as state:
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/notes", resource_router::<Note>())
///     .with_state(db);
/// ```
#[must_use]
pub fn resource_router<T>() -> Router<DatabaseConnection>
where
    T: RestResource + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(
            "/{id}",
            get(get_one::<T>)
                .put(update::<T>)
                .patch(update::<T>)
                .delete(delete::<T>),
        )
}
