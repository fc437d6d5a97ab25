use async_trait::async_trait;
use axum::http::request::Parts;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::errors::RestError;
use crate::models::ListQuery;
use crate::sort::resolve_sort;

/// Operation on whose behalf a selector is being invoked.
///
/// `List` and `Get` consult both the filter and relation selectors. `Update`
/// and `Delete` consult the filter selector only; relations are never loaded
/// for mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudAction {
    List,
    Get,
    Update,
    Delete,
}

/// Folds a partial update payload into an existing active model.
///
/// Update payloads use double-`Option` fields
/// (`serde_with::rust::double_option`) so implementations can tell an absent
/// field (leave the column untouched) from an explicit `null` (clear the
/// column, or reject it for required columns).
pub trait PatchActiveModel<ActiveModelType> {
    /// # Errors
    ///
    /// Returns a `DbErr` when the payload cannot be applied, for example an
    /// explicit `null` for a non-nullable column.
    fn patch_model(self, existing: ActiveModelType) -> Result<ActiveModelType, DbErr>;
}

/// A REST resource backed by a `SeaORM` entity.
///
/// Implementors supply the entity wiring plus `RESOURCE_NAME` and
/// `ID_COLUMN`; every operation and hook has a default. The five operations
/// (`list`, `get_one`, `create`, `update`, `delete`) carry the full endpoint
/// semantics, so [`crate::routes::resource_router`] stays a thin HTTP shim.
///
/// Hooks let an implementor bend each operation without rewriting it:
/// [`Self::select_filters`] scopes which records an operation can see at all,
/// [`Self::select_relations`] and [`Self::hydrate`] attach related records on
/// reads, [`Self::before_get`] enriches outgoing records, and the
/// `before_create` / `before_update` / `before_delete` trio intercepts
/// mutations between the lookup and the write.
#[async_trait]
pub trait RestResource: Sized + Send + Sync + Serialize
where
    Self::Entity: EntityTrait + Sync,
    Self::ActiveModel: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::Entity as EntityTrait>::Model: Send + Sync + IntoActiveModel<Self::ActiveModel>,
    <Self::Entity as EntityTrait>::Relation: Send + Sync,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<Uuid>,
    Self: From<<Self::Entity as EntityTrait>::Model>,
{
    type Entity: EntityTrait + Sync;
    type Column: ColumnTrait + std::fmt::Debug;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>;
    type CreateData: DeserializeOwned + Into<Self::ActiveModel> + Send + 'static;
    type UpdateData: DeserializeOwned + PatchActiveModel<Self::ActiveModel> + Send + 'static;

    const ID_COLUMN: Self::Column;
    const RESOURCE_NAME: &str;

    /// Lists records, in order: resource filters, requested sort, `skip` and
    /// `limit`, relation hydration, then the get hook on each record.
    async fn list(
        db: &DatabaseConnection,
        parts: &Parts,
        query: &ListQuery,
    ) -> Result<Vec<Self>, RestError> {
        let filters = Self::select_filters(parts, CrudAction::List);
        let relations = Self::select_relations(parts, CrudAction::List);
        let mut select = Self::Entity::find().filter(filters);
        if let Some((order_column, order_direction)) =
            resolve_sort(query, &Self::sortable_columns(), Self::default_sort_column())
        {
            select = select.order_by(order_column, order_direction);
        }
        let models = select.offset(query.skip).limit(query.limit).all(db).await?;
        let records = Self::hydrate(db, models, &relations).await?;
        let mut prepared = Vec::with_capacity(records.len());
        for record in records {
            prepared.push(Self::before_get(db, record).await?);
        }
        Ok(prepared)
    }

    /// Fetches a single record by id, restricted by the resource's filters.
    /// Pagination and sorting parameters do not apply here.
    async fn get_one(db: &DatabaseConnection, parts: &Parts, id: Uuid) -> Result<Self, RestError> {
        let filters = Self::select_filters(parts, CrudAction::Get);
        let relations = Self::select_relations(parts, CrudAction::Get);
        let model = Self::Entity::find_by_id(id)
            .filter(filters)
            .one(db)
            .await?
            .ok_or_else(|| RestError::not_found(Self::RESOURCE_NAME, id))?;
        let record = Self::hydrate(db, vec![model], &relations)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RestError::not_found(Self::RESOURCE_NAME, id))?;
        Self::before_get(db, record).await
    }

    /// Inserts a new record from the (hooked) payload and returns its id.
    async fn create(
        db: &DatabaseConnection,
        parts: &Parts,
        data: Self::CreateData,
    ) -> Result<Uuid, RestError> {
        let data = Self::before_create(db, parts, data).await?;
        let active_model: Self::ActiveModel = data.into();
        let result = Self::Entity::insert(active_model).exec(db).await?;
        Ok(result.last_insert_id.into())
    }

    /// Patches an existing record. The record must be visible under the
    /// resource's `Update` filters or the operation reports not-found; the
    /// update hook runs only after the record was found.
    async fn update(
        db: &DatabaseConnection,
        parts: &Parts,
        id: Uuid,
        data: Self::UpdateData,
    ) -> Result<Uuid, RestError> {
        let filters = Self::select_filters(parts, CrudAction::Update);
        let model = Self::Entity::find_by_id(id)
            .filter(filters)
            .one(db)
            .await?
            .ok_or_else(|| RestError::not_found(Self::RESOURCE_NAME, id))?;
        let data = Self::before_update(db, parts, data).await?;
        let existing: Self::ActiveModel = model.into_active_model();
        let patched = data.patch_model(existing)?;
        patched.update(db).await?;
        Ok(id)
    }

    /// Deletes an existing record. Same visibility rule as [`Self::update`];
    /// the delete hook runs between the lookup and the removal.
    async fn delete(db: &DatabaseConnection, parts: &Parts, id: Uuid) -> Result<Uuid, RestError> {
        let filters = Self::select_filters(parts, CrudAction::Delete);
        let model = Self::Entity::find_by_id(id)
            .filter(filters)
            .one(db)
            .await?
            .ok_or_else(|| RestError::not_found(Self::RESOURCE_NAME, id))?;
        let record = Self::from(model);
        Self::before_delete(db, &record).await?;
        let result = Self::Entity::delete_by_id(id).exec(db).await?;
        match result.rows_affected {
            0 => Err(RestError::not_found(Self::RESOURCE_NAME, id)),
            _ => Ok(id),
        }
    }

    /// Relations to eager-load for the given read action. Resolved once per
    /// request; the result is handed to [`Self::hydrate`].
    #[must_use]
    fn select_relations(
        _parts: &Parts,
        _action: CrudAction,
    ) -> Vec<<Self::Entity as EntityTrait>::Relation> {
        vec![]
    }

    /// Filter condition restricting which records the given action can see.
    /// Records outside the condition are treated as nonexistent, by reads and
    /// mutations alike.
    #[must_use]
    fn select_filters(_parts: &Parts, _action: CrudAction) -> Condition {
        Condition::all()
    }

    /// Converts fetched models into records, attaching the selected
    /// relations. The default conversion ignores `relations`; resources with
    /// relations override this and batch-load the related rows.
    async fn hydrate(
        _db: &DatabaseConnection,
        models: Vec<<Self::Entity as EntityTrait>::Model>,
        _relations: &[<Self::Entity as EntityTrait>::Relation],
    ) -> Result<Vec<Self>, RestError> {
        Ok(models.into_iter().map(Self::from).collect())
    }

    /// Runs on every record about to leave `list` or `get_one`.
    async fn before_get(_db: &DatabaseConnection, record: Self) -> Result<Self, RestError> {
        Ok(record)
    }

    /// Runs on the `create` payload before it becomes an active model.
    async fn before_create(
        _db: &DatabaseConnection,
        _parts: &Parts,
        data: Self::CreateData,
    ) -> Result<Self::CreateData, RestError> {
        Ok(data)
    }

    /// Runs on the `update` payload after the record was found and before it
    /// is patched in.
    async fn before_update(
        _db: &DatabaseConnection,
        _parts: &Parts,
        data: Self::UpdateData,
    ) -> Result<Self::UpdateData, RestError> {
        Ok(data)
    }

    /// Runs after the record to delete was found and before it is removed.
    async fn before_delete(_db: &DatabaseConnection, _record: &Self) -> Result<(), RestError> {
        Ok(())
    }

    #[must_use]
    fn default_sort_column() -> Self::Column {
        Self::ID_COLUMN
    }

    /// Whitelist of `sort` parameter values and the columns they map to.
    #[must_use]
    fn sortable_columns() -> Vec<(&'static str, Self::Column)> {
        vec![("id", Self::ID_COLUMN)]
    }
}
