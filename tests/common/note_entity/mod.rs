use async_trait::async_trait;
use chrono::{DateTime, Utc};
use restbase::traits::{PatchActiveModel, RestResource};
use sea_orm::{DbErr, Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Plain resource using every default hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub name: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Model> for Note {
    fn from(model: Model) -> Self {
        Note {
            id: model.id,
            name: model.name,
            position: model.position,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteCreate {
    pub name: String,
    #[serde(default)]
    pub position: i32,
}

impl From<NoteCreate> for ActiveModel {
    fn from(data: NoteCreate) -> Self {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            position: Set(data.position),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "restbase::serde_with::rust::double_option"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "restbase::serde_with::rust::double_option"
    )]
    pub position: Option<Option<i32>>,
}

impl PatchActiveModel<ActiveModel> for NoteUpdate {
    fn patch_model(self, mut existing: ActiveModel) -> Result<ActiveModel, DbErr> {
        match self.name {
            Some(Some(name)) => existing.name = Set(name),
            Some(None) => return Err(DbErr::Custom("name cannot be set to null".to_string())),
            None => {}
        }
        match self.position {
            Some(Some(position)) => existing.position = Set(position),
            Some(None) => {
                return Err(DbErr::Custom("position cannot be set to null".to_string()));
            }
            None => {}
        }
        existing.updated_at = Set(Utc::now());
        Ok(existing)
    }
}

#[async_trait]
impl RestResource for Note {
    type Entity = Entity;
    type Column = Column;
    type ActiveModel = ActiveModel;
    type CreateData = NoteCreate;
    type UpdateData = NoteUpdate;

    const ID_COLUMN: Self::Column = Column::Id;
    const RESOURCE_NAME: &str = "note";

    fn sortable_columns() -> Vec<(&'static str, Self::Column)> {
        vec![
            ("name", Column::Name),
            ("position", Column::Position),
            ("created_at", Column::CreatedAt),
        ]
    }
}
