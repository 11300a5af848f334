use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "script_name", unique)]
    pub script_name: String,
    #[sea_orm(column_name = "file_name")]
    pub file_name: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::demos::Entity")]
    Demos,
}

impl Related<super::demos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
