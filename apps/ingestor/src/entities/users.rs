use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// External account id carried by the replay
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub username: String,
    #[sea_orm(column_name = "country_code")]
    pub country_code: Option<String>,
    pub rank: i32,
    pub skill: Option<String>,
    #[sea_orm(column_name = "skill_uncertainty")]
    pub skill_uncertainty: Option<f64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aliases::Entity")]
    Aliases,
    #[sea_orm(has_many = "super::players::Entity")]
    Players,
    #[sea_orm(has_many = "super::spectators::Entity")]
    Spectators,
}

impl Related<super::aliases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aliases.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::spectators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spectators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
