use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum DemoPreset {
    #[sea_orm(string_value = "duel")]
    Duel,
    #[sea_orm(string_value = "team")]
    Team,
    #[sea_orm(string_value = "ffa")]
    Ffa,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "demos")]
pub struct Model {
    /// Game id assigned by the engine
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "map_id")]
    pub map_id: i64,
    #[sea_orm(column_name = "file_name")]
    pub file_name: String,
    #[sea_orm(column_name = "engine_version")]
    pub engine_version: String,
    #[sea_orm(column_name = "game_version")]
    pub game_version: String,
    #[sea_orm(column_name = "start_time")]
    pub start_time: OffsetDateTime,
    #[sea_orm(column_name = "duration_ms")]
    pub duration_ms: i64,
    #[sea_orm(column_name = "full_duration_ms")]
    pub full_duration_ms: i64,
    #[sea_orm(column_name = "host_settings")]
    pub host_settings: Json,
    #[sea_orm(column_name = "game_settings")]
    pub game_settings: Json,
    #[sea_orm(column_name = "map_settings")]
    pub map_settings: Json,
    #[sea_orm(column_name = "game_ended_normally")]
    pub game_ended_normally: bool,
    pub chatlog: Json,
    pub preset: DemoPreset,
    #[sea_orm(column_name = "has_bots")]
    pub has_bots: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maps::Entity",
        from = "Column::MapId",
        to = "super::maps::Column::Id"
    )]
    Map,
    #[sea_orm(has_many = "super::ally_teams::Entity")]
    AllyTeams,
    #[sea_orm(has_many = "super::spectators::Entity")]
    Spectators,
}

impl Related<super::maps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Map.def()
    }
}

impl Related<super::ally_teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllyTeams.def()
    }
}

impl Related<super::spectators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spectators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
