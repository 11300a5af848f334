use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ais")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "ally_team_row_id")]
    pub ally_team_row_id: i64,
    #[sea_orm(column_name = "ai_id")]
    pub ai_id: i32,
    pub name: String,
    #[sea_orm(column_name = "short_name")]
    pub short_name: String,
    /// Player id of the client hosting the AI
    pub host: i32,
    #[sea_orm(column_name = "start_pos")]
    pub start_pos: Option<Json>,
    pub faction: String,
    #[sea_orm(column_name = "rgb_color")]
    pub rgb_color: Json,
    pub handicap: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ally_teams::Entity",
        from = "Column::AllyTeamRowId",
        to = "super::ally_teams::Column::Id",
        on_delete = "Cascade"
    )]
    AllyTeam,
}

impl Related<super::ally_teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllyTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
