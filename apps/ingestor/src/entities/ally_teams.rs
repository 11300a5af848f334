use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ally_teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "demo_id")]
    pub demo_id: String,
    /// Ally team number within the replay
    #[sea_orm(column_name = "ally_team_id")]
    pub ally_team_id: i32,
    #[sea_orm(column_name = "start_box")]
    pub start_box: Option<Json>,
    #[sea_orm(column_name = "winning_team")]
    pub winning_team: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::demos::Entity",
        from = "Column::DemoId",
        to = "super::demos::Column::Id",
        on_delete = "Cascade"
    )]
    Demo,
    #[sea_orm(has_many = "super::players::Entity")]
    Players,
    #[sea_orm(has_many = "super::ais::Entity")]
    Ais,
}

impl Related<super::demos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demo.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::ais::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ais.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
