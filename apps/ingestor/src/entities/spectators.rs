use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "spectators")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "demo_id")]
    pub demo_id: String,
    #[sea_orm(column_name = "user_id")]
    pub user_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i32,
    pub name: String,
    #[sea_orm(column_name = "country_code")]
    pub country_code: Option<String>,
    pub rank: i32,
    pub skill: Option<String>,
    #[sea_orm(column_name = "skill_uncertainty")]
    pub skill_uncertainty: Option<f64>,
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
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::demos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demo.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
