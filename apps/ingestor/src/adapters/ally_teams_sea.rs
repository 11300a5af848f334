use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::ally_teams;

#[derive(Debug, Clone)]
pub struct AllyTeamCreate {
    pub demo_id: String,
    pub ally_team_id: i32,
    pub start_box: Option<serde_json::Value>,
    pub winning_team: bool,
}

pub async fn create_ally_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AllyTeamCreate,
) -> Result<ally_teams::Model, sea_orm::DbErr> {
    ally_teams::ActiveModel {
        id: NotSet,
        demo_id: Set(dto.demo_id),
        ally_team_id: Set(dto.ally_team_id),
        start_box: Set(dto.start_box),
        winning_team: Set(dto.winning_team),
    }
    .insert(conn)
    .await
}

pub async fn find_by_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    demo_id: &str,
) -> Result<Vec<ally_teams::Model>, sea_orm::DbErr> {
    ally_teams::Entity::find()
        .filter(ally_teams::Column::DemoId.eq(demo_id))
        .order_by_asc(ally_teams::Column::AllyTeamId)
        .all(conn)
        .await
}
