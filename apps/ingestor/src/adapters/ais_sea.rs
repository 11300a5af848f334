use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::ais;

/// Computer-controlled slot under an ally team.
#[derive(Debug, Clone)]
pub struct AiCreate {
    pub ally_team_row_id: i64,
    pub ai_id: i32,
    pub name: String,
    pub short_name: String,
    pub host: i32,
    pub start_pos: Option<serde_json::Value>,
    pub faction: String,
    pub rgb_color: serde_json::Value,
    pub handicap: f64,
}

pub async fn create_ai<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AiCreate,
) -> Result<ais::Model, sea_orm::DbErr> {
    ais::ActiveModel {
        id: NotSet,
        ally_team_row_id: Set(dto.ally_team_row_id),
        ai_id: Set(dto.ai_id),
        name: Set(dto.name),
        short_name: Set(dto.short_name),
        host: Set(dto.host),
        start_pos: Set(dto.start_pos),
        faction: Set(dto.faction),
        rgb_color: Set(dto.rgb_color),
        handicap: Set(dto.handicap),
    }
    .insert(conn)
    .await
}

pub async fn find_by_ally_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ally_team_row_ids: Vec<i64>,
) -> Result<Vec<ais::Model>, sea_orm::DbErr> {
    ais::Entity::find()
        .filter(ais::Column::AllyTeamRowId.is_in(ally_team_row_ids))
        .order_by_asc(ais::Column::AiId)
        .all(conn)
        .await
}
