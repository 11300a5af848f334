//! SeaORM adapter for players and spectators.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{players, spectators};

pub mod dto;

pub use dto::{PlayerCreate, SpectatorCreate};

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    players::ActiveModel {
        id: NotSet,
        demo_id: Set(dto.demo_id),
        ally_team_row_id: Set(dto.ally_team_row_id),
        user_id: Set(dto.user_id),
        player_id: Set(dto.player_id),
        name: Set(dto.name),
        team_id: Set(dto.team_id),
        handicap: Set(dto.handicap),
        faction: Set(dto.faction),
        country_code: Set(dto.country_code),
        rgb_color: Set(dto.rgb_color),
        rank: Set(dto.rank),
        skill: Set(dto.skill),
        skill_uncertainty: Set(dto.skill_uncertainty),
        start_pos: Set(dto.start_pos),
    }
    .insert(conn)
    .await
}

pub async fn create_spectator<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SpectatorCreate,
) -> Result<spectators::Model, sea_orm::DbErr> {
    spectators::ActiveModel {
        id: NotSet,
        demo_id: Set(dto.demo_id),
        user_id: Set(dto.user_id),
        player_id: Set(dto.player_id),
        name: Set(dto.name),
        country_code: Set(dto.country_code),
        rank: Set(dto.rank),
        skill: Set(dto.skill),
        skill_uncertainty: Set(dto.skill_uncertainty),
    }
    .insert(conn)
    .await
}

pub async fn players_by_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    demo_id: &str,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::DemoId.eq(demo_id))
        .order_by_asc(players::Column::PlayerId)
        .all(conn)
        .await
}

pub async fn spectators_by_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    demo_id: &str,
) -> Result<Vec<spectators::Model>, sea_orm::DbErr> {
    spectators::Entity::find()
        .filter(spectators::Column::DemoId.eq(demo_id))
        .order_by_asc(spectators::Column::PlayerId)
        .all(conn)
        .await
}
