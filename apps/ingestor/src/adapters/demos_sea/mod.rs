//! SeaORM adapter for demos.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::entities::demos;

pub mod dto;

pub use dto::DemoCreate;

pub async fn create_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DemoCreate,
) -> Result<demos::Model, sea_orm::DbErr> {
    demos::ActiveModel {
        id: Set(dto.id),
        map_id: Set(dto.map_id),
        file_name: Set(dto.file_name),
        engine_version: Set(dto.engine_version),
        game_version: Set(dto.game_version),
        start_time: Set(dto.start_time),
        duration_ms: Set(dto.duration_ms),
        full_duration_ms: Set(dto.full_duration_ms),
        host_settings: Set(dto.host_settings),
        game_settings: Set(dto.game_settings),
        map_settings: Set(dto.map_settings),
        game_ended_normally: Set(dto.game_ended_normally),
        chatlog: Set(dto.chatlog),
        preset: Set(dto.preset),
        has_bots: Set(dto.has_bots),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<demos::Model>, sea_orm::DbErr> {
    demos::Entity::find_by_id(id.to_owned()).one(conn).await
}

/// Delete the demo; children go with it through ON DELETE CASCADE.
/// Returns whether a row existed.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<bool, sea_orm::DbErr> {
    let result = demos::Entity::delete_by_id(id.to_owned()).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
