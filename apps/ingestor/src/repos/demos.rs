use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::demos_sea as demos_adapter;
use crate::adapters::demos_sea::DemoCreate;
use crate::domain::Preset;
use crate::entities::demos::DemoPreset;
use crate::errors::domain::DomainError;

/// Stored demo header. Settings and chat stay in storage; readers query them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Demo {
    pub id: String,
    pub map_id: i64,
    pub file_name: String,
    pub engine_version: String,
    pub game_version: String,
    pub start_time: OffsetDateTime,
    pub duration_ms: i64,
    pub full_duration_ms: i64,
    pub game_ended_normally: bool,
    pub preset: Preset,
    pub has_bots: bool,
}

pub async fn create_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DemoCreate,
) -> Result<Demo, DomainError> {
    let demo = demos_adapter::create_demo(conn, dto).await?;
    Ok(Demo::from(demo))
}

pub async fn find_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<Demo>, DomainError> {
    let demo = demos_adapter::find_by_id(conn, id).await?;
    Ok(demo.map(Demo::from))
}

/// Purge a prior ingestion of `id`, cascading to every child row.
/// Returns whether one existed.
pub async fn delete_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<bool, DomainError> {
    Ok(demos_adapter::delete_by_id(conn, id).await?)
}

impl From<Preset> for DemoPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Duel => DemoPreset::Duel,
            Preset::Team => DemoPreset::Team,
            Preset::Ffa => DemoPreset::Ffa,
        }
    }
}

impl From<DemoPreset> for Preset {
    fn from(preset: DemoPreset) -> Self {
        match preset {
            DemoPreset::Duel => Preset::Duel,
            DemoPreset::Team => Preset::Team,
            DemoPreset::Ffa => Preset::Ffa,
        }
    }
}

impl From<crate::entities::demos::Model> for Demo {
    fn from(model: crate::entities::demos::Model) -> Self {
        Self {
            id: model.id,
            map_id: model.map_id,
            file_name: model.file_name,
            engine_version: model.engine_version,
            game_version: model.game_version,
            start_time: model.start_time,
            duration_ms: model.duration_ms,
            full_duration_ms: model.full_duration_ms,
            game_ended_normally: model.game_ended_normally,
            preset: model.preset.into(),
            has_bots: model.has_bots,
        }
    }
}
