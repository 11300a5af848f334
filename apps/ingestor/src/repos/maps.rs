use sea_orm::ConnectionTrait;

use crate::adapters::maps_sea as maps_adapter;
use crate::adapters::maps_sea::MapSummary;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub id: i64,
    pub script_name: String,
    pub file_name: Option<String>,
}

/// Find the map by script name or create it. Existing maps are returned unmodified.
pub async fn ensure_map<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    script_name: &str,
) -> Result<(Map, bool), DomainError> {
    let (map, inserted) = maps_adapter::ensure_by_script_name(conn, script_name).await?;
    Ok((Map::from(map), inserted))
}

pub async fn find_map<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    script_name: &str,
) -> Result<Option<Map>, DomainError> {
    let map = maps_adapter::find_by_script_name(conn, script_name).await?;
    Ok(map.map(Map::from))
}

pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<MapSummary>, DomainError> {
    Ok(maps_adapter::list_summaries(conn).await?)
}

impl From<crate::entities::maps::Model> for Map {
    fn from(model: crate::entities::maps::Model) -> Self {
        Self {
            id: model.id,
            script_name: model.script_name,
            file_name: model.file_name,
        }
    }
}
