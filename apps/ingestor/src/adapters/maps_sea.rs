//! SeaORM adapter for maps.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde::Serialize;

use crate::entities::maps;

/// Narrow projection published to the snapshot cache.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub id: i64,
    pub script_name: String,
    pub file_name: Option<String>,
}

pub async fn find_by_script_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    script_name: &str,
) -> Result<Option<maps::Model>, sea_orm::DbErr> {
    maps::Entity::find()
        .filter(maps::Column::ScriptName.eq(script_name))
        .one(conn)
        .await
}

/// Insert the map unless the script name is already known. Existing rows are left untouched.
pub async fn ensure_by_script_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    script_name: &str,
) -> Result<(maps::Model, bool), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let map_active = maps::ActiveModel {
        id: NotSet,
        script_name: Set(script_name.to_owned()),
        file_name: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let rows = maps::Entity::insert(map_active)
        .on_conflict(
            OnConflict::column(maps::Column::ScriptName)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    let map = find_by_script_name(conn, script_name)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("maps.script_name not found".to_string()))?;

    Ok((map, rows == 1))
}

pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<MapSummary>, sea_orm::DbErr> {
    maps::Entity::find()
        .select_only()
        .column(maps::Column::Id)
        .column(maps::Column::ScriptName)
        .column(maps::Column::FileName)
        .order_by_asc(maps::Column::Id)
        .into_model::<MapSummary>()
        .all(conn)
        .await
}
