use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::aliases;

/// Record `alias` for the user unless that exact pair already exists.
pub async fn ensure_alias<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    alias: &str,
) -> Result<(aliases::Model, bool), sea_orm::DbErr> {
    let alias_active = aliases::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        alias: Set(alias.to_owned()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let rows = aliases::Entity::insert(alias_active)
        .on_conflict(
            OnConflict::columns([aliases::Column::UserId, aliases::Column::Alias])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    let found = aliases::Entity::find()
        .filter(aliases::Column::UserId.eq(user_id))
        .filter(aliases::Column::Alias.eq(alias))
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("aliases row not found".to_string()))?;

    Ok((found, rows == 1))
}

pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<aliases::Model>, sea_orm::DbErr> {
    aliases::Entity::find()
        .filter(aliases::Column::UserId.eq(user_id))
        .order_by_asc(aliases::Column::Id)
        .all(conn)
        .await
}
