//! SeaORM adapter for users.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, FromQueryResult, NotSet, QueryOrder,
    QuerySelect, Set,
};
use serde::Serialize;

use crate::entities::users;

pub mod dto;

pub use dto::UserProfile;

/// Narrow projection published to the snapshot cache.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub country_code: Option<String>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id).one(conn).await
}

/// Insert the user keyed by external id if absent. Returns the stored row and whether it was inserted.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile: &UserProfile,
) -> Result<(users::Model, bool), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: Set(profile.id),
        username: Set(profile.username.clone()),
        country_code: Set(profile.country_code.clone()),
        rank: Set(profile.rank),
        skill: Set(profile.skill.clone()),
        skill_uncertainty: Set(profile.skill_uncertainty),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let rows = users::Entity::insert(user_active)
        .on_conflict(OnConflict::column(users::Column::Id).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await?;

    let user = find_by_id(conn, profile.id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("users.id not found".to_string()))?;

    Ok((user, rows == 1))
}

/// Overwrite the profile fields of an existing user.
pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile: UserProfile,
) -> Result<users::Model, sea_orm::DbErr> {
    users::ActiveModel {
        id: Set(profile.id),
        username: Set(profile.username),
        country_code: Set(profile.country_code),
        rank: Set(profile.rank),
        skill: Set(profile.skill),
        skill_uncertainty: Set(profile.skill_uncertainty),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    }
    .update(conn)
    .await
}

pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<UserSummary>, sea_orm::DbErr> {
    users::Entity::find()
        .select_only()
        .column(users::Column::Id)
        .column(users::Column::Username)
        .column(users::Column::CountryCode)
        .order_by_asc(users::Column::Id)
        .into_model::<UserSummary>()
        .all(conn)
        .await
}
