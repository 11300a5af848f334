//! User and alias repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::aliases_sea as aliases_adapter;
use crate::adapters::users_sea as users_adapter;
use crate::adapters::users_sea::{UserProfile, UserSummary};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub country_code: Option<String>,
    pub rank: i32,
    pub skill: Option<String>,
    pub skill_uncertainty: Option<f64>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// Find-or-create by external id, then refresh the profile fields (last write wins).
/// Returns the stored user and whether it was created.
pub async fn upsert_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile: UserProfile,
) -> Result<(User, bool), DomainError> {
    let (user, inserted) = users_adapter::ensure_user(conn, &profile).await?;
    if inserted {
        return Ok((User::from(user), true));
    }
    let user = users_adapter::update_profile(conn, profile).await?;
    Ok((User::from(user), false))
}

pub async fn find_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, id).await?;
    Ok(user.map(User::from))
}

/// Returns true when the alias was new for this user.
pub async fn ensure_alias<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    alias: &str,
) -> Result<bool, DomainError> {
    let (_, inserted) = aliases_adapter::ensure_alias(conn, user_id, alias).await?;
    Ok(inserted)
}

pub async fn aliases_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<String>, DomainError> {
    let rows = aliases_adapter::find_by_user(conn, user_id).await?;
    Ok(rows.into_iter().map(|a| a.alias).collect())
}

pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<UserSummary>, DomainError> {
    Ok(users_adapter::list_summaries(conn).await?)
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            country_code: model.country_code,
            rank: model.rank,
            skill: model.skill,
            skill_uncertainty: model.skill_uncertainty,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
