use sea_orm::ConnectionTrait;

use crate::adapters::participants_sea as participants_adapter;
use crate::adapters::participants_sea::{PlayerCreate, SpectatorCreate};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub demo_id: String,
    pub ally_team_row_id: i64,
    pub user_id: i64,
    pub player_id: i32,
    pub name: String,
    pub team_id: i32,
    pub faction: String,
    pub skill: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spectator {
    pub id: i64,
    pub demo_id: String,
    pub user_id: i64,
    pub player_id: i32,
    pub name: String,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<Player, DomainError> {
    let player = participants_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

pub async fn create_spectator<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SpectatorCreate,
) -> Result<Spectator, DomainError> {
    let spectator = participants_adapter::create_spectator(conn, dto).await?;
    Ok(Spectator::from(spectator))
}

pub async fn players_for_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    demo_id: &str,
) -> Result<Vec<Player>, DomainError> {
    let rows = participants_adapter::players_by_demo(conn, demo_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

pub async fn spectators_for_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    demo_id: &str,
) -> Result<Vec<Spectator>, DomainError> {
    let rows = participants_adapter::spectators_by_demo(conn, demo_id).await?;
    Ok(rows.into_iter().map(Spectator::from).collect())
}

impl From<crate::entities::players::Model> for Player {
    fn from(model: crate::entities::players::Model) -> Self {
        Self {
            id: model.id,
            demo_id: model.demo_id,
            ally_team_row_id: model.ally_team_row_id,
            user_id: model.user_id,
            player_id: model.player_id,
            name: model.name,
            team_id: model.team_id,
            faction: model.faction,
            skill: model.skill,
        }
    }
}

impl From<crate::entities::spectators::Model> for Spectator {
    fn from(model: crate::entities::spectators::Model) -> Self {
        Self {
            id: model.id,
            demo_id: model.demo_id,
            user_id: model.user_id,
            player_id: model.player_id,
            name: model.name,
        }
    }
}
