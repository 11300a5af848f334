use sea_orm::ConnectionTrait;

use crate::adapters::ally_teams_sea as ally_teams_adapter;
use crate::adapters::ally_teams_sea::AllyTeamCreate;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct AllyTeam {
    /// Storage key, referenced by players and AIs
    pub row_id: i64,
    pub demo_id: String,
    pub ally_team_id: i32,
    pub start_box: Option<serde_json::Value>,
    pub winning_team: bool,
}

pub async fn create_ally_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AllyTeamCreate,
) -> Result<AllyTeam, DomainError> {
    let team = ally_teams_adapter::create_ally_team(conn, dto).await?;
    Ok(AllyTeam::from(team))
}

pub async fn ally_teams_for_demo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    demo_id: &str,
) -> Result<Vec<AllyTeam>, DomainError> {
    let teams = ally_teams_adapter::find_by_demo(conn, demo_id).await?;
    Ok(teams.into_iter().map(AllyTeam::from).collect())
}

impl From<crate::entities::ally_teams::Model> for AllyTeam {
    fn from(model: crate::entities::ally_teams::Model) -> Self {
        Self {
            row_id: model.id,
            demo_id: model.demo_id,
            ally_team_id: model.ally_team_id,
            start_box: model.start_box,
            winning_team: model.winning_team,
        }
    }
}
