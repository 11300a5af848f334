use sea_orm::ConnectionTrait;

use crate::adapters::ais_sea as ais_adapter;
use crate::adapters::ais_sea::AiCreate;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Ai {
    pub id: i64,
    pub ally_team_row_id: i64,
    pub ai_id: i32,
    pub name: String,
    pub short_name: String,
    pub host: i32,
}

pub async fn create_ai<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AiCreate,
) -> Result<Ai, DomainError> {
    let ai = ais_adapter::create_ai(conn, dto).await?;
    Ok(Ai::from(ai))
}

pub async fn ais_for_ally_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ally_team_row_ids: Vec<i64>,
) -> Result<Vec<Ai>, DomainError> {
    let rows = ais_adapter::find_by_ally_teams(conn, ally_team_row_ids).await?;
    Ok(rows.into_iter().map(Ai::from).collect())
}

impl From<crate::entities::ais::Model> for Ai {
    fn from(model: crate::entities::ais::Model) -> Self {
        Self {
            id: model.id,
            ally_team_row_id: model.ally_team_row_id,
            ai_id: model.ai_id,
            name: model.name,
            short_name: model.short_name,
            host: model.host,
        }
    }
}
