//! DTOs for participants_sea adapter.

use serde_json::Value;

/// Seated human under an ally team.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub demo_id: String,
    pub ally_team_row_id: i64,
    pub user_id: i64,
    pub player_id: i32,
    pub name: String,
    pub team_id: i32,
    pub handicap: f64,
    pub faction: String,
    pub country_code: Option<String>,
    pub rgb_color: Value,
    pub rank: i32,
    pub skill: Option<String>,
    pub skill_uncertainty: Option<f64>,
    pub start_pos: Option<Value>,
}

/// Watching human directly under the demo.
#[derive(Debug, Clone)]
pub struct SpectatorCreate {
    pub demo_id: String,
    pub user_id: i64,
    pub player_id: i32,
    pub name: String,
    pub country_code: Option<String>,
    pub rank: i32,
    pub skill: Option<String>,
    pub skill_uncertainty: Option<f64>,
}
