//! Decoded replay record as handed over by the replay parser.
//!
//! Field names follow the decoder's camelCase JSON output. Settings blocks the
//! pipeline does not interpret are kept as opaque JSON maps and stored verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRecord {
    pub info: ReplayInfo,
    #[serde(default)]
    pub chatlog: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayInfo {
    pub meta: ReplayMeta,
    pub host_settings: HostSettings,
    #[serde(default)]
    pub game_settings: Map<String, Value>,
    #[serde(default)]
    pub map_settings: Map<String, Value>,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub ais: Vec<AiRecord>,
    #[serde(default)]
    pub ally_teams: Vec<AllyTeamRecord>,
    #[serde(default)]
    pub spectators: Vec<SpectatorRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayMeta {
    pub game_id: String,
    pub engine: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    pub duration_ms: i64,
    pub full_duration_ms: i64,
    #[serde(default)]
    pub winning_ally_team_ids: Vec<i32>,
}

/// Host settings; only the map and game type are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostSettings {
    pub mapname: String,
    pub gametype: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartPos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllyTeamRecord {
    pub ally_team_id: i32,
    #[serde(default)]
    pub start_box: Option<StartBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_id: i32,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub team_id: i32,
    pub ally_team_id: i32,
    #[serde(default)]
    pub handicap: f64,
    pub faction: String,
    #[serde(default)]
    pub country_code: Option<String>,
    pub rgb_color: RgbColor,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub skill_uncertainty: Option<f64>,
    #[serde(default)]
    pub start_pos: Option<StartPos>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectatorRecord {
    pub player_id: i32,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub skill_uncertainty: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecord {
    pub ai_id: i32,
    pub ally_team_id: i32,
    pub name: String,
    pub short_name: String,
    pub host: i32,
    #[serde(default)]
    pub start_pos: Option<StartPos>,
    pub faction: String,
    pub rgb_color: RgbColor,
    #[serde(default)]
    pub handicap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub from_id: i32,
    pub to_id: i32,
    pub message: String,
    #[serde(default)]
    pub time_ms: Option<i64>,
}

/// A human in the replay: either seated on a team or watching.
#[derive(Debug, Clone, Copy)]
pub enum Participant<'a> {
    Player(&'a PlayerRecord),
    Spectator(&'a SpectatorRecord),
}

impl<'a> Participant<'a> {
    pub fn player_id(&self) -> i32 {
        match self {
            Participant::Player(p) => p.player_id,
            Participant::Spectator(s) => s.player_id,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        match self {
            Participant::Player(p) => p.user_id,
            Participant::Spectator(s) => s.user_id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Participant::Player(p) => &p.name,
            Participant::Spectator(s) => &s.name,
        }
    }

    pub fn country_code(&self) -> Option<&'a str> {
        match self {
            Participant::Player(p) => p.country_code.as_deref(),
            Participant::Spectator(s) => s.country_code.as_deref(),
        }
    }

    pub fn rank(&self) -> i32 {
        match self {
            Participant::Player(p) => p.rank,
            Participant::Spectator(s) => s.rank,
        }
    }

    pub fn skill(&self) -> Option<&'a str> {
        match self {
            Participant::Player(p) => p.skill.as_deref(),
            Participant::Spectator(s) => s.skill.as_deref(),
        }
    }

    pub fn skill_uncertainty(&self) -> Option<f64> {
        match self {
            Participant::Player(p) => p.skill_uncertainty,
            Participant::Spectator(s) => s.skill_uncertainty,
        }
    }
}

impl ReplayRecord {
    pub fn game_id(&self) -> &str {
        &self.info.meta.game_id
    }

    pub fn map_script_name(&self) -> &str {
        &self.info.host_settings.mapname
    }

    /// Ally team flagged as winner: the first entry of the winning list, if any.
    pub fn winning_ally_team(&self) -> Option<i32> {
        self.info.meta.winning_ally_team_ids.first().copied()
    }

    pub fn ended_normally(&self) -> bool {
        !self.info.meta.winning_ally_team_ids.is_empty()
    }

    pub fn has_bots(&self) -> bool {
        !self.info.ais.is_empty()
    }

    /// Players and AIs, the count the preset is derived from.
    pub fn participant_count(&self) -> usize {
        self.info.players.len() + self.info.ais.len()
    }

    /// Players first, then spectators, each in decode order.
    pub fn participants(&self) -> impl Iterator<Item = Participant<'_>> {
        self.info
            .players
            .iter()
            .map(Participant::Player)
            .chain(self.info.spectators.iter().map(Participant::Spectator))
    }
}
