//! DTOs for demos_sea adapter.

use serde_json::Value;
use time::OffsetDateTime;

use crate::entities::demos::DemoPreset;

/// DTO for creating a demo row under an existing map.
#[derive(Debug, Clone)]
pub struct DemoCreate {
    pub id: String,
    pub map_id: i64,
    pub file_name: String,
    pub engine_version: String,
    pub game_version: String,
    pub start_time: OffsetDateTime,
    pub duration_ms: i64,
    pub full_duration_ms: i64,
    pub host_settings: Value,
    pub game_settings: Value,
    pub map_settings: Value,
    pub game_ended_normally: bool,
    pub chatlog: Value,
    pub preset: DemoPreset,
    pub has_bots: bool,
}

impl DemoCreate {
    /// Minimal demo; settings and chat default to empty JSON.
    pub fn new(
        id: impl Into<String>,
        map_id: i64,
        file_name: impl Into<String>,
        start_time: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            map_id,
            file_name: file_name.into(),
            engine_version: String::new(),
            game_version: String::new(),
            start_time,
            duration_ms: 0,
            full_duration_ms: 0,
            host_settings: Value::Object(Default::default()),
            game_settings: Value::Object(Default::default()),
            map_settings: Value::Object(Default::default()),
            game_ended_normally: false,
            chatlog: Value::Array(Vec::new()),
            preset: DemoPreset::Duel,
            has_bots: false,
        }
    }

    pub fn with_versions(mut self, engine: impl Into<String>, game: impl Into<String>) -> Self {
        self.engine_version = engine.into();
        self.game_version = game.into();
        self
    }

    pub fn with_durations(mut self, duration_ms: i64, full_duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self.full_duration_ms = full_duration_ms;
        self
    }

    pub fn with_settings(mut self, host: Value, game: Value, map: Value) -> Self {
        self.host_settings = host;
        self.game_settings = game;
        self.map_settings = map;
        self
    }

    pub fn with_chatlog(mut self, chatlog: Value) -> Self {
        self.chatlog = chatlog;
        self
    }

    pub fn with_outcome(mut self, preset: DemoPreset, ended_normally: bool, has_bots: bool) -> Self {
        self.preset = preset;
        self.game_ended_normally = ended_normally;
        self.has_bots = has_bots;
        self
    }
}
