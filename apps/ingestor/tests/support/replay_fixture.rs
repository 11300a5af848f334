use std::fs::File;
use std::path::PathBuf;

use ingestor::domain::replay::{
    AiRecord, AllyTeamRecord, ChatMessage, HostSettings, PlayerRecord, ReplayInfo, ReplayMeta,
    ReplayRecord, RgbColor, SpectatorRecord, StartBox, StartPos,
};
use serde_json::{Map, Value};
use tempfile::TempDir;
use time::macros::datetime;

pub const DEFAULT_MAP: &str = "Supreme Isthmus v1.6.4";

/// Builder for decoded replay records.
pub struct ReplayBuilder {
    record: ReplayRecord,
    next_player_id: i32,
}

impl ReplayBuilder {
    /// Two ally teams (0 and 1), no winner, nobody seated.
    pub fn new(game_id: &str) -> Self {
        let mut extra = Map::new();
        extra.insert("ishost".into(), Value::from(1));
        let record = ReplayRecord {
            info: ReplayInfo {
                meta: ReplayMeta {
                    game_id: game_id.to_owned(),
                    engine: "105.1.1-2511-g747f18b BAR105".into(),
                    start_time: datetime!(2026-09-14 20:15:00 UTC),
                    duration_ms: 1_200_000,
                    full_duration_ms: 1_215_000,
                    winning_ally_team_ids: Vec::new(),
                },
                host_settings: HostSettings {
                    mapname: DEFAULT_MAP.into(),
                    gametype: "Beyond All Reason test-27001".into(),
                    extra,
                },
                game_settings: Map::new(),
                map_settings: Map::new(),
                players: Vec::new(),
                ais: Vec::new(),
                ally_teams: Vec::new(),
                spectators: Vec::new(),
            },
            chatlog: vec![ChatMessage {
                from_id: 0,
                to_id: 252,
                message: "gl hf".into(),
                time_ms: Some(3_000),
            }],
        };
        Self {
            record,
            next_player_id: 0,
        }
        .ally_teams(&[0, 1])
    }

    pub fn map(mut self, script_name: &str) -> Self {
        self.record.info.host_settings.mapname = script_name.to_owned();
        self
    }

    pub fn ally_teams(mut self, ids: &[i32]) -> Self {
        self.record.info.ally_teams = ids
            .iter()
            .map(|&ally_team_id| AllyTeamRecord {
                ally_team_id,
                start_box: Some(StartBox {
                    top: 0.0,
                    bottom: 1.0,
                    left: 0.0,
                    right: 0.25,
                }),
            })
            .collect();
        self
    }

    pub fn winners(mut self, ids: &[i32]) -> Self {
        self.record.info.meta.winning_ally_team_ids = ids.to_vec();
        self
    }

    pub fn player(mut self, user_id: i64, name: &str, ally_team_id: i32) -> Self {
        let player = player_record(self.next_player_id, Some(user_id), name, ally_team_id);
        self.next_player_id += 1;
        self.record.info.players.push(player);
        self
    }

    pub fn player_record(mut self, player: PlayerRecord) -> Self {
        self.next_player_id = self.next_player_id.max(player.player_id + 1);
        self.record.info.players.push(player);
        self
    }

    pub fn spectator(mut self, user_id: Option<i64>, name: &str) -> Self {
        self.record.info.spectators.push(SpectatorRecord {
            player_id: self.next_player_id,
            name: name.to_owned(),
            user_id,
            country_code: Some("SE".into()),
            rank: 2,
            skill: Some("[21.40]".into()),
            skill_uncertainty: Some(3.1),
        });
        self.next_player_id += 1;
        self
    }

    pub fn ai(mut self, ai_id: i32, ally_team_id: i32) -> Self {
        self.record.info.ais.push(AiRecord {
            ai_id,
            ally_team_id,
            name: format!("BARbarianAI({ai_id})"),
            short_name: "BARb".into(),
            host: 0,
            start_pos: Some(StartPos {
                x: 512.0,
                y: 120.0,
                z: 4096.0,
            }),
            faction: "Cortex".into(),
            rgb_color: RgbColor { r: 0, g: 80, b: 255 },
            handicap: 0.0,
        });
        self
    }

    pub fn build(self) -> ReplayRecord {
        self.record
    }
}

pub fn player_record(player_id: i32, user_id: Option<i64>, name: &str, ally_team_id: i32) -> PlayerRecord {
    PlayerRecord {
        player_id,
        name: name.to_owned(),
        user_id,
        team_id: player_id,
        ally_team_id,
        handicap: 0.0,
        faction: "Armada".into(),
        country_code: Some("DE".into()),
        rgb_color: RgbColor { r: 255, g: 16, b: 5 },
        rank: 5,
        skill: Some("[28.65]".into()),
        skill_uncertainty: Some(2.47),
        start_pos: Some(StartPos {
            x: 1024.0,
            y: 100.0,
            z: 2048.0,
        }),
    }
}

/// Empty file of exactly `len` bytes; sparse where the filesystem allows.
pub fn sized_file(dir: &TempDir, name: &str, len: u64) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).expect("create replay file");
    file.set_len(len).expect("size replay file");
    path
}

/// Write the record as the decoder's JSON output.
pub fn json_file(dir: &TempDir, name: &str, record: &ReplayRecord) -> PathBuf {
    let path = dir.path().join(name);
    let body = serde_json::to_vec_pretty(record).expect("encode replay");
    std::fs::write(&path, body).expect("write replay");
    path
}
