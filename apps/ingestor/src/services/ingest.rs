//! Replay ingestion: one file in, one normalized game graph out.
//!
//! The size check and parse run outside storage. Everything from purging a
//! previous ingestion of the same game through the last AI row runs in a single
//! transaction, so a failure at any step leaves storage as it was.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use sea_orm::DatabaseTransaction;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, Instrument};

use crate::adapters::ais_sea::AiCreate;
use crate::adapters::ally_teams_sea::AllyTeamCreate;
use crate::adapters::demos_sea::DemoCreate;
use crate::adapters::participants_sea::{PlayerCreate, SpectatorCreate};
use crate::adapters::users_sea::UserProfile;
use crate::db::locking::lock_game_for_txn;
use crate::db::txn::with_txn;
use crate::domain::{check_size, classify, Participant, Preset, ReplayRecord};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::parser::ReplayParser;
use crate::repos::{ais, ally_teams, demos, maps, participants, users};
use crate::state::app_state::AppState;

/// What a successful ingestion wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestSummary {
    pub game_id: String,
    pub map_id: i64,
    pub preset: Preset,
    /// A previous ingestion of the same game was purged first
    pub replaced: bool,
    pub players: usize,
    pub spectators: usize,
    pub ais: usize,
}

/// Ingest one replay file.
///
/// Fails with `FileTooLarge` before the parser is touched, `ParseFailure` when
/// the parser rejects the file, `InvalidRecord` when the decoded record cannot
/// be normalized, and storage errors otherwise. No retries happen here.
pub async fn ingest_file(
    state: &AppState,
    parser: &dyn ReplayParser,
    path: &Path,
) -> Result<IngestSummary, AppError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::invalid_record(format!("{} has no file name", path.display())))?;

    let span = tracing::info_span!("ingest", file = %file_name);
    ingest_inner(state, parser, path, file_name)
        .instrument(span)
        .await
}

async fn ingest_inner(
    state: &AppState,
    parser: &dyn ReplayParser,
    path: &Path,
    file_name: String,
) -> Result<IngestSummary, AppError> {
    let started = Instant::now();

    let size = tokio::fs::metadata(path).await?.len();
    check_size(size, state.config().max_file_size_bytes)?;

    let record = parser.parse_file(path).await?;
    debug!(
        game_id = record.game_id(),
        players = record.info.players.len(),
        spectators = record.info.spectators.len(),
        ais = record.info.ais.len(),
        "replay decoded"
    );
    check_unique_slots(&record)?;

    let verbose = state.config().verbose;
    let summary = with_txn(state, move |txn| {
        Box::pin(async move { persist_record(txn, &record, &file_name, verbose).await })
    })
    .await?;

    info!(
        game_id = %summary.game_id,
        preset = %summary.preset,
        replaced = summary.replaced,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "replay ingested"
    );
    Ok(summary)
}

/// Write the whole game graph. Parents are created before children: map, demo,
/// ally teams, users, then players, spectators and AIs.
async fn persist_record(
    txn: &DatabaseTransaction,
    record: &ReplayRecord,
    file_name: &str,
    verbose: bool,
) -> Result<IngestSummary, AppError> {
    let game_id = record.game_id();
    lock_game_for_txn(txn, game_id).await?;

    let replaced = demos::delete_demo(txn, game_id).await?;
    if replaced {
        if verbose {
            info!(game_id, "Demo already processed, replacing");
        } else {
            debug!(game_id, "Demo already processed, replacing");
        }
    }

    let (map, map_created) = maps::ensure_map(txn, record.map_script_name()).await?;
    debug!(map = %map.script_name, map_id = map.id, map_created, "map resolved");

    let preset = classify(record.info.ally_teams.len(), record.participant_count());
    let meta = &record.info.meta;
    let demo = DemoCreate::new(game_id, map.id, file_name, meta.start_time)
        .with_versions(&meta.engine, &record.info.host_settings.gametype)
        .with_durations(meta.duration_ms, meta.full_duration_ms)
        .with_settings(
            to_json(&record.info.host_settings)?,
            Value::Object(record.info.game_settings.clone()),
            Value::Object(record.info.map_settings.clone()),
        )
        .with_chatlog(to_json(&record.chatlog)?)
        .with_outcome(preset.into(), record.ended_normally(), record.has_bots());
    demos::create_demo(txn, demo).await?;

    let winner = record.winning_ally_team();
    let mut ally_team_rows: HashMap<i32, i64> = HashMap::new();
    for team in &record.info.ally_teams {
        let created = ally_teams::create_ally_team(
            txn,
            AllyTeamCreate {
                demo_id: game_id.to_owned(),
                ally_team_id: team.ally_team_id,
                start_box: team.start_box.as_ref().map(to_json).transpose()?,
                winning_team: Some(team.ally_team_id) == winner,
            },
        )
        .await?;
        ally_team_rows.insert(created.ally_team_id, created.row_id);
    }

    let mut player_count = 0;
    let mut spectator_count = 0;
    for participant in record.participants() {
        let user_id = participant.user_id().ok_or_else(|| {
            AppError::invalid_record(format!(
                "participant {} ({}) has no user id",
                participant.player_id(),
                participant.name()
            ))
        })?;

        let profile = UserProfile::new(user_id, participant.name())
            .with_country(participant.country_code().map(str::to_owned))
            .with_rank(participant.rank())
            .with_skill(
                participant.skill().map(str::to_owned),
                participant.skill_uncertainty(),
            );
        let (_, user_created) = users::upsert_user(txn, profile).await?;
        let alias_created = users::ensure_alias(txn, user_id, participant.name()).await?;
        debug!(user_id, user_created, alias_created, "user resolved");

        match participant {
            Participant::Player(p) => {
                let ally_team_row_id = ally_team_row(&ally_team_rows, p.ally_team_id, "player")?;
                participants::create_player(
                    txn,
                    PlayerCreate {
                        demo_id: game_id.to_owned(),
                        ally_team_row_id,
                        user_id,
                        player_id: p.player_id,
                        name: p.name.clone(),
                        team_id: p.team_id,
                        handicap: p.handicap,
                        faction: p.faction.clone(),
                        country_code: p.country_code.clone(),
                        rgb_color: to_json(&p.rgb_color)?,
                        rank: p.rank,
                        skill: p.skill.clone(),
                        skill_uncertainty: p.skill_uncertainty,
                        start_pos: p.start_pos.as_ref().map(to_json).transpose()?,
                    },
                )
                .await?;
                player_count += 1;
            }
            Participant::Spectator(s) => {
                participants::create_spectator(
                    txn,
                    SpectatorCreate {
                        demo_id: game_id.to_owned(),
                        user_id,
                        player_id: s.player_id,
                        name: s.name.clone(),
                        country_code: s.country_code.clone(),
                        rank: s.rank,
                        skill: s.skill.clone(),
                        skill_uncertainty: s.skill_uncertainty,
                    },
                )
                .await?;
                spectator_count += 1;
            }
        }
    }

    for ai in &record.info.ais {
        let ally_team_row_id = ally_team_row(&ally_team_rows, ai.ally_team_id, "ai")?;
        ais::create_ai(
            txn,
            AiCreate {
                ally_team_row_id,
                ai_id: ai.ai_id,
                name: ai.name.clone(),
                short_name: ai.short_name.clone(),
                host: ai.host,
                start_pos: ai.start_pos.as_ref().map(to_json).transpose()?,
                faction: ai.faction.clone(),
                rgb_color: to_json(&ai.rgb_color)?,
                handicap: ai.handicap,
            },
        )
        .await?;
    }

    Ok(IngestSummary {
        game_id: game_id.to_owned(),
        map_id: map.id,
        preset,
        replaced,
        players: player_count,
        spectators: spectator_count,
        ais: record.info.ais.len(),
    })
}

/// Ally-team, player and spectator ids are each unique within a game.
fn check_unique_slots(record: &ReplayRecord) -> Result<(), AppError> {
    let info = &record.info;
    first_repeat(info.ally_teams.iter().map(|t| t.ally_team_id), "ally team")?;
    first_repeat(info.players.iter().map(|p| p.player_id), "player")?;
    first_repeat(info.spectators.iter().map(|s| s.player_id), "spectator")?;
    Ok(())
}

fn first_repeat(ids: impl Iterator<Item = i32>, what: &str) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::invalid_record(format!("{what} id {id} appears more than once")));
        }
    }
    Ok(())
}

fn ally_team_row(rows: &HashMap<i32, i64>, ally_team_id: i32, owner: &str) -> Result<i64, DomainError> {
    rows.get(&ally_team_id).copied().ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::AllyTeam,
            format!("{owner} references unknown ally team {ally_team_id}"),
        )
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("failed to encode replay field: {e}")))
}
