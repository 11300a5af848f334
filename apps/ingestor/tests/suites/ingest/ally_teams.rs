use ingest_test_support::unique_helpers::{unique_game_id, unique_user_id};
use ingestor::domain::Preset;
use ingestor::ingest_file;
use ingestor::repos::{ally_teams, demos};
use tempfile::TempDir;

use crate::support::replay_fixture::{sized_file, ReplayBuilder};
use crate::support::state::memory_state;
use crate::support::static_parser::StaticParser;

#[tokio::test]
async fn only_first_winning_ally_team_is_flagged() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "ffa.sdfz", 2_048);
    let game_id = unique_game_id();

    let parser = StaticParser::new(
        ReplayBuilder::new(&game_id)
            .ally_teams(&[1, 2, 3])
            .winners(&[2, 3])
            .player(unique_user_id(), "one", 1)
            .player(unique_user_id(), "two", 2)
            .player(unique_user_id(), "three", 3)
            .build(),
    );
    let summary = ingest_file(&state, &parser, &path).await?;
    assert_eq!(summary.preset, Preset::Ffa);

    let teams = ally_teams::ally_teams_for_demo(state.db(), &game_id).await?;
    let flags: Vec<(i32, bool)> = teams.iter().map(|t| (t.ally_team_id, t.winning_team)).collect();
    assert_eq!(flags, vec![(1, false), (2, true), (3, false)]);

    let demo = demos::find_demo(state.db(), &game_id).await?.expect("demo stored");
    assert!(demo.game_ended_normally);
    Ok(())
}

#[tokio::test]
async fn empty_winning_list_flags_nobody() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "aborted.sdfz", 2_048);
    let game_id = unique_game_id();

    let parser = StaticParser::new(
        ReplayBuilder::new(&game_id)
            .ally_teams(&[1, 2, 3])
            .player(unique_user_id(), "one", 1)
            .build(),
    );
    ingest_file(&state, &parser, &path).await?;

    let teams = ally_teams::ally_teams_for_demo(state.db(), &game_id).await?;
    assert_eq!(teams.len(), 3);
    assert!(teams.iter().all(|t| !t.winning_team));

    let demo = demos::find_demo(state.db(), &game_id).await?.expect("demo stored");
    assert!(!demo.game_ended_normally);
    Ok(())
}

#[tokio::test]
async fn winner_outside_ally_teams_is_tolerated() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "odd.sdfz", 2_048);
    let game_id = unique_game_id();

    let parser = StaticParser::new(ReplayBuilder::new(&game_id).winners(&[9]).build());
    ingest_file(&state, &parser, &path).await?;

    let teams = ally_teams::ally_teams_for_demo(state.db(), &game_id).await?;
    assert!(teams.iter().all(|t| !t.winning_team));
    Ok(())
}

#[tokio::test]
async fn ais_count_toward_preset_and_bot_flag() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "coop.sdfz", 2_048);
    let game_id = unique_game_id();

    let parser = StaticParser::new(
        ReplayBuilder::new(&game_id)
            .player(unique_user_id(), "human", 0)
            .ai(0, 1)
            .ai(1, 1)
            .build(),
    );
    let summary = ingest_file(&state, &parser, &path).await?;
    assert_eq!(summary.preset, Preset::Team);
    assert_eq!(summary.ais, 2);

    let demo = demos::find_demo(state.db(), &game_id).await?.expect("demo stored");
    assert!(demo.has_bots);
    assert_eq!(demo.preset, Preset::Team);
    Ok(())
}

#[tokio::test]
async fn single_ally_team_solo_game_is_duel() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "sandbox.sdfz", 2_048);

    let parser = StaticParser::new(
        ReplayBuilder::new(&unique_game_id())
            .ally_teams(&[0])
            .player(unique_user_id(), "solo", 0)
            .build(),
    );
    let summary = ingest_file(&state, &parser, &path).await?;
    assert_eq!(summary.preset, Preset::Duel);
    Ok(())
}
