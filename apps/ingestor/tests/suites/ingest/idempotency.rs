use std::io;
use std::sync::{Arc, Mutex};

use ingest_test_support::unique_helpers::{unique_game_id, unique_user_id};
use ingestor::domain::Preset;
use ingestor::entities::{Ais, AllyTeams, Demos, Maps, Players, Spectators, Users};
use ingestor::repos::{ally_teams, demos, maps, participants};
use ingestor::{ingest_file, IngestConfig};
use sea_orm::{EntityTrait, PaginatorTrait};
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;

use crate::support::replay_fixture::{sized_file, ReplayBuilder, DEFAULT_MAP};
use crate::support::state::{file_state, memory_state, memory_state_with};
use crate::support::static_parser::StaticParser;

#[tokio::test]
async fn reprocessing_same_file_keeps_one_demo_with_identical_children(
) -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "2026-09-14_20-15-00_supreme.sdfz", 4_096);

    let game_id = unique_game_id();
    let record = ReplayBuilder::new(&game_id)
        .winners(&[1])
        .player(unique_user_id(), "alpha", 0)
        .player(unique_user_id(), "bravo", 1)
        .spectator(Some(unique_user_id()), "watcher")
        .ai(0, 1)
        .build();
    let parser = StaticParser::new(record);

    let first = ingest_file(&state, &parser, &path).await?;
    assert!(!first.replaced);

    let teams_before = ally_teams::ally_teams_for_demo(state.db(), &game_id).await?;
    let players_before = participants::players_for_demo(state.db(), &game_id).await?;

    let second = ingest_file(&state, &parser, &path).await?;
    assert!(second.replaced);
    assert_eq!(second.preset, first.preset);

    assert_eq!(Demos::find().count(state.db()).await?, 1);
    assert_eq!(Maps::find().count(state.db()).await?, 1);
    assert_eq!(AllyTeams::find().count(state.db()).await?, 2);
    assert_eq!(Players::find().count(state.db()).await?, 2);
    assert_eq!(Spectators::find().count(state.db()).await?, 1);
    assert_eq!(Ais::find().count(state.db()).await?, 1);

    let teams_after = ally_teams::ally_teams_for_demo(state.db(), &game_id).await?;
    let players_after = participants::players_for_demo(state.db(), &game_id).await?;
    let strip_team = |t: &ally_teams::AllyTeam| (t.ally_team_id, t.winning_team, t.start_box.clone());
    assert_eq!(
        teams_before.iter().map(strip_team).collect::<Vec<_>>(),
        teams_after.iter().map(strip_team).collect::<Vec<_>>()
    );
    let strip_player = |p: &participants::Player| (p.player_id, p.user_id, p.name.clone(), p.team_id);
    assert_eq!(
        players_before.iter().map(strip_player).collect::<Vec<_>>(),
        players_after.iter().map(strip_player).collect::<Vec<_>>()
    );

    let demo = demos::find_demo(state.db(), &game_id).await?.expect("demo stored");
    assert_eq!(demo.file_name, "2026-09-14_20-15-00_supreme.sdfz");
    assert_eq!(demo.preset, Preset::Team);
    assert!(demo.has_bots);
    assert!(demo.game_ended_normally);

    let map = Maps::find().one(state.db()).await?.expect("map stored");
    assert_eq!(map.script_name, DEFAULT_MAP);
    assert_eq!(map.file_name, None);
    Ok(())
}

#[tokio::test]
async fn reprocessing_picks_up_changed_content() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "game.sdfz", 1_024);
    let game_id = unique_game_id();

    let parser = StaticParser::new(
        ReplayBuilder::new(&game_id)
            .player(unique_user_id(), "alpha", 0)
            .player(unique_user_id(), "bravo", 1)
            .player(unique_user_id(), "charlie", 1)
            .build(),
    );
    let first = ingest_file(&state, &parser, &path).await?;
    assert_eq!(first.preset, Preset::Team);

    parser.serve(
        ReplayBuilder::new(&game_id)
            .player(unique_user_id(), "delta", 0)
            .build(),
    );
    let second = ingest_file(&state, &parser, &path).await?;
    assert!(second.replaced);
    assert_eq!(second.preset, Preset::Duel);

    let players = participants::players_for_demo(state.db(), &game_id).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "delta");
    Ok(())
}

#[tokio::test]
async fn existing_map_is_reused_across_games() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state().await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "game.sdfz", 512);

    let parser = StaticParser::new(ReplayBuilder::new(&unique_game_id()).build());
    let first = ingest_file(&state, &parser, &path).await?;

    parser.serve(ReplayBuilder::new(&unique_game_id()).build());
    let second = ingest_file(&state, &parser, &path).await?;

    parser.serve(ReplayBuilder::new(&unique_game_id()).map("Red Comet Remake 1.8").build());
    let third = ingest_file(&state, &parser, &path).await?;

    assert_eq!(first.map_id, second.map_id);
    assert_ne!(first.map_id, third.map_id);
    let stored = maps::find_map(state.db(), DEFAULT_MAP).await?.expect("map stored");
    assert_eq!(stored.id, first.map_id);
    assert!(maps::find_map(state.db(), "Never Played 1.0").await?.is_none());
    assert_eq!(Maps::find().count(state.db()).await?, 2);
    assert_eq!(Demos::find().count(state.db()).await?, 3);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reprocessing_leaves_one_demo() -> Result<(), Box<dyn std::error::Error>> {
    const RUNS: usize = 6;

    let dir = TempDir::new()?;
    let (state, _cache) = file_state(&dir).await;
    let path = sized_file(&dir, "rush.sdfz", 2_048);
    let game_id = unique_game_id();

    let parser = Arc::new(StaticParser::new(
        ReplayBuilder::new(&game_id)
            .winners(&[0])
            .player(unique_user_id(), "alpha", 0)
            .player(unique_user_id(), "bravo", 1)
            .spectator(Some(unique_user_id()), "watcher")
            .ai(0, 1)
            .build(),
    ));

    let handles: Vec<_> = (0..RUNS)
        .map(|_| {
            let state = state.clone();
            let parser = parser.clone();
            let path = path.clone();
            tokio::spawn(async move { ingest_file(&state, parser.as_ref(), &path).await })
        })
        .collect();

    let mut fresh = 0;
    for handle in handles {
        let summary = handle.await??;
        assert_eq!(summary.game_id, game_id);
        if !summary.replaced {
            fresh += 1;
        }
    }
    assert_eq!(fresh, 1, "exactly one run finds no prior demo");
    assert_eq!(parser.calls(), RUNS);

    assert_eq!(Demos::find().count(state.db()).await?, 1);
    assert_eq!(AllyTeams::find().count(state.db()).await?, 2);
    assert_eq!(Players::find().count(state.db()).await?, 2);
    assert_eq!(Spectators::find().count(state.db()).await?, 1);
    assert_eq!(Ais::find().count(state.db()).await?, 1);
    assert_eq!(Users::find().count(state.db()).await?, 3);
    assert_eq!(Maps::find().count(state.db()).await?, 1);

    let winners: Vec<i32> = ally_teams::ally_teams_for_demo(state.db(), &game_id)
        .await?
        .into_iter()
        .filter(|t| t.winning_team)
        .map(|t| t.ally_team_id)
        .collect();
    assert_eq!(winners, vec![0]);
    Ok(())
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Route this thread's events at info and above into a buffer.
fn capture_info() -> (Captured, DefaultGuard) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    (captured, tracing::subscriber::set_default(subscriber))
}

async fn reprocess_twice(config: IngestConfig) -> Result<String, Box<dyn std::error::Error>> {
    let (state, _cache) = memory_state_with(config).await;
    let dir = TempDir::new()?;
    let path = sized_file(&dir, "loud.sdfz", 1_024);
    let parser = StaticParser::new(
        ReplayBuilder::new(&unique_game_id())
            .player(unique_user_id(), "alpha", 0)
            .build(),
    );

    let (captured, _guard) = capture_info();
    ingest_file(&state, &parser, &path).await?;
    let second = ingest_file(&state, &parser, &path).await?;
    assert!(second.replaced);
    Ok(captured.text())
}

#[tokio::test]
async fn verbose_reprocessing_is_announced_at_info() -> Result<(), Box<dyn std::error::Error>> {
    let logs = reprocess_twice(IngestConfig::default().with_verbose(true)).await?;
    assert_eq!(logs.matches("Demo already processed, replacing").count(), 1);
    Ok(())
}

#[tokio::test]
async fn quiet_reprocessing_stays_below_info() -> Result<(), Box<dyn std::error::Error>> {
    let logs = reprocess_twice(IngestConfig::default()).await?;
    assert!(!logs.contains("Demo already processed"));
    assert!(logs.contains("replay ingested"));
    Ok(())
}
