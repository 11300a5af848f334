use std::time::Duration;

use ingest_test_support::unique_helpers::{unique_game_id, unique_user_id};
use ingestor::cache::{CacheStore, USERS_KEY};
use ingestor::ingest_file;
use ingestor::services::snapshot::spawn_periodic_refresh;
use serde_json::Value;
use tempfile::TempDir;

use crate::support::replay_fixture::{sized_file, ReplayBuilder};
use crate::support::state::memory_state;
use crate::support::static_parser::StaticParser;

#[tokio::test]
async fn periodic_refresh_picks_up_new_users() -> Result<(), Box<dyn std::error::Error>> {
    let (state, cache) = memory_state().await;
    let handle = spawn_periodic_refresh(state.clone(), Duration::from_millis(20));

    let dir = TempDir::new()?;
    let path = sized_file(&dir, "game.sdfz", 1_024);
    let parser = StaticParser::new(
        ReplayBuilder::new(&unique_game_id())
            .player(unique_user_id(), "alpha", 0)
            .build(),
    );
    ingest_file(&state, &parser, &path).await?;

    let mut published = 0;
    for _ in 0..100 {
        if let Some(raw) = cache.get(USERS_KEY).await? {
            let decoded: Vec<Value> = serde_json::from_str(&raw)?;
            published = decoded.len();
            if published == 1 {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    handle.abort();

    assert_eq!(published, 1);
    Ok(())
}
