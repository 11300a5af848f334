//! Read snapshots of users and maps for external readers.
//!
//! Each job reads a fixed column projection and replaces the whole cache value.
//! Jobs only read storage, so they never block an ingestion.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::cache::{MAPS_KEY, USERS_KEY};
use crate::error::AppError;
use crate::repos::{maps, users};
use crate::state::app_state::AppState;

/// Publish `[{id, username, countryCode}]` under `users`. Returns the row count.
pub async fn save_users_snapshot(state: &AppState) -> Result<usize, AppError> {
    let started = Instant::now();
    let rows = users::list_summaries(state.db()).await?;
    let count = rows.len();
    let encoded = encode(&rows)?;
    state.cache().set(USERS_KEY, encoded).await?;
    info!(
        key = USERS_KEY,
        rows = count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "users snapshot saved"
    );
    Ok(count)
}

/// Publish `[{id, scriptName, fileName}]` under `maps`. Returns the row count.
pub async fn save_maps_snapshot(state: &AppState) -> Result<usize, AppError> {
    let started = Instant::now();
    let rows = maps::list_summaries(state.db()).await?;
    let count = rows.len();
    let encoded = encode(&rows)?;
    state.cache().set(MAPS_KEY, encoded).await?;
    info!(
        key = MAPS_KEY,
        rows = count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "maps snapshot saved"
    );
    Ok(count)
}

/// Users first, then maps.
pub async fn refresh_all(state: &AppState) -> Result<(), AppError> {
    save_users_snapshot(state).await?;
    save_maps_snapshot(state).await?;
    Ok(())
}

/// Refresh both snapshots every `every`. Failures are logged and the loop keeps going.
pub fn spawn_periodic_refresh(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick fires immediately; startup already ran a refresh.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = refresh_all(&state).await {
                warn!(error = %err, retryable = err.is_retryable(), "snapshot refresh failed");
            }
        }
    })
}

fn encode<T: serde::Serialize>(rows: &[T]) -> Result<String, AppError> {
    serde_json::to_string(rows)
        .map_err(|e| AppError::internal(format!("failed to encode snapshot: {e}")))
}
