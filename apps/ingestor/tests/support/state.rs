use std::sync::Arc;

use ingest_test_support::unique_helpers::unique_str;
use ingestor::{build_state, AppState, DbProfile, IngestConfig, MemoryCache};
use tempfile::TempDir;

/// Fresh in-memory database with migrations applied, plus a handle on the cache double.
pub async fn memory_state() -> (AppState, Arc<MemoryCache>) {
    memory_state_with(IngestConfig::default()).await
}

pub async fn memory_state_with(config: IngestConfig) -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::new());
    let state = build_state()
        .with_db(DbProfile::InMemory)
        .with_cache(cache.clone())
        .with_config(config)
        .build()
        .await
        .expect("in-memory state should build");
    (state, cache)
}

/// File-backed SQLite under `dir`, pooled, so ingestions can overlap.
pub async fn file_state(dir: &TempDir) -> (AppState, Arc<MemoryCache>) {
    let path = dir.path().join(format!("{}.sqlite", unique_str("ingest")));
    let cache = Arc::new(MemoryCache::new());
    let state = build_state()
        .with_db(DbProfile::SqliteFile {
            path: path.to_string_lossy().into_owned(),
        })
        .with_cache(cache.clone())
        .build()
        .await
        .expect("file-backed state should build");
    (state, cache)
}
