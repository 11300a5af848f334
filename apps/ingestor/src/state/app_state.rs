use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::cache::CacheStore;
use crate::config::app::IngestConfig;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database pool shared by ingestions and snapshot jobs
    pub db: DatabaseConnection,
    /// Injected key-value store for snapshots
    pub cache: Arc<dyn CacheStore>,
    /// Ingestion configuration
    pub config: IngestConfig,
}

impl AppState {
    /// Create a new AppState with the given database connection, cache, and config
    pub fn new(db: DatabaseConnection, cache: Arc<dyn CacheStore>, config: IngestConfig) -> Self {
        Self { db, cache, config }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn cache(&self) -> &dyn CacheStore {
        self.cache.as_ref()
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
