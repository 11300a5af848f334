use std::sync::Arc;

use crate::cache::{CacheStore, MemoryCache};
use crate::config::app::IngestConfig;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: IngestConfig,
    db_profile: Option<DbProfile>,
    cache: Option<Arc<dyn CacheStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: IngestConfig::default(),
            db_profile: None,
            cache: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_config(mut self, config: IngestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Connects, migrates, and wires the cache.
    /// Without an injected cache the state gets a process-local `MemoryCache`.
    pub async fn build(self) -> Result<AppState, AppError> {
        let profile = self
            .db_profile
            .ok_or_else(|| AppError::config("a database profile is required"))?;
        let conn = bootstrap_db(&profile).await?;
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MemoryCache::new()) as Arc<dyn CacheStore>);
        Ok(AppState::new(conn, cache, self.config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
