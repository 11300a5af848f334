//! Ingestion configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Replays above this many bytes are rejected before parsing (20 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 20 * 1_048_576;

/// Ingestion and snapshot configuration
#[derive(Debug, Clone, PartialEq)]
pub struct IngestConfig {
    /// Size guard threshold in bytes
    pub max_file_size_bytes: u64,
    /// Redis connection string for the snapshot cache
    pub redis_url: Option<String>,
    /// Periodic snapshot refresh; `None` refreshes only at startup and on demand
    pub snapshot_interval: Option<Duration>,
    /// Promote reprocessing notices from debug to info
    pub verbose: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            redis_url: None,
            snapshot_interval: None,
            verbose: false,
        }
    }
}

impl IngestConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let max_file_size_bytes = match env::var("MAX_FILE_SIZE_BYTES") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::config(format!(
                    "MAX_FILE_SIZE_BYTES must be a byte count, got '{raw}': {e}"
                ))
            })?,
            Err(_) => DEFAULT_MAX_FILE_SIZE_BYTES,
        };

        let redis_url = env::var("REDIS_URL").ok().filter(|s| !s.is_empty());

        let snapshot_interval = match env::var("SNAPSHOT_INTERVAL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    AppError::config(format!(
                        "SNAPSHOT_INTERVAL_SECS must be a number of seconds, got '{raw}': {e}"
                    ))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let verbose = env::var("INGEST_VERBOSE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            max_file_size_bytes,
            redis_url,
            snapshot_interval,
            verbose,
        })
    }

    /// Redis URL, required by the binary
    pub fn require_redis_url(&self) -> Result<&str, AppError> {
        self.redis_url
            .as_deref()
            .ok_or_else(|| AppError::config("REDIS_URL must be set"))
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
