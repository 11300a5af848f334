#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod cache;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod parser;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use cache::{CacheStore, MemoryCache, RedisCache};
pub use config::app::IngestConfig;
pub use config::db::{db_url, DbProfile};
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use parser::{JsonReplayParser, ReplayParser};
pub use services::ingest::{ingest_file, IngestSummary};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    ingest_test_support::logging::init();
}
