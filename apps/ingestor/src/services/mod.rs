//! Application services.

pub mod ingest;
pub mod snapshot;

pub use ingest::{ingest_file, IngestSummary};
pub use snapshot::{refresh_all, save_maps_snapshot, save_users_snapshot, spawn_periodic_refresh};
