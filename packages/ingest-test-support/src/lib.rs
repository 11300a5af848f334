//! Ingest test support utilities
//!
//! Shared helpers for the ingestor's integration tests: unified logging
//! initialization and unique fixture identifiers.

pub mod logging;
pub mod unique_helpers;
