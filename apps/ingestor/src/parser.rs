//! Replay parser seam.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ReplayRecord;
use crate::error::AppError;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed replay {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ParserError> for AppError {
    fn from(err: ParserError) -> Self {
        AppError::parse_failure(err.to_string())
    }
}

/// Turns a replay file into a decoded record.
#[async_trait]
pub trait ReplayParser: Send + Sync {
    async fn parse_file(&self, path: &Path) -> Result<ReplayRecord, ParserError>;
}

/// Reads records the binary decoder has already serialized to JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReplayParser;

#[async_trait]
impl ReplayParser for JsonReplayParser {
    async fn parse_file(&self, path: &Path) -> Result<ReplayRecord, ParserError> {
        let display = path.display().to_string();
        let bytes = tokio::fs::read(path).await.map_err(|source| ParserError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ParserError::Decode {
            path: display,
            source,
        })
    }
}
