//! Error codes surfaced by the ingestor.
//!
//! Dispatchers key their per-file bookkeeping on these strings, so each
//! variant maps 1:1 to a stable SCREAMING_SNAKE_CASE value.

use core::fmt;

/// Centralized error codes for ingestion and snapshot failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input
    /// Replay file exceeds the configured size limit
    FileTooLarge,
    /// Parser collaborator rejected the file
    ParseFailure,
    /// Decoded record cannot be normalized
    InvalidRecord,

    // Storage
    /// Unique constraint lost to a concurrent writer
    StorageConflict,
    /// Database unreachable or timing out
    StorageUnavailable,
    /// Any other database failure
    DbError,

    // Cache
    /// Cache store write failed
    CacheError,

    // System
    /// Filesystem error outside the parser
    IoError,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FileTooLarge => "FILE_TOO_LARGE",
            Self::ParseFailure => "PARSE_FAILURE",
            Self::InvalidRecord => "INVALID_RECORD",

            Self::StorageConflict => "STORAGE_CONFLICT",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::DbError => "DB_ERROR",

            Self::CacheError => "CACHE_ERROR",

            Self::IoError => "IO_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
