use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("File too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Parse failure: {detail}")]
    ParseFailure { detail: String },
    #[error("Invalid record: {detail}")]
    InvalidRecord { detail: String },
    #[error("Storage conflict: {detail}")]
    StorageConflict { detail: String },
    #[error("Storage unavailable: {detail}")]
    StorageUnavailable { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Cache error: {detail}")]
    Cache { detail: String },
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for this variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::FileTooLarge { .. } => ErrorCode::FileTooLarge,
            AppError::ParseFailure { .. } => ErrorCode::ParseFailure,
            AppError::InvalidRecord { .. } => ErrorCode::InvalidRecord,
            AppError::StorageConflict { .. } => ErrorCode::StorageConflict,
            AppError::StorageUnavailable { .. } => ErrorCode::StorageUnavailable,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::Cache { .. } => ErrorCode::CacheError,
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Whether a dispatcher may retry the same file later without operator action.
    ///
    /// The ingestor itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::StorageConflict { .. }
                | AppError::StorageUnavailable { .. }
                | AppError::Cache { .. }
        )
    }

    pub fn file_too_large(size: u64, limit: u64) -> Self {
        Self::FileTooLarge { size, limit }
    }

    pub fn parse_failure(detail: impl Into<String>) -> Self {
        Self::ParseFailure {
            detail: detail.into(),
        }
    }

    pub fn invalid_record(detail: impl Into<String>) -> Self {
        Self::InvalidRecord {
            detail: detail.into(),
        }
    }

    pub fn storage_conflict(detail: impl Into<String>) -> Self {
        Self::StorageConflict {
            detail: detail.into(),
        }
    }

    pub fn storage_unavailable(detail: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn cache(detail: impl Into<String>) -> Self {
        Self::Cache {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::InvalidRecord { detail },
            DomainError::Conflict(_, detail) => AppError::StorageConflict { detail },
            DomainError::NotFound(_, detail) => AppError::InvalidRecord { detail },
            DomainError::Infra(InfraErrorKind::DbUnavailable | InfraErrorKind::Timeout, detail) => {
                AppError::StorageUnavailable { detail }
            }
            DomainError::Infra(InfraErrorKind::DataCorruption, detail) => {
                AppError::Internal { detail }
            }
            DomainError::Infra(_, detail) => AppError::Db { detail },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(map_db_err(e))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io {
            detail: e.to_string(),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
