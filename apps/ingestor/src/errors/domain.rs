//! Storage-agnostic error raised by repos and the ingestion steps.
//!
//! Repos turn `sea_orm::DbErr` into this type through `map_db_err`; the
//! pipeline lifts it into `AppError` with `?`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Thing a decoded record referred to that was never declared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    AllyTeam,
    Other(String),
}

/// Unique key another writer got to first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    DemoExists,
    MapScriptName,
    UserExists,
    AliasExists,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Foreign-key or check violation, or a record that cannot be normalized
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict ({0:?}): {1}")]
    Conflict(ConflictKind, String),
    #[error("unknown reference ({0:?}): {1}")]
    NotFound(NotFoundKind, String),
    #[error("storage failure ({0:?}): {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}
