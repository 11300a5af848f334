//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and the pipeline then maps
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the first `table.column` from SQLite "UNIQUE constraint failed: ..." messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = error_msg.find("UNIQUE constraint failed: ")?;
    let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
    rest.split_whitespace()
        .next()
        .map(|s| s.trim_end_matches(|c| c == ',' || c == '"'))
}

/// Map SQLite table.column format to domain-specific conflict errors.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "demos.id" => Some((ConflictKind::DemoExists, "Demo already ingested")),
        "maps.script_name" => Some((ConflictKind::MapScriptName, "Map already exists")),
        "users.id" => Some((ConflictKind::UserExists, "User already exists")),
        "aliases.user_id" => Some((ConflictKind::AliasExists, "Alias already exists")),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("demos_pkey") {
        return Some((ConflictKind::DemoExists, "Demo already ingested"));
    }
    if error_msg.contains("ux_maps_script_name") {
        return Some((ConflictKind::MapScriptName, "Map already exists"));
    }
    if error_msg.contains("users_pkey") {
        return Some((ConflictKind::UserExists, "User already exists"));
    }
    if error_msg.contains("ux_aliases_user_alias") {
        return Some((ConflictKind::AliasExists, "Alias already exists"));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(NotFoundKind::Other(what.clone()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");

        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }

        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "40P01") || mentions_sqlstate(&error_msg, "40001") {
        warn!(raw_error = %error_msg, "Serialization failure or deadlock");
        return DomainError::conflict(
            ConflictKind::Other("Serialization".into()),
            "Concurrent transaction conflict",
        );
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
        || error_msg.contains("database is locked")
    {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
