use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production Postgres database
    Prod,
    /// Test Postgres database - enforces safety rules
    Test,
    /// SQLite in-memory database (single connection, tests only)
    InMemory,
    /// SQLite database file, created if missing
    SqliteFile { path: String },
}

/// Builds a database URL from environment variables based on profile
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile { path } => Ok(format!("sqlite://{path}?mode=rwc")),
        DbProfile::Prod | DbProfile::Test => {
            let host = host();
            let port = port();
            let db_name = db_name(profile)?;
            let (username, password) = credentials()?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

/// Get database name based on profile
fn db_name(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        _ => must_var("PROD_DB"),
    }
}

fn credentials() -> Result<(String, String), AppError> {
    let username = must_var("APP_DB_USER")?;
    let password = must_var("APP_DB_PASSWORD")?;
    Ok((username, password))
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
