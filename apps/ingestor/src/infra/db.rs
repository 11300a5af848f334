use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Build ordered per-connection statements for SQLite.
/// Cascading deletes depend on `foreign_keys`, which SQLite leaves off by default.
fn sqlite_session_statements() -> [&'static str; 2] {
    ["PRAGMA foreign_keys = ON;", "PRAGMA busy_timeout = 5000;"]
}

/// Unified database connector for all profiles.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    match profile {
        DbProfile::InMemory | DbProfile::SqliteFile { .. } => {
            let connect_opts = SqliteConnectOptions::from_str(&url)
                .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
                .create_if_missing(true);

            // An in-memory database lives and dies with its single connection.
            let in_memory = matches!(profile, DbProfile::InMemory);
            let max_connections = if in_memory { 1 } else { 4 };

            let pool = SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(max_connections)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(Duration::from_secs(5))
                .after_connect(|conn, _meta| {
                    Box::pin(async move {
                        for stmt in sqlite_session_statements() {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        trace!("db=sqlite hook=after_connect ok");
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect_with(connect_opts)
                .await
                .map_err(|e| {
                    AppError::storage_unavailable(format!(
                        "failed to create SQLite connection pool: {e}"
                    ))
                })?;

            info!(
                engine = "sqlite",
                in_memory,
                max_connections,
                "pool=create"
            );
            Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
        }
        DbProfile::Prod | DbProfile::Test => {
            let mut opt = ConnectOptions::new(&url);
            opt.min_connections(1)
                .max_connections(16)
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(30))
                .sqlx_logging(false);

            let conn = Database::connect(opt).await.map_err(|e| {
                AppError::storage_unavailable(format!("failed to connect to Postgres: {e}"))
            })?;

            info!(engine = "postgres", ?profile, "pool=create");
            Ok(conn)
        }
    }
}

/// Connect and apply pending migrations.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;
    Ok(conn)
}
