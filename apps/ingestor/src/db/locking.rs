//! Per-game serialization of concurrent ingestions.

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseTransaction, Statement};
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

use crate::errors::domain::DomainError;

pub fn pg_lock_id(key: &str) -> i64 {
    xxh3_64(key.as_bytes()) as i64
}

/// Take a transaction-scoped lock for one game id.
///
/// On Postgres this blocks until no other open transaction holds the same
/// game's advisory lock; the lock is released at commit or rollback. SQLite
/// serializes writers at the database level, so nothing is taken there.
pub async fn lock_game_for_txn(txn: &DatabaseTransaction, game_id: &str) -> Result<(), DomainError> {
    match txn.get_database_backend() {
        DatabaseBackend::Postgres => {
            let key = pg_lock_id(&format!("demo:{game_id}"));
            txn.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "SELECT pg_advisory_xact_lock($1)",
                [key.into()],
            ))
            .await?;
            debug!(game_id, lock_key = key, "advisory lock acquired");
            Ok(())
        }
        _ => Ok(()),
    }
}
