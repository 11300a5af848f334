use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future returned by a transaction body; borrows the transaction for `'c`.
pub type TxnFuture<'c, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'c>>;

/// Execute a function within a database transaction
///
/// Begins a transaction on the shared pool, runs the closure, commits on Ok
/// and rolls back on Err. The closure's error is returned unchanged even when
/// the rollback itself fails.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    R: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R> + Send,
{
    let txn = state.db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback failed after transaction error");
            }
            Err(err)
        }
    }
}
