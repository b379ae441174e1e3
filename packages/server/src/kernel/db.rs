//! Transaction helpers for the lifecycle engine.
//!
//! Every engine transaction is opened through [`begin_bounded`] so that a
//! lock wait or slow statement fails with a store error instead of holding a
//! worker, and closed through either `commit` or [`rollback`].

use std::time::Duration;

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{error, warn};

/// Upper bound for lock waits and statements inside one engine transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxTimeouts {
    pub lock_timeout: Duration,
    pub statement_timeout: Duration,
}

impl TxTimeouts {
    pub fn uniform(timeout: Duration) -> Self {
        Self {
            lock_timeout: timeout,
            statement_timeout: timeout,
        }
    }
}

impl Default for TxTimeouts {
    fn default() -> Self {
        Self::uniform(Duration::from_secs(5))
    }
}

/// Begin a transaction with `lock_timeout` / `statement_timeout` scoped to it.
pub async fn begin_bounded(
    pool: &PgPool,
    timeouts: TxTimeouts,
) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await.inspect_err(|e| {
        error!(error = %e, "Failed to start transaction");
    })?;

    // SET LOCAL does not take bind parameters; set_config(.., true) is the
    // transaction-scoped equivalent.
    sqlx::query("SELECT set_config('lock_timeout', $1, true), set_config('statement_timeout', $2, true)")
        .bind(format!("{}ms", timeouts.lock_timeout.as_millis()))
        .bind(format!("{}ms", timeouts.statement_timeout.as_millis()))
        .execute(&mut *tx)
        .await
        .inspect_err(|e| {
            error!(error = %e, "Failed to apply transaction timeouts");
        })?;

    Ok(tx)
}

/// Roll back explicitly so the database is in its pre-operation state before
/// the caller sees the error. A failed rollback is logged; the connection is
/// discarded by the pool either way.
pub async fn rollback(tx: Transaction<'static, Postgres>) {
    if let Err(e) = tx.rollback().await {
        warn!(error = %e, "Transaction rollback failed");
    }
}
