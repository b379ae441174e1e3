//! Create flat action

use sqlx::PgConnection;
use tracing::{error, info};

use crate::domains::flat::errors::FlatError;
use crate::domains::flat::models::{Flat, NewFlat};
use crate::domains::house::models::House;
use crate::kernel::{begin_bounded, rollback, ServerDeps};

/// Insert a flat (always `created`) and advance its house's `updated_at`,
/// atomically. On any failure the transaction is rolled back first.
pub async fn create_flat(new_flat: NewFlat, deps: &ServerDeps) -> Result<Flat, FlatError> {
    let mut tx = begin_bounded(&deps.db_pool, deps.tx_timeouts).await?;

    let flat = match insert_and_touch(&new_flat, &mut tx).await {
        Ok(flat) => flat,
        Err(e) => {
            rollback(tx).await;
            return Err(e);
        }
    };

    tx.commit().await.inspect_err(|e| {
        error!(house_id = %new_flat.house_id, error = %e, "Failed to commit flat creation");
    })?;

    info!(flat_id = %flat.id, house_id = %flat.house_id, "Flat created");
    Ok(flat)
}

async fn insert_and_touch(new_flat: &NewFlat, conn: &mut PgConnection) -> Result<Flat, FlatError> {
    let flat = Flat::insert(new_flat, &mut *conn).await.inspect_err(|e| {
        error!(house_id = %new_flat.house_id, error = %e, "Failed to insert flat");
    })?;

    House::touch(new_flat.house_id, conn).await.inspect_err(|e| {
        error!(house_id = %new_flat.house_id, error = %e, "Failed to touch house");
    })?;

    Ok(flat)
}
