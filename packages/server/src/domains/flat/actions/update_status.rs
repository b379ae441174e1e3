//! Update flat status action

use sqlx::PgConnection;
use tracing::{error, info, warn};

use crate::common::{FlatId, UserId};
use crate::domains::flat::errors::FlatError;
use crate::domains::flat::machines::{FlatCommand, FlatMachine};
use crate::domains::flat::models::{Flat, FlatStatus};
use crate::kernel::{begin_bounded, rollback, ServerDeps};

/// Drive one state-machine transition for `flat_id` on behalf of `actor`.
///
/// The flat row is read `FOR UPDATE`, so concurrent calls for the same flat
/// run one after another and each decides against the state the previous one
/// committed. Calls for different flats do not wait on each other.
pub async fn update_flat_status(
    actor: UserId,
    flat_id: FlatId,
    desired: FlatStatus,
    deps: &ServerDeps,
) -> Result<Flat, FlatError> {
    let mut tx = begin_bounded(&deps.db_pool, deps.tx_timeouts).await?;

    let previous = match apply_transition(actor, flat_id, desired, &mut tx).await {
        Ok(previous) => previous,
        Err(e) => {
            rollback(tx).await;
            if matches!(e, FlatError::Transition(_) | FlatError::Authorization(_)) {
                warn!(flat_id = %flat_id, actor = %actor, desired = %desired, error = %e, "Flat transition rejected");
            }
            return Err(e);
        }
    };

    tx.commit().await.inspect_err(|e| {
        error!(flat_id = %flat_id, error = %e, "Failed to commit flat status change");
    })?;

    info!(
        flat_id = %flat_id,
        actor = %actor,
        from = %previous,
        to = %desired,
        "Flat status changed"
    );

    // The commit already serialized the change; reading outside the
    // transaction returns at least that state.
    Flat::find_by_id(flat_id, &deps.db_pool)
        .await
        .inspect_err(|e| {
            error!(flat_id = %flat_id, error = %e, "Failed to re-read flat after status change");
        })?
        .ok_or(FlatError::NotFound(flat_id))
}

/// Returns the status the flat had before the transition.
async fn apply_transition(
    actor: UserId,
    flat_id: FlatId,
    desired: FlatStatus,
    conn: &mut PgConnection,
) -> Result<FlatStatus, FlatError> {
    let current = Flat::lock_for_update(flat_id, &mut *conn)
        .await
        .inspect_err(|e| {
            error!(flat_id = %flat_id, error = %e, "Failed to lock flat");
        })?
        .ok_or(FlatError::NotFound(flat_id))?;

    let written = match FlatMachine::decide(&current, actor, desired)? {
        FlatCommand::StartModeration { moderator_id } => {
            Flat::start_moderation(flat_id, moderator_id, conn).await
        }
        FlatCommand::Resolve { status } => Flat::set_status(flat_id, status, conn).await,
    };

    written.inspect_err(|e| {
        error!(flat_id = %flat_id, desired = %desired, error = %e, "Failed to write flat status");
    })?;

    Ok(current.status)
}
