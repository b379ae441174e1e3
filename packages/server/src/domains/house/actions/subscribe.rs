//! Subscribe to house updates

use tracing::{error, info};

use crate::common::HouseId;
use crate::domains::house::errors::HouseError;
use crate::domains::house::models::Subscription;
use crate::kernel::{spawn_notification, ServerDeps};

/// Record a subscription, then notify the subscriber in the background.
///
/// The house id is not checked. Notification failures are logged and never
/// reach the caller.
pub async fn add_subscription(
    house_id: HouseId,
    email: String,
    deps: &ServerDeps,
) -> Result<Subscription, HouseError> {
    let subscription = Subscription::insert(house_id, &email, &deps.db_pool)
        .await
        .inspect_err(|e| {
            error!(house_id = %house_id, error = %e, "Failed to save subscription");
        })?;

    info!(house_id = %house_id, subscription_id = %subscription.id, "Subscription saved");

    spawn_notification(deps.notifier.clone(), house_id, email);

    Ok(subscription)
}
