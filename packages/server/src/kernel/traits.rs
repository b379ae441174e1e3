// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names

use anyhow::Result;
use async_trait::async_trait;

use crate::common::HouseId;

// =============================================================================
// Notifier Trait (Infrastructure - subscriber notifications)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Tell a subscriber that a house has flats worth looking at.
    async fn notify_subscriber(&self, house_id: HouseId, email: &str) -> Result<()>;
}
