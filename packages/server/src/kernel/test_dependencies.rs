// TestDependencies - mock implementations for testing

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use super::BaseNotifier;
use crate::common::HouseId;

// =============================================================================
// Mock Notifier
// =============================================================================

#[derive(Clone, Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<(HouseId, String)>>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails (after recording the attempt).
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    fn sent_guard(&self) -> MutexGuard<'_, Vec<(HouseId, String)>> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All (house, email) pairs a delivery was attempted for.
    pub fn sent_notifications(&self) -> Vec<(HouseId, String)> {
        self.sent_guard().clone()
    }

    pub fn was_sent_to(&self, email: &str) -> bool {
        self.sent_guard().iter().any(|(_, e)| e == email)
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn notify_subscriber(&self, house_id: HouseId, email: &str) -> Result<()> {
        self.sent_guard().push((house_id, email.to_string()));
        if self.fail {
            anyhow::bail!("mock notifier configured to fail");
        }
        Ok(())
    }
}
