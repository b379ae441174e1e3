//! Kernel module - server infrastructure and dependencies.

pub mod db;
pub mod deps;
pub mod notifier;
pub mod test_dependencies;
pub mod traits;

pub use db::{begin_bounded, rollback, TxTimeouts};
pub use deps::ServerDeps;
pub use notifier::{spawn_notification, LogNotifier, WebhookNotifier};
pub use test_dependencies::MockNotifier;
pub use traits::BaseNotifier;
