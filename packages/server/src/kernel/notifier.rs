use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use super::BaseNotifier;
use crate::common::HouseId;

pub fn subscription_message(house_id: HouseId) -> String {
    format!(
        "New flats are available in house {}. Check them out now!",
        house_id
    )
}

/// Delivers subscriber emails through an HTTP mail relay.
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct EmailMessage<'a> {
    to: &'a str,
    subject: &'a str,
    body: String,
}

impl WebhookNotifier {
    /// `timeout` bounds the whole relay call, so a silent relay still ends
    /// in a logged failure.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl BaseNotifier for WebhookNotifier {
    async fn notify_subscriber(&self, house_id: HouseId, email: &str) -> Result<()> {
        let message = EmailMessage {
            to: email,
            subject: "House update",
            body: subscription_message(house_id),
        };

        info!(house_id = %house_id, "Sending subscriber notification");

        let response = self.client.post(&self.endpoint).json(&message).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            error!("Notification relay failed {}: {}", status, body);
            anyhow::bail!("Notification relay error {}: {}", status, body);
        }

        Ok(())
    }
}

/// Used when no relay is configured: the notification is only logged.
pub struct LogNotifier;

#[async_trait]
impl BaseNotifier for LogNotifier {
    async fn notify_subscriber(&self, house_id: HouseId, email: &str) -> Result<()> {
        info!(house_id = %house_id, email = %email, "{}", subscription_message(house_id));
        Ok(())
    }
}

/// Fire-and-forget delivery. The outcome is visible only in the logs.
pub fn spawn_notification(notifier: Arc<dyn BaseNotifier>, house_id: HouseId, email: String) {
    tokio::spawn(async move {
        if let Err(e) = notifier.notify_subscriber(house_id, &email).await {
            warn!(house_id = %house_id, email = %email, error = %e, "Failed to notify subscriber");
        }
    });
}
