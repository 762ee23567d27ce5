//! HTTP webhook recipient — POSTs the summary as JSON.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::{NotificationSummary, Notifier};
use crate::error::{ConfigError, NotifyError};

/// Build the shared HTTP client used by every webhook recipient.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

/// Request body sent to webhook recipients.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    subject: String,
    message: String,
    #[serde(flatten)]
    summary: &'a NotificationSummary,
}

/// Delivers summaries to one URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        &self.url
    }

    async fn notify(&self, summary: &NotificationSummary) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            subject: summary.subject(),
            message: summary.message(),
            summary,
        };

        let resp = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::DeliveryFailed {
                recipient: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                recipient: self.url.clone(),
                status: status.as_u16(),
            });
        }

        debug!(url = %self.url, report_id = %summary.report_id, "Webhook notification delivered");
        Ok(())
    }
}
