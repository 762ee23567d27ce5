//! Outbound notifications about new reports.
//!
//! The pipeline never notifies on its own; `ReportProcessor` builds a
//! `NotificationSummary` after the report is stored and hands it to a
//! `Notifier`.

pub mod fanout;
pub mod http;
pub mod summary;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::{self, NotifyError};

pub use fanout::FanoutNotifier;
pub use http::WebhookNotifier;
pub use summary::{NotificationSummary, mask_phone, truncate_description};

/// A notification recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Recipient name for logs.
    fn name(&self) -> &str;

    /// Deliver one summary.
    async fn notify(&self, summary: &NotificationSummary) -> Result<(), NotifyError>;
}

/// Writes notifications to the log. Used when no recipients are configured.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn notify(&self, summary: &NotificationSummary) -> Result<(), NotifyError> {
        info!(
            report_id = %summary.report_id,
            issue_type = %summary.issue_type,
            address = %summary.address,
            from = %summary.masked_phone,
            "{}",
            summary.subject()
        );
        Ok(())
    }
}

/// Build the notifier described by the service configuration.
///
/// With no webhooks configured this is a bare [`LogNotifier`]. Otherwise the
/// log and every webhook share one [`FanoutNotifier`] and one HTTP client.
pub fn from_config(config: &ServiceConfig) -> error::Result<Arc<dyn Notifier>> {
    if config.notify_webhooks.is_empty() {
        return Ok(Arc::new(LogNotifier::new()));
    }

    let client = http::build_client(config.notify_timeout)?;
    let mut fanout = FanoutNotifier::default();
    fanout.add(Arc::new(LogNotifier::new()));
    for url in &config.notify_webhooks {
        fanout.add(Arc::new(WebhookNotifier::new(client.clone(), url)));
    }
    Ok(Arc::new(fanout))
}
