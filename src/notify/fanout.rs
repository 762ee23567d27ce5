//! Fan-out to several recipients.
//!
//! Recipients are notified concurrently. A failing recipient is logged and
//! skipped; the others still get the notification.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use super::{NotificationSummary, Notifier};
use crate::error::NotifyError;

/// Outcome of one fan-out round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanoutOutcome {
    pub delivered: usize,
    pub failed: usize,
}

/// Sends each summary to every configured recipient.
#[derive(Default)]
pub struct FanoutNotifier {
    targets: Vec<Arc<dyn Notifier>>,
}

impl FanoutNotifier {
    pub fn new(targets: Vec<Arc<dyn Notifier>>) -> Self {
        Self { targets }
    }

    pub fn add(&mut self, target: Arc<dyn Notifier>) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Notify every recipient, counting successes and failures.
    pub async fn deliver(&self, summary: &NotificationSummary) -> FanoutOutcome {
        let results = join_all(self.targets.iter().map(|t| t.notify(summary))).await;

        let mut outcome = FanoutOutcome::default();
        for (target, result) in self.targets.iter().zip(results) {
            match result {
                Ok(()) => {
                    debug!(recipient = %target.name(), report_id = %summary.report_id, "Notified");
                    outcome.delivered += 1;
                }
                Err(e) => {
                    warn!(
                        recipient = %target.name(),
                        report_id = %summary.report_id,
                        error = %e,
                        "Notification failed, skipping recipient"
                    );
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }
}

#[async_trait]
impl Notifier for FanoutNotifier {
    fn name(&self) -> &str {
        "fanout"
    }

    /// Succeeds if any recipient accepted the summary, or if there are none.
    async fn notify(&self, summary: &NotificationSummary) -> Result<(), NotifyError> {
        let outcome = self.deliver(summary).await;
        if outcome.delivered == 0 && outcome.failed > 0 {
            return Err(NotifyError::AllFailed {
                failed: outcome.failed,
            });
        }
        Ok(())
    }
}
