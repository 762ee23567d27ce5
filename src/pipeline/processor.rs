//! Report processor — validates, assembles, stores and announces reports.
//!
//! Flow for one inbound message:
//! 1. Reject an empty body (nothing is assembled)
//! 2. `ReportAssembler::assemble()` — pure extraction/classification
//! 3. `ReportStore::put_report()` — failure aborts the request
//! 4. `Notifier::notify()` — failure is logged, the report stands

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::PipelineError;
use crate::notify::{NotificationSummary, Notifier};
use crate::pipeline::assembler::ReportAssembler;
use crate::pipeline::types::{CitizenReport, InboundMessage};
use crate::store::ReportStore;

/// Runs inbound messages through the pipeline and its collaborators.
pub struct ReportProcessor {
    assembler: ReportAssembler,
    store: Arc<dyn ReportStore>,
    notifier: Arc<dyn Notifier>,
}

impl ReportProcessor {
    pub fn new(
        assembler: ReportAssembler,
        store: Arc<dyn ReportStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            assembler,
            store,
            notifier,
        }
    }

    pub fn store(&self) -> &Arc<dyn ReportStore> {
        &self.store
    }

    /// Reject messages the pipeline must not see: only an empty body.
    pub fn validate(message: &InboundMessage) -> Result<(), PipelineError> {
        if message.body.is_empty() {
            return Err(PipelineError::EmptyBody);
        }
        Ok(())
    }

    /// Process one inbound message into a stored report.
    pub async fn process(&self, message: &InboundMessage) -> Result<CitizenReport, PipelineError> {
        Self::validate(message)?;

        let report = self.assembler.assemble(&message.phone_number, &message.body);
        self.store.put_report(&report).await?;

        info!(
            report_id = %report.id,
            issue_type = %report.issue_type,
            address = %report.issue_address,
            "Citizen report created"
        );

        let summary = NotificationSummary::from_report(&report);
        if let Err(e) = self.notifier.notify(&summary).await {
            warn!(
                report_id = %report.id,
                notifier = %self.notifier.name(),
                error = %e,
                "Failed to send report notification"
            );
        }

        Ok(report)
    }
}
