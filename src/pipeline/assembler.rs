//! Report assembly — turns a message body into a `CitizenReport`.
//!
//! Pure computation: nothing is stored or sent here. The caller validates the
//! body first and persists/notifies afterwards.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::pipeline::address::AddressExtractor;
use crate::pipeline::classifier::IssueClassifier;
use crate::pipeline::types::{CitizenReport, ParsedMessage, ReportStatus, UNKNOWN};

/// Source of report identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the current time as an ISO-8601 string.
pub trait Clock: Send + Sync {
    fn now_iso(&self) -> String;
}

/// Wall clock in UTC, millisecond precision, `Z` suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Builds reports from message bodies.
#[derive(Clone)]
pub struct ReportAssembler {
    extractor: AddressExtractor,
    classifier: IssueClassifier,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ReportAssembler {
    pub fn new(
        extractor: AddressExtractor,
        classifier: IssueClassifier,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            extractor,
            classifier,
            ids,
            clock,
        }
    }

    /// Default rules, UUID ids and the system clock.
    pub fn with_defaults() -> Self {
        Self::new(
            AddressExtractor::default_rules(),
            IssueClassifier::default_table(),
            Arc::new(UuidGenerator),
            Arc::new(SystemClock),
        )
    }

    /// Extract the address and carry the body through as the description.
    pub fn parse(&self, body: &str) -> ParsedMessage {
        ParsedMessage {
            address: self.extractor.extract(body),
            description: body.to_string(),
        }
    }

    /// Assemble a new report.
    ///
    /// Callers must reject empty bodies before calling this.
    pub fn assemble(&self, phone_number: &str, body: &str) -> CitizenReport {
        let id = self.ids.generate();
        let now = self.clock.now_iso();
        let parsed = self.parse(body);
        let issue_type = self.classifier.classify(body);

        CitizenReport {
            id,
            created_at: now.clone(),
            updated_at: now,
            phone_number: phone_number.to_string(),
            citizen_name: UNKNOWN.to_string(),
            issue_address: parsed.address,
            issue_type,
            description: parsed.description,
            photo_urls: Vec::new(),
            status: ReportStatus::New,
            raw_message: body.to_string(),
        }
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::with_defaults()
    }
}
