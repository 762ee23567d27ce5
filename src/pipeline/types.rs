//! Shared types for the inbound SMS pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder used when a field could not be determined from the message.
pub const UNKNOWN: &str = "Unknown";

// ── Inbound message ─────────────────────────────────────────────────

/// Inbound text message from a citizen.
///
/// Owned by the delivery channel; the pipeline only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    /// Sender phone number. Opaque, not validated for format.
    pub phone_number: String,
    /// Raw message body, original casing.
    #[serde(rename = "message", default)]
    pub body: String,
}

impl InboundMessage {
    pub fn new(phone_number: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            body: body.into(),
        }
    }
}

// ── Parsed message ──────────────────────────────────────────────────

/// Fields recovered from a message body by pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Extracted address fragment, or [`UNKNOWN`].
    pub address: String,
    /// The raw body, verbatim.
    pub description: String,
}

// ── Issue type ──────────────────────────────────────────────────────

/// Municipal issue category assigned to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Pothole,
    WaterBreak,
    Streetlight,
    Graffiti,
    Trash,
    Sidewalk,
    Sign,
    Other,
}

impl IssueType {
    /// Every category, in classification priority order.
    pub const ALL: [IssueType; 8] = [
        Self::Pothole,
        Self::WaterBreak,
        Self::Streetlight,
        Self::Graffiti,
        Self::Trash,
        Self::Sidewalk,
        Self::Sign,
        Self::Other,
    ];

    /// Wire tag, as stored and sent in notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pothole => "pothole",
            Self::WaterBreak => "water_break",
            Self::Streetlight => "streetlight",
            Self::Graffiti => "graffiti",
            Self::Trash => "trash",
            Self::Sidewalk => "sidewalk",
            Self::Sign => "sign",
            Self::Other => "other",
        }
    }

    /// Human-readable label for notification text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::WaterBreak => "Water main break",
            Self::Streetlight => "Streetlight outage",
            Self::Graffiti => "Graffiti",
            Self::Trash => "Trash / illegal dumping",
            Self::Sidewalk => "Sidewalk damage",
            Self::Sign => "Damaged or missing sign",
            Self::Other => "Other issue",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Report status ───────────────────────────────────────────────────

/// Lifecycle tag of a report. Transitions happen outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

// ── Citizen report ──────────────────────────────────────────────────

/// Structured record assembled from one inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenReport {
    pub id: String,
    /// ISO-8601 creation time.
    pub created_at: String,
    /// ISO-8601 update time. Equal to `created_at` when assembled.
    pub updated_at: String,
    pub phone_number: String,
    /// Defaults to [`UNKNOWN`]; filled in by later enrichment.
    pub citizen_name: String,
    pub issue_address: String,
    pub issue_type: IssueType,
    pub description: String,
    /// Photos arrive on a separate channel and are merged by `id`.
    pub photo_urls: Vec<String>,
    pub status: ReportStatus,
    /// The original body, kept for audit.
    pub raw_message: String,
}
