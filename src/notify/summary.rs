//! Notification summary built from a stored report.

use serde::{Deserialize, Serialize};

use crate::pipeline::types::{CitizenReport, IssueType};

/// Description length kept in notifications, in characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Leading and trailing digits left visible in a masked phone number.
const PHONE_VISIBLE_HEAD: usize = 3;
const PHONE_VISIBLE_TAIL: usize = 4;

/// What staff get told about a new report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub report_id: String,
    pub issue_type: IssueType,
    pub address: String,
    /// Truncated description.
    pub description: String,
    /// Phone number with its middle digits hidden.
    pub masked_phone: String,
}

impl NotificationSummary {
    pub fn from_report(report: &CitizenReport) -> Self {
        Self {
            report_id: report.id.clone(),
            issue_type: report.issue_type,
            address: report.issue_address.clone(),
            description: truncate_description(&report.description),
            masked_phone: mask_phone(&report.phone_number),
        }
    }

    /// One-line subject for channels that have one.
    pub fn subject(&self) -> String {
        format!("New citizen report: {}", self.issue_type.label())
    }

    /// Plain-text notification body.
    pub fn message(&self) -> String {
        format!(
            "{}\nLocation: {}\nDescription: {}\nFrom: {}\nReport ID: {}",
            self.subject(),
            self.address,
            self.description,
            self.masked_phone,
            self.report_id,
        )
    }
}

/// Cut a description to [`DESCRIPTION_PREVIEW_CHARS`] characters, adding
/// `...` when anything was dropped.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return description.to_string();
    }
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Replace the middle digits of a phone number with `*`.
///
/// The first three and last four digits stay visible and non-digit
/// formatting is kept. A number with no digit left to hide once head and
/// tail are shown is masked entirely.
pub fn mask_phone(phone: &str) -> String {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits <= PHONE_VISIBLE_HEAD + PHONE_VISIBLE_TAIL {
        return "****".to_string();
    }

    let hide_until = digits - PHONE_VISIBLE_TAIL;
    let mut seen = 0;
    phone
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > PHONE_VISIBLE_HEAD && seen <= hide_until {
                '*'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::ReportStatus;

    fn report(phone: &str, description: &str) -> CitizenReport {
        CitizenReport {
            id: "r-42".into(),
            created_at: "2026-01-01T00:00:00.000Z".into(),
            updated_at: "2026-01-01T00:00:00.000Z".into(),
            phone_number: phone.into(),
            citizen_name: "Unknown".into(),
            issue_address: "45 Oak Ave".into(),
            issue_type: IssueType::WaterBreak,
            description: description.into(),
            photo_urls: vec![],
            status: ReportStatus::New,
            raw_message: description.into(),
        }
    }

    #[test]
    fn masks_e164_number() {
        assert_eq!(mask_phone("+15551234567"), "+155****4567");
    }

    #[test]
    fn masks_formatted_number() {
        assert_eq!(mask_phone("(555) 123-4567"), "(555) ***-4567");
    }

    #[test]
    fn masks_short_number_entirely() {
        assert_eq!(mask_phone("12345"), "****");
        assert_eq!(mask_phone(""), "****");
    }

    #[test]
    fn seven_digits_masked_entirely() {
        assert_eq!(mask_phone("5551234"), "****");
        assert_eq!(mask_phone("555-1234"), "****");
    }

    #[test]
    fn eight_digits_hide_one() {
        assert_eq!(mask_phone("55512345"), "555*2345");
    }

    #[test]
    fn short_description_untouched() {
        assert_eq!(truncate_description("leak"), "leak");
        let exact = "x".repeat(DESCRIPTION_PREVIEW_CHARS);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn long_description_truncated_on_char_boundary() {
        let long = "é".repeat(150);
        let preview = truncate_description(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
    }

    #[test]
    fn summary_from_report() {
        let summary = NotificationSummary::from_report(&report("+15551234567", "water leak"));
        assert_eq!(summary.report_id, "r-42");
        assert_eq!(summary.issue_type, IssueType::WaterBreak);
        assert_eq!(summary.address, "45 Oak Ave");
        assert_eq!(summary.masked_phone, "+155****4567");

        let text = summary.message();
        assert!(text.starts_with("New citizen report: Water main break"));
        assert!(text.contains("Location: 45 Oak Ave"));
        assert!(text.contains("From: +155****4567"));
        assert!(!text.contains("+15551234567"));
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = NotificationSummary::from_report(&report("+15551234567", "water leak"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["reportId"], "r-42");
        assert_eq!(json["issueType"], "water_break");
        assert_eq!(json["maskedPhone"], "+155****4567");
    }
}
