//! Street address extraction by ordered pattern rules.
//!
//! Rules are tried in order and the first rule that matches wins:
//! 1. a locational preposition (`at`, `on`, `near`) followed by an address
//! 2. an address-shaped fragment anywhere in the text
//!
//! If nothing matches, the address is [`UNKNOWN`]. No geocoding happens here,
//! a fictitious but well-formed address is accepted as-is.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::pipeline::types::UNKNOWN;

/// A plain house number needs at least one street-name word before the
/// road-type suffix; an ordinal number (`2nd`) is itself the street name and
/// may be followed by the suffix directly. At most eight name words.
const ADDRESS_FRAGMENT: &str = r"(?:\d+(?:st|nd|rd|th)\b(?:\s+[\w'.-]+){0,8}?|\d+\b(?:\s+[\w'.-]+){1,8}?)\s+(?:street|st|avenue|ave|road|rd|boulevard|blvd|drive|dr|lane|ln|way|court|ct)\b";

static DEFAULT_RULES: LazyLock<Vec<AddressRule>> = LazyLock::new(|| {
    vec![
        AddressRule {
            name: "preposition".into(),
            regex: Regex::new(&format!(r"(?i)\b(?:at|on|near)\s+({ADDRESS_FRAGMENT})"))
                .expect("preposition address pattern is valid"),
        },
        AddressRule {
            name: "bare".into(),
            regex: Regex::new(&format!(r"(?i)\b({ADDRESS_FRAGMENT})"))
                .expect("bare address pattern is valid"),
        },
    ]
});

/// A single extraction rule.
///
/// The address is taken from the first capture group, or from the whole
/// match when the pattern has no groups.
#[derive(Debug, Clone)]
pub struct AddressRule {
    /// Short name used in logs.
    pub name: String,
    /// Compiled pattern.
    pub regex: Regex,
}

impl AddressRule {
    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.regex.captures(text)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        let trimmed = m.as_str().trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Ordered list of address rules.
#[derive(Debug, Clone)]
pub struct AddressExtractor {
    rules: Vec<AddressRule>,
}

impl AddressExtractor {
    /// Extractor with the built-in preposition and bare rules.
    pub fn default_rules() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }

    /// Extractor with no rules; every message yields [`UNKNOWN`].
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. It is tried after all existing rules.
    pub fn add_rule(&mut self, name: &str, pattern: &str) -> Result<(), regex::Error> {
        self.rules.push(AddressRule {
            name: name.into(),
            regex: Regex::new(pattern)?,
        });
        Ok(())
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// First address fragment found by the first matching rule, if any.
    pub fn find(&self, raw: &str) -> Option<String> {
        for rule in &self.rules {
            if let Some(address) = rule.capture(raw) {
                debug!(rule = %rule.name, address = %address, "Address rule matched");
                return Some(address.to_string());
            }
        }
        None
    }

    /// Extract an address, falling back to [`UNKNOWN`].
    pub fn extract(&self, raw: &str) -> String {
        self.find(raw).unwrap_or_else(|| UNKNOWN.to_string())
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> String {
        AddressExtractor::default_rules().extract(text)
    }

    #[test]
    fn preposition_at() {
        assert_eq!(
            extract("There's a huge pothole at 123 Main Street"),
            "123 Main Street"
        );
    }

    #[test]
    fn preposition_near_abbreviated_suffix() {
        assert_eq!(extract("water leak near 45 Oak Ave"), "45 Oak Ave");
    }

    #[test]
    fn ordinal_street_name() {
        assert_eq!(extract("the streetlight on 2nd Ave is out"), "2nd Ave");
    }

    #[test]
    fn bare_address_without_preposition() {
        assert_eq!(
            extract("Graffiti all over 700 Pine Boulevard again"),
            "700 Pine Boulevard"
        );
    }

    #[test]
    fn preposition_rule_preferred_over_earlier_bare_match() {
        // The bare rule alone would pick the first address in the text.
        let text = "I live at home, 9 Cedar Lane, but the hole is near 88 Birch Road";
        assert_eq!(extract(text), "88 Birch Road");

        let mut bare_only = AddressExtractor::empty();
        bare_only
            .add_rule("bare", &format!(r"(?i)\b({ADDRESS_FRAGMENT})"))
            .unwrap();
        assert_eq!(bare_only.extract(text), "9 Cedar Lane");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(extract("LEAK AT 12 ELM DR"), "12 ELM DR");
    }

    #[test]
    fn multi_word_street_name() {
        assert_eq!(
            extract("sign down on 1500 Martin Luther King Blvd"),
            "1500 Martin Luther King Blvd"
        );
    }

    #[test]
    fn first_match_only() {
        assert_eq!(
            extract("potholes at 1 First Court and at 2 Second Way"),
            "1 First Court"
        );
    }

    #[test]
    fn suffix_must_end_on_word_boundary() {
        // "Stanley" must not be read as "St" + "anley".
        assert_eq!(extract("trash at 12 Stanley"), UNKNOWN);
    }

    #[test]
    fn plain_number_needs_a_street_name() {
        assert_eq!(extract("the 4 way stop sign is down"), UNKNOWN);
        assert_eq!(extract("meet me at 5 way"), UNKNOWN);
        assert_eq!(extract("trash dumped near 3 ct"), UNKNOWN);
        assert_eq!(
            extract("traffic on 2 way street is bad"),
            "2 way street"
        );
    }

    #[test]
    fn ordinal_number_may_stand_alone() {
        assert_eq!(extract("dark corner of 5th St tonight"), "5th St");
        assert_eq!(extract("lamp out at 21st Ave"), "21st Ave");
    }

    #[test]
    fn long_street_names_are_kept() {
        assert_eq!(
            extract("pothole at 123 North Old Mill Creek Valley Farm Road"),
            "123 North Old Mill Creek Valley Farm Road"
        );
        assert_eq!(
            extract("leak near 9 Saint John of the Cross Mission Hill Way"),
            "9 Saint John of the Cross Mission Hill Way"
        );
    }

    #[test]
    fn street_name_word_count_is_bounded() {
        let text = "at 5 a b c d e f g h i Road";
        assert_eq!(extract(text), UNKNOWN);
    }

    #[test]
    fn no_number_means_unknown() {
        assert_eq!(extract("someone spray painted the wall"), UNKNOWN);
        assert_eq!(extract("Main Street is flooded"), UNKNOWN);
    }

    #[test]
    fn empty_and_short_inputs() {
        assert_eq!(extract(""), UNKNOWN);
        assert_eq!(extract("hello"), UNKNOWN);
        assert_eq!(extract("42"), UNKNOWN);
    }

    #[test]
    fn result_is_trimmed_and_non_empty() {
        let inputs = [
            "",
            "   ",
            "at 5 Elm St   ",
            "\t\n10 Oak Rd\n",
            "nothing here",
            "near   77   River   Road",
        ];
        let extractor = AddressExtractor::default_rules();
        for input in inputs {
            let address = extractor.extract(input);
            assert!(!address.is_empty(), "empty address for {input:?}");
            assert_eq!(address, address.trim(), "untrimmed address for {input:?}");
        }
    }

    #[test]
    fn custom_rule_runs_after_defaults() {
        let mut extractor = AddressExtractor::default_rules();
        extractor
            .add_rule("intersection", r"(?i)corner of ([a-z]+ and [a-z]+)")
            .unwrap();
        assert_eq!(
            extractor.rule_names(),
            vec!["preposition", "bare", "intersection"]
        );
        assert_eq!(
            extractor.extract("dark at the corner of Elm and Oak"),
            "Elm and Oak"
        );
        assert_eq!(extractor.extract("leak at 3 Elm St"), "3 Elm St");
    }

    #[test]
    fn custom_rule_without_group_uses_whole_match() {
        let mut extractor = AddressExtractor::empty();
        extractor.add_rule("po-box", r"(?i)po box \d+").unwrap();
        assert_eq!(extractor.extract("send to PO Box 12 please"), "PO Box 12");
    }

    #[test]
    fn invalid_custom_pattern_is_rejected() {
        let mut extractor = AddressExtractor::empty();
        assert!(extractor.add_rule("broken", r"(unclosed").is_err());
        assert!(extractor.rule_names().is_empty());
    }

    #[test]
    fn empty_extractor_always_unknown() {
        let extractor = AddressExtractor::empty();
        assert_eq!(extractor.extract("pothole at 123 Main Street"), UNKNOWN);
        assert!(extractor.find("pothole at 123 Main Street").is_none());
    }
}
