//! Keyword-table issue classification.
//!
//! Categories are checked in table order and the first category with any
//! keyword found in the normalized message wins. Matching is plain substring
//! search, so "lighthouse" counts as a hit for the streetlight keyword
//! "light". `Other` has no keywords and is returned when nothing matches.

use std::sync::LazyLock;

use tracing::debug;

use crate::pipeline::normalize::normalize;
use crate::pipeline::types::IssueType;

static DEFAULT_TABLE: LazyLock<Vec<CategoryKeywords>> = LazyLock::new(|| {
    let table: [(IssueType, &[&str]); 8] = [
        (IssueType::Pothole, &["pothole", "hole", "crack", "road damage"]),
        (
            IssueType::WaterBreak,
            &["water", "leak", "pipe", "flood", "main break"],
        ),
        (
            IssueType::Streetlight,
            &["streetlight", "light", "lamp", "dark"],
        ),
        (
            IssueType::Graffiti,
            &["graffiti", "spray paint", "vandal", "tag"],
        ),
        (
            IssueType::Trash,
            &["trash", "garbage", "litter", "dump", "waste"],
        ),
        (
            IssueType::Sidewalk,
            &["sidewalk", "curb", "walkway", "pavement"],
        ),
        (IssueType::Sign, &["sign", "stop sign", "traffic sign"]),
        (IssueType::Other, &[]),
    ];
    table
        .into_iter()
        .map(|(category, keywords)| CategoryKeywords {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
});

/// One row of the keyword table.
#[derive(Debug, Clone)]
pub struct CategoryKeywords {
    pub category: IssueType,
    /// Lower-case keywords; any one of them is enough to match.
    pub keywords: Vec<String>,
}

impl CategoryKeywords {
    fn first_hit(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| normalized.contains(k))
    }
}

/// Ordered category → keywords table.
#[derive(Debug, Clone)]
pub struct IssueClassifier {
    table: Vec<CategoryKeywords>,
}

impl IssueClassifier {
    /// Classifier with the built-in municipal keyword table.
    pub fn default_table() -> Self {
        Self {
            table: DEFAULT_TABLE.clone(),
        }
    }

    /// Build a classifier from an explicit ordered table.
    ///
    /// Keywords are lower-cased so they line up with normalized text.
    /// Empty keywords are dropped, they would match every message.
    pub fn from_table<I, K>(rows: I) -> Self
    where
        I: IntoIterator<Item = (IssueType, Vec<K>)>,
        K: AsRef<str>,
    {
        let table = rows
            .into_iter()
            .map(|(category, keywords)| CategoryKeywords {
                category,
                keywords: keywords
                    .iter()
                    .map(|k| normalize(k.as_ref()))
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();
        Self { table }
    }

    /// Categories in evaluation order.
    pub fn categories(&self) -> Vec<IssueType> {
        self.table.iter().map(|row| row.category).collect()
    }

    /// Classify a raw message.
    pub fn classify(&self, raw: &str) -> IssueType {
        let normalized = normalize(raw);
        for row in &self.table {
            if let Some(keyword) = row.first_hit(&normalized) {
                debug!(
                    category = %row.category,
                    keyword = %keyword,
                    "Issue keyword matched"
                );
                return row.category;
            }
        }
        IssueType::Other
    }
}

impl Default for IssueClassifier {
    fn default() -> Self {
        Self::default_table()
    }
}
