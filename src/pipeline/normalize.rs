//! Text normalization for keyword matching.

/// Lower-case a message for matching.
///
/// Only ASCII letters are folded; everything else passes through unchanged.
/// The result is never stored, the original casing is kept for display.
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_lowercase()
}
