//! Amount parser
//!
//! Extracts a monetary amount from free text, resolving the local shorthand
//! unit suffixes: "5k" / "5rb" / "5ribu" are thousands, "5jt" / "5juta" are
//! millions, bare digits pass through unchanged.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Rupiah;

/// Unit patterns in priority order. A unit suffix pins the multiplier, so a
/// message with several numbers uses the first digit run of the
/// highest-priority pattern that matches anywhere in the text.
fn patterns() -> &'static [(Regex, i64); 3] {
    static PATTERNS: OnceLock<[(Regex, i64); 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (Regex::new(r"(\d+)\s*(k|rb|ribu)").expect("static pattern"), 1_000),
            (Regex::new(r"(\d+)\s*(jt|juta)").expect("static pattern"), 1_000_000),
            (Regex::new(r"(\d+)").expect("static pattern"), 1),
        ]
    })
}

/// Parse an amount out of a free-text message.
///
/// The text is lowercased and stripped of `.` and `,` first; the source
/// locale uses both as thousand-separators, never as decimal points.
/// Returns `None` when no digit run exists, or when the winning digit run
/// is zero or overflows i64.
pub fn parse_amount(text: &str) -> Option<Rupiah> {
    let text = text.to_lowercase().replace(['.', ','], "");

    for (pattern, multiplier) in patterns() {
        if let Some(caps) = pattern.captures(&text) {
            let digits: i64 = caps[1].parse().ok()?;
            return digits
                .checked_mul(*multiplier)
                .filter(|v| *v > 0)
                .map(Rupiah::new);
        }
    }

    None
}
