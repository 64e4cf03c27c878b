//! Description extractor
//!
//! Strips the amount token from a raw message and canonicalizes what is
//! left into a display label.

use regex::Regex;
use std::sync::OnceLock;

/// The same unit patterns the amount parser tries, in the same priority
/// order, with the suffix folded into the match. The extractor must remove
/// exactly the run the amount parser used, so a suffixed run outranks an
/// earlier bare digit run.
fn patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?i)\d+\s*(k|rb|ribu)").expect("static pattern"),
            Regex::new(r"(?i)\d+\s*(jt|juta)").expect("static pattern"),
            Regex::new(r"\d+").expect("static pattern"),
        ]
    })
}

/// Derive the transaction label from a raw message.
///
/// Removes the first run of the highest-priority pattern that matches,
/// which is the run the amount parser resolved; every other digit run in
/// the message belongs to the label. Trims and capitalizes (first letter
/// upper, remainder lower). May return an empty string; the transaction
/// builder rejects that case.
pub fn extract_description(text: &str) -> String {
    for pattern in patterns() {
        if pattern.is_match(text) {
            let stripped = pattern.replace(text, "");
            return capitalize(stripped.trim());
        }
    }
    capitalize(text.trim())
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
