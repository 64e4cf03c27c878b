//! Income/expense classifier
//!
//! A keyword-substring heuristic over the lowercased message. The keyword
//! list is configuration data (see `Settings::income_keywords`), so it can
//! be swapped without touching the algorithm.

use crate::models::TxnKind;

/// Classify a message as income or expense. Pure and total; never fails.
///
/// Any configured keyword occurring as a substring marks the message as
/// income. Substring matching means "feeling" matches "fee"; that false
/// positive is accepted rather than second-guessed with stricter rules.
pub fn classify(text: &str, income_keywords: &[String]) -> TxnKind {
    let text = text.to_lowercase();
    if income_keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
    {
        TxnKind::Income
    } else {
        TxnKind::Expense
    }
}
