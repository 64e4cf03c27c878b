//! Free-text message parsing
//!
//! Turns messages like "kopi 5k" or "gaji 5jt" into ledger transactions:
//! the amount parser resolves unit suffixes, the classifier labels the
//! direction, and the description extractor derives the label. The builder
//! here composes the three into a dated record.

pub mod amount;
pub mod classify;
pub mod description;

pub use amount::parse_amount;
pub use classify::classify;
pub use description::extract_description;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{KaskuError, KaskuResult};
use crate::models::Transaction;

/// Build a transaction from a free-text message.
///
/// `today` is supplied by the caller; this function never reads the wall
/// clock and never touches the ledger. On success the returned record
/// satisfies every `Transaction` invariant and is ready to append.
pub fn parse_message(
    text: &str,
    today: NaiveDate,
    settings: &Settings,
) -> KaskuResult<Transaction> {
    let amount =
        parse_amount(text).ok_or_else(|| KaskuError::AmountNotFound(text.to_string()))?;

    let kind = classify(text, &settings.income_keywords);

    let description = extract_description(text);
    if description.is_empty() {
        return Err(KaskuError::EmptyDescription(text.to_string()));
    }

    Ok(Transaction::new(description, amount, kind, today))
}
