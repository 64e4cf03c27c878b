//! Ledger store abstraction
//!
//! The ledger itself lives in an external collaborator (a spreadsheet in
//! the original deployment). The core only assumes an ordered sequence of
//! rows with append, full-read, and delete-last operations, and treats
//! everything it reads back as loosely typed.

pub mod memory;
pub mod service;
pub mod undo;

pub use memory::MemoryLedger;
pub use service::{delete_last_and_remember, record, undo_last_delete};
pub use undo::UndoBuffer;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::KaskuResult;
use crate::models::{month_of, Rupiah, Transaction, TxnKind};
use crate::parser::description::capitalize;

/// An ordered sequence of transaction rows; the system of record.
///
/// Implementations must preserve append order. `delete_last` is the only
/// mutation besides `append`; nothing else in the sequence ever changes.
pub trait LedgerStore {
    /// Append a transaction at the end of the ledger
    fn append(&mut self, txn: &Transaction) -> KaskuResult<()>;

    /// Read the full ledger. Queries re-read every time; the core never
    /// caches rows across calls.
    fn read_all(&self) -> KaskuResult<Vec<RawRow>>;

    /// Remove and return the most recent row. Fails with
    /// [`KaskuError::EmptyLedger`](crate::error::KaskuError::EmptyLedger)
    /// when there is nothing to delete.
    fn delete_last(&mut self) -> KaskuResult<RawRow>;
}

/// A row as the store returns it: loosely typed, possibly written by hand
/// or by an older revision. Coercing it back into a [`Transaction`] is the
/// core's job, not the store's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub description: String,

    /// A number in well-formed rows; legacy rows may carry strings such as
    /// "12,000" or "5000.0".
    #[serde(default)]
    pub amount: Value,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub month: String,
}

impl RawRow {
    /// Defensive coercion into a typed transaction.
    ///
    /// Returns `None` for rows with an unparseable date, a non-positive or
    /// non-numeric amount, an unknown kind label, or a blank description.
    /// The month is rederived from the date, so a stale month column can
    /// never disagree with it, and the description is re-capitalized so a
    /// hand-edited "kopi" lands in the same category bucket as "Kopi".
    pub fn coerce(&self) -> Option<Transaction> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let amount = clean_amount(&self.amount)?;
        let kind = TxnKind::parse(&self.kind)?;

        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }

        Some(Transaction {
            date,
            month: month_of(date),
            description: capitalize(description),
            amount,
            kind,
        })
    }
}

impl From<&Transaction> for RawRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            amount: Value::from(txn.amount.value()),
            kind: txn.kind.to_string(),
            month: txn.month.clone(),
        }
    }
}

/// Parse a stored amount cell. Plain numbers pass through; strings lose
/// their `,` grouping and a stray decimal part truncates to whole rupiah.
fn clean_amount(value: &Value) -> Option<Rupiah> {
    let n = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => {
            let cleaned = s.replace(',', "");
            let cleaned = cleaned.trim();
            cleaned
                .parse::<i64>()
                .ok()
                .or_else(|| cleaned.parse::<f64>().ok().map(|f| f.trunc() as i64))?
        }
        _ => return None,
    };

    (n > 0).then(|| Rupiah::new(n))
}
