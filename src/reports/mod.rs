//! Aggregation reports
//!
//! Every report is a pure function over one row snapshot: the caller does
//! `store.read_all()` once and passes the slice in, so a report never sees
//! the ledger change under it. Rows that fail coercion are skipped, never
//! surfaced as errors; a summary over a partly hand-edited ledger is still
//! a summary.

pub mod balance;
pub mod categories;
pub mod daily;
pub mod monthly;

pub use balance::{running_balance, BalanceReport};
pub use categories::{CategoryReport, CategoryTotal, OTHER_LABEL};
pub use daily::DailyReport;
pub use monthly::MonthlyReport;

use crate::ledger::RawRow;
use crate::models::Transaction;

/// The rows that survive coercion, in ledger order.
pub(crate) fn coerced(rows: &[RawRow]) -> impl Iterator<Item = Transaction> + '_ {
    rows.iter().filter_map(RawRow::coerce)
}
