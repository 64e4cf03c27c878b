//! Command handlers
//!
//! Thin glue between the clap surface and the core: each handler reads a
//! snapshot or calls one ledger operation, then prints. Handlers are
//! generic over the store so they run against any `LedgerStore`.

pub mod session;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{KaskuError, KaskuResult};
use crate::ledger::{delete_last_and_remember, record, undo_last_delete, LedgerStore, UndoBuffer};
use crate::models::month_of;
use crate::reports::{BalanceReport, CategoryReport, DailyReport, MonthlyReport};

/// Today per the local wall clock. The core never reads the clock itself;
/// the date is resolved here at the edge and passed down.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn handle_add<S: LedgerStore>(
    store: &mut S,
    text: &str,
    settings: &Settings,
) -> KaskuResult<()> {
    let txn = record(store, text, local_today(), settings)?;
    println!("Recorded: {} {} ({})", txn.description, txn.amount, txn.kind);
    Ok(())
}

pub fn handle_today<S: LedgerStore>(store: &S) -> KaskuResult<()> {
    let rows = store.read_all()?;
    let report = DailyReport::from_rows(&rows, local_today());
    print!("{}", report.format_terminal());
    Ok(())
}

pub fn handle_month<S: LedgerStore>(store: &S) -> KaskuResult<()> {
    let rows = store.read_all()?;
    let report = MonthlyReport::from_rows(&rows, &month_of(local_today()));
    print!("{}", report.format_terminal());
    Ok(())
}

pub fn handle_balance<S: LedgerStore>(store: &S) -> KaskuResult<()> {
    let rows = store.read_all()?;
    let report = BalanceReport::from_rows(&rows);
    print!("{}", report.format_terminal());
    Ok(())
}

pub fn handle_categories<S: LedgerStore>(store: &S, settings: &Settings) -> KaskuResult<()> {
    let rows = store.read_all()?;
    let report = CategoryReport::from_rows(
        &rows,
        &month_of(local_today()),
        settings.category_limit,
    );
    print!("{}", report.format_terminal());
    Ok(())
}

pub fn handle_delete<S: LedgerStore>(store: &mut S, undo: &mut UndoBuffer) -> KaskuResult<()> {
    let txn = delete_last_and_remember(store, undo)?;
    println!("Deleted: {}", txn);
    Ok(())
}

pub fn handle_undo<S: LedgerStore>(store: &mut S, undo: &mut UndoBuffer) -> KaskuResult<()> {
    let txn = undo_last_delete(store, undo)?;
    println!("Restored: {}", txn);
    Ok(())
}

/// User-facing message for an error. Recoverable errors get a hint instead
/// of a bare error string.
pub fn friendly(err: &KaskuError) -> String {
    match err {
        KaskuError::AmountNotFound(_) => {
            "Could not find an amount in that message.\nExamples:\n  kopi 5k\n  makan 25rb\n  gaji 5jt"
                .to_string()
        }
        KaskuError::EmptyDescription(_) => {
            "The message is only an amount. Add a word or two describing it, like \"kopi 5k\"."
                .to_string()
        }
        KaskuError::NothingToUndo => "Nothing to undo.".to_string(),
        KaskuError::EmptyLedger => "The ledger is empty; nothing to delete.".to_string(),
        other => format!("Error: {}", other),
    }
}
