//! Ledger operations
//!
//! The write-side operations, composed from the parser, the store trait,
//! and the undo buffer. Store and buffer are explicit arguments so the
//! single-writer assumption is visible at every call site: a concurrent
//! transport must serialize calls through one mutex around the pair.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{KaskuError, KaskuResult};
use crate::ledger::{LedgerStore, UndoBuffer};
use crate::models::Transaction;
use crate::parser::parse_message;

/// Parse a free-text message and append the result to the ledger.
///
/// Parsing happens before any store call, so a message that fails to parse
/// commits nothing. Returns the appended transaction for display.
pub fn record<S: LedgerStore>(
    store: &mut S,
    text: &str,
    today: NaiveDate,
    settings: &Settings,
) -> KaskuResult<Transaction> {
    let txn = parse_message(text, today, settings)?;
    store.append(&txn)?;
    Ok(txn)
}

/// Delete the most recent row and remember it for undo.
///
/// The tail row is read and coerced first; if it cannot be decoded into a
/// transaction the delete is refused and the ledger is left untouched,
/// since an undecodable row could never be restored by undo.
pub fn delete_last_and_remember<S: LedgerStore>(
    store: &mut S,
    undo: &mut UndoBuffer,
) -> KaskuResult<Transaction> {
    let rows = store.read_all()?;
    let last = rows.last().ok_or(KaskuError::EmptyLedger)?;
    let txn = last.coerce().ok_or_else(|| {
        KaskuError::Store(format!("last row cannot be decoded: {:?}", last))
    })?;

    store.delete_last()?;
    undo.remember(txn.clone());
    Ok(txn)
}

/// Re-append the transaction held in the undo buffer.
///
/// The restored row lands at the ledger tail, which may differ from its
/// original position if other rows were appended since the delete. If the
/// append itself fails, the transaction goes back into the buffer so a
/// retry is still possible.
pub fn undo_last_delete<S: LedgerStore>(
    store: &mut S,
    undo: &mut UndoBuffer,
) -> KaskuResult<Transaction> {
    let txn = undo.take().ok_or(KaskuError::NothingToUndo)?;

    if let Err(err) = store.append(&txn) {
        undo.remember(txn);
        return Err(err);
    }

    Ok(txn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{MemoryLedger, RawRow};
    use crate::models::Rupiah;
    use serde_json::Value;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_record_appends_parsed_transaction() {
        let mut store = MemoryLedger::new();
        let txn = record(&mut store, "kopi 5k", today(), &settings()).unwrap();

        assert_eq!(txn.description, "Kopi");
        assert_eq!(txn.amount, Rupiah::new(5_000));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_record_parse_failure_commits_nothing() {
        let mut store = MemoryLedger::new();
        let err = record(&mut store, "halo dunia", today(), &settings()).unwrap_err();

        assert!(matches!(err, KaskuError::AmountNotFound(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_then_undo_restores_the_row() {
        let mut store = MemoryLedger::new();
        let mut undo = UndoBuffer::new();
        record(&mut store, "kopi 5k", today(), &settings()).unwrap();
        record(&mut store, "makan 25rb", today(), &settings()).unwrap();

        let deleted = delete_last_and_remember(&mut store, &mut undo).unwrap();
        assert_eq!(deleted.description, "Makan");
        assert_eq!(store.len(), 1);

        let restored = undo_last_delete(&mut store, &mut undo).unwrap();
        assert_eq!(restored, deleted);
        assert_eq!(store.len(), 2);
        assert!(undo.is_empty());
    }

    #[test]
    fn test_second_delete_overwrites_undo_slot() {
        let mut store = MemoryLedger::new();
        let mut undo = UndoBuffer::new();
        record(&mut store, "kopi 5k", today(), &settings()).unwrap();
        record(&mut store, "makan 25rb", today(), &settings()).unwrap();

        delete_last_and_remember(&mut store, &mut undo).unwrap();
        delete_last_and_remember(&mut store, &mut undo).unwrap();

        // Only the most recent delete is recoverable.
        let restored = undo_last_delete(&mut store, &mut undo).unwrap();
        assert_eq!(restored.description, "Kopi");
        assert!(matches!(
            undo_last_delete(&mut store, &mut undo),
            Err(KaskuError::NothingToUndo)
        ));
    }

    #[test]
    fn test_undo_with_empty_buffer_fails() {
        let mut store = MemoryLedger::new();
        let mut undo = UndoBuffer::new();

        assert!(matches!(
            undo_last_delete(&mut store, &mut undo),
            Err(KaskuError::NothingToUndo)
        ));
    }

    #[test]
    fn test_delete_on_empty_ledger_fails() {
        let mut store = MemoryLedger::new();
        let mut undo = UndoBuffer::new();

        assert!(matches!(
            delete_last_and_remember(&mut store, &mut undo),
            Err(KaskuError::EmptyLedger)
        ));
        assert!(undo.is_empty());
    }

    #[test]
    fn test_malformed_tail_row_refuses_delete() {
        let bad = RawRow {
            date: "not-a-date".to_string(),
            description: "Kopi".to_string(),
            amount: Value::from(5_000),
            kind: "expense".to_string(),
            month: String::new(),
        };
        let mut store = MemoryLedger::with_rows(vec![bad]);
        let mut undo = UndoBuffer::new();

        let err = delete_last_and_remember(&mut store, &mut undo).unwrap_err();
        assert!(matches!(err, KaskuError::Store(_)));
        assert_eq!(store.len(), 1);
        assert!(undo.is_empty());
    }

    #[test]
    fn test_failed_undo_append_keeps_the_buffer() {
        struct FailingStore;

        impl LedgerStore for FailingStore {
            fn append(&mut self, _txn: &Transaction) -> KaskuResult<()> {
                Err(KaskuError::Store("write refused".to_string()))
            }
            fn read_all(&self) -> KaskuResult<Vec<RawRow>> {
                Ok(Vec::new())
            }
            fn delete_last(&mut self) -> KaskuResult<RawRow> {
                Err(KaskuError::EmptyLedger)
            }
        }

        let mut store = FailingStore;
        let mut undo = UndoBuffer::new();
        undo.remember(Transaction::new(
            "Kopi",
            Rupiah::new(5_000),
            crate::models::TxnKind::Expense,
            today(),
        ));

        let err = undo_last_delete(&mut store, &mut undo).unwrap_err();
        assert!(matches!(err, KaskuError::Store(_)));
        assert!(!undo.is_empty());
    }
}
