//! In-memory ledger store, used by tests.

use crate::error::{KaskuError, KaskuResult};
use crate::ledger::{LedgerStore, RawRow};
use crate::models::Transaction;

/// A `Vec`-backed store. Rows live only as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    rows: Vec<RawRow>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with pre-built rows, bypassing the append path. Lets
    /// tests plant malformed rows a real append could never produce.
    pub fn with_rows(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl LedgerStore for MemoryLedger {
    fn append(&mut self, txn: &Transaction) -> KaskuResult<()> {
        self.rows.push(RawRow::from(txn));
        Ok(())
    }

    fn read_all(&self) -> KaskuResult<Vec<RawRow>> {
        Ok(self.rows.clone())
    }

    fn delete_last(&mut self) -> KaskuResult<RawRow> {
        self.rows.pop().ok_or(KaskuError::EmptyLedger)
    }
}
