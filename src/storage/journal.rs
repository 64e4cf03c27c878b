//! JSON-file ledger store
//!
//! A `LedgerStore` over a single JSON array on disk. Every operation
//! re-reads the file and every mutation rewrites it atomically, so the
//! file is the only state and concurrent readers never see a half-written
//! ledger. One writer at a time is assumed; the CLI runs one process.

use std::path::{Path, PathBuf};

use crate::error::{KaskuError, KaskuResult};
use crate::ledger::{LedgerStore, RawRow};
use crate::models::Transaction;
use crate::storage::{read_json, write_json_atomic};

#[derive(Debug)]
pub struct JsonLedger {
    path: PathBuf,
}

impl JsonLedger {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonLedger {
    fn append(&mut self, txn: &Transaction) -> KaskuResult<()> {
        let mut rows: Vec<RawRow> = read_json(&self.path)?;
        rows.push(RawRow::from(txn));
        write_json_atomic(&self.path, &rows)
    }

    fn read_all(&self) -> KaskuResult<Vec<RawRow>> {
        read_json(&self.path)
    }

    fn delete_last(&mut self) -> KaskuResult<RawRow> {
        let mut rows: Vec<RawRow> = read_json(&self.path)?;
        let row = rows.pop().ok_or(KaskuError::EmptyLedger)?;
        write_json_atomic(&self.path, &rows)?;
        Ok(row)
    }
}
