//! Single-slot undo buffer
//!
//! Holds at most the one most recently deleted transaction. A new delete
//! overwrites the slot and a successful undo clears it, so undo never
//! reaches further back than one step. The buffer lives in process memory
//! only; it does not survive a restart.

use crate::models::Transaction;

/// The most recently deleted transaction, if any.
#[derive(Debug, Default)]
pub struct UndoBuffer {
    slot: Option<Transaction>,
}

impl UndoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a deleted transaction, replacing whatever was held before.
    pub fn remember(&mut self, txn: Transaction) {
        self.slot = Some(txn);
    }

    /// Take the held transaction out, leaving the buffer empty.
    pub fn take(&mut self) -> Option<Transaction> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&Transaction> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
