//! kasku - free-text expense ledger
//!
//! Records transactions from short messages like "kopi 5k" or "gaji 5jt"
//! and answers spending questions over the recorded ledger.
//!
//! # Architecture
//!
//! - `parser` - free text to typed transaction (amount, kind, description)
//! - `models` - `Rupiah`, `Transaction`, and their invariants
//! - `ledger` - the `LedgerStore` trait, ledger operations, and undo
//! - `storage` - JSON-file store with atomic writes
//! - `reports` - pure aggregations over a row snapshot
//! - `config` - paths and user settings
//! - `cli` - command handlers and the interactive session
//!
//! The ledger is owned by an external store behind `LedgerStore`; the core
//! re-reads it for every query and never caches rows across calls.

pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod parser;
pub mod reports;
pub mod storage;

pub use error::{KaskuError, KaskuResult};
