//! Core data models for kasku

pub mod rupiah;
pub mod transaction;

pub use rupiah::Rupiah;
pub use transaction::{month_of, Transaction, TransactionValidationError, TxnKind};
