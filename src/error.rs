//! Custom error types for kasku
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for kasku operations
#[derive(Error, Debug)]
pub enum KaskuError {
    /// No parseable amount in a free-text message
    #[error("No amount found in \"{0}\"")]
    AmountNotFound(String),

    /// An amount was found but nothing is left to describe the transaction
    #[error("No description left in \"{0}\"")]
    EmptyDescription(String),

    /// Undo requested while the undo buffer is empty
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Delete requested on an empty ledger
    #[error("The ledger is empty, nothing to delete")]
    EmptyLedger,

    /// The external ledger store failed
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl KaskuError {
    /// Check whether this failure is user-facing and recoverable.
    ///
    /// Parse-stage failures and empty-state conditions prompt the user to
    /// retry; they never abort the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::AmountNotFound(_)
                | Self::EmptyDescription(_)
                | Self::NothingToUndo
                | Self::EmptyLedger
        )
    }

    /// Check if this is a store failure that should reach the operator
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KaskuError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KaskuError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for kasku operations
pub type KaskuResult<T> = Result<T, KaskuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KaskuError::AmountNotFound("halo dunia".into());
        assert_eq!(err.to_string(), "No amount found in \"halo dunia\"");

        let err = KaskuError::NothingToUndo;
        assert_eq!(err.to_string(), "Nothing to undo");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(KaskuError::AmountNotFound("x".into()).is_recoverable());
        assert!(KaskuError::EmptyDescription("5k".into()).is_recoverable());
        assert!(KaskuError::NothingToUndo.is_recoverable());
        assert!(KaskuError::EmptyLedger.is_recoverable());
        assert!(!KaskuError::Store("offline".into()).is_recoverable());
        assert!(!KaskuError::Io("disk".into()).is_recoverable());
    }

    #[test]
    fn test_store_classification() {
        assert!(KaskuError::Store("offline".into()).is_store());
        assert!(!KaskuError::NothingToUndo.is_store());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KaskuError = io_err.into();
        assert!(matches!(err, KaskuError::Io(_)));
    }
}
