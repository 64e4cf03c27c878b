//! Transaction model
//!
//! A single ledger record parsed from a free-text message. Records are
//! immutable once created and identified only by their position in the
//! ledger sequence; there is no row id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rupiah::Rupiah;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Income,
    Expense,
}

impl TxnKind {
    /// Parse a stored kind label, case-insensitively.
    ///
    /// Accepts the Indonesian labels older sheet exports used alongside the
    /// current ones.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "income" | "pemasukan" => Some(Self::Income),
            "expense" | "pengeluaran" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Render a date's year-month as `YYYY-MM`
pub fn month_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The date the transaction was recorded (stamped, never user-supplied)
    pub date: NaiveDate,

    /// The date's year-month, stored redundantly for O(1) month filters
    pub month: String,

    /// Free-text label, non-empty, capitalized
    pub description: String,

    /// Strictly positive amount
    pub amount: Rupiah,

    /// Income or expense
    pub kind: TxnKind,
}

impl Transaction {
    /// Create a new transaction stamped with the supplied date
    pub fn new(
        description: impl Into<String>,
        amount: Rupiah,
        kind: TxnKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            date,
            month: month_of(date),
            description: description.into(),
            amount,
            kind,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TxnKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TxnKind::Expense
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        // The month column must always agree with the date it was derived from
        if self.month != month_of(self.date) {
            return Err(TransactionValidationError::MonthMismatch {
                month: self.month.clone(),
                date: self.date,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Rupiah),
    EmptyDescription,
    MonthMismatch { month: String, date: NaiveDate },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Transaction description is empty"),
            Self::MonthMismatch { month, date } => {
                write!(f, "Month column {} does not match date {}", month, date)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new("Kopi", Rupiah::new(5000), TxnKind::Expense, test_date());

        assert_eq!(txn.date, test_date());
        assert_eq!(txn.month, "2025-03");
        assert_eq!(txn.description, "Kopi");
        assert_eq!(txn.amount, Rupiah::new(5000));
        assert!(txn.is_expense());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_month_derivation() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let txn = Transaction::new("Gaji", Rupiah::new(5_000_000), TxnKind::Income, date);
        assert_eq!(txn.month, "2024-12");
        assert_eq!(txn.month, format!("{}", date.format("%Y-%m-%d"))[..7]);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TxnKind::parse("income"), Some(TxnKind::Income));
        assert_eq!(TxnKind::parse("Expense"), Some(TxnKind::Expense));
        assert_eq!(TxnKind::parse(" Pemasukan "), Some(TxnKind::Income));
        assert_eq!(TxnKind::parse("pengeluaran"), Some(TxnKind::Expense));
        assert_eq!(TxnKind::parse("transfer"), None);
        assert_eq!(TxnKind::parse(""), None);
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let txn = Transaction::new("Kopi", Rupiah::zero(), TxnKind::Expense, test_date());
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let txn = Transaction::new("   ", Rupiah::new(5000), TxnKind::Expense, test_date());
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_validate_rejects_month_mismatch() {
        let mut txn = Transaction::new("Kopi", Rupiah::new(5000), TxnKind::Expense, test_date());
        txn.month = "2025-04".to_string();
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::MonthMismatch { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new("Kopi", Rupiah::new(5000), TxnKind::Expense, test_date());
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"2025-03-14\""));
        assert!(json.contains("\"expense\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new("Makan siang", Rupiah::new(25000), TxnKind::Expense, test_date());
        assert_eq!(format!("{}", txn), "2025-03-14 Makan siang Rp25.000");
    }
}
