//! Monthly summary report

use crate::ledger::RawRow;
use crate::models::Rupiah;
use crate::reports::coerced;

/// Income, expense, and net balance for one calendar month.
#[derive(Debug, PartialEq)]
pub struct MonthlyReport {
    pub month: String,
    pub income: Rupiah,
    pub expense: Rupiah,
    pub balance: Rupiah,
}

impl MonthlyReport {
    /// Build the summary for `month` ("YYYY-MM"). Balance may be negative.
    pub fn from_rows(rows: &[RawRow], month: &str) -> Self {
        let mut income = Rupiah::zero();
        let mut expense = Rupiah::zero();

        for txn in coerced(rows).filter(|txn| txn.month == month) {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
        }

        Self {
            month: month.to_string(),
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Format report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Summary for {}\n", self.month));
        output.push_str(&format!("{}\n", "-".repeat(40)));
        output.push_str(&format!("  {:<12} {:>12}\n", "Income", self.income.to_string()));
        output.push_str(&format!("  {:<12} {:>12}\n", "Expense", self.expense.to_string()));
        output.push_str(&format!("  {:<12} {:>12}\n", "Balance", self.balance.to_string()));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TxnKind};
    use chrono::NaiveDate;

    fn row(description: &str, amount: i64, kind: TxnKind, date: &str) -> RawRow {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        RawRow::from(&Transaction::new(description, Rupiah::new(amount), kind, date))
    }

    #[test]
    fn test_sums_only_the_requested_month() {
        let rows = vec![
            row("Gaji", 5_000_000, TxnKind::Income, "2025-03-01"),
            row("Kopi", 5_000, TxnKind::Expense, "2025-03-14"),
            row("Makan", 25_000, TxnKind::Expense, "2025-04-02"),
        ];

        let report = MonthlyReport::from_rows(&rows, "2025-03");
        assert_eq!(report.income, Rupiah::new(5_000_000));
        assert_eq!(report.expense, Rupiah::new(5_000));
        assert_eq!(report.balance, Rupiah::new(4_995_000));
    }

    #[test]
    fn test_balance_can_go_negative() {
        let rows = vec![
            row("Gaji", 100_000, TxnKind::Income, "2025-03-01"),
            row("Servis motor", 350_000, TxnKind::Expense, "2025-03-02"),
        ];

        let report = MonthlyReport::from_rows(&rows, "2025-03");
        assert_eq!(report.balance, Rupiah::new(-250_000));
        assert!(report.format_terminal().contains("-Rp250.000"));
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let report = MonthlyReport::from_rows(&[], "2025-03");
        assert_eq!(report.income, Rupiah::zero());
        assert_eq!(report.expense, Rupiah::zero());
        assert_eq!(report.balance, Rupiah::zero());
    }

    #[test]
    fn test_disjoint_months_add_up() {
        let march = vec![
            row("Gaji", 5_000_000, TxnKind::Income, "2025-03-01"),
            row("Kopi", 5_000, TxnKind::Expense, "2025-03-14"),
        ];
        let april = vec![row("Makan", 25_000, TxnKind::Expense, "2025-04-02")];
        let combined: Vec<RawRow> = march.iter().chain(april.iter()).cloned().collect();

        let m = MonthlyReport::from_rows(&combined, "2025-03");
        let a = MonthlyReport::from_rows(&combined, "2025-04");

        assert_eq!(m, MonthlyReport::from_rows(&march, "2025-03"));
        assert_eq!(a, MonthlyReport::from_rows(&april, "2025-04"));
        assert_eq!(m.expense + a.expense, Rupiah::new(30_000));
    }
}
