//! Daily expense report

use chrono::NaiveDate;

use crate::ledger::RawRow;
use crate::models::{Rupiah, Transaction};
use crate::reports::coerced;

/// All expenses on a single date, with their total.
#[derive(Debug)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub items: Vec<Transaction>,
    pub total: Rupiah,
}

impl DailyReport {
    /// Build the report for `date`. Income rows and other dates are
    /// excluded; an empty day yields an empty report with a zero total.
    pub fn from_rows(rows: &[RawRow], date: NaiveDate) -> Self {
        let items: Vec<Transaction> = coerced(rows)
            .filter(|txn| txn.is_expense() && txn.date == date)
            .collect();
        let total = items.iter().map(|txn| txn.amount).sum();

        Self { date, items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Format report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("No expenses on {}.\n", self.date);
        }

        let mut output = String::new();
        output.push_str(&format!("Expenses for {}\n", self.date));
        output.push_str(&format!("{}\n", "-".repeat(40)));

        for txn in &self.items {
            output.push_str(&format!(
                "  {:<24} {:>12}\n",
                txn.description,
                txn.amount.to_string()
            ));
        }

        output.push_str(&format!("{}\n", "-".repeat(40)));
        output.push_str(&format!(
            "  {:<24} {:>12}\n",
            "Total",
            self.total.to_string()
        ));

        output
    }
}
