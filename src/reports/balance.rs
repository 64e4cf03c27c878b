//! Running balance across the whole ledger

use crate::ledger::RawRow;
use crate::models::Rupiah;
use crate::reports::coerced;

/// All-time income, expense, and net balance.
#[derive(Debug, PartialEq)]
pub struct BalanceReport {
    pub income: Rupiah,
    pub expense: Rupiah,
    pub balance: Rupiah,
}

impl BalanceReport {
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let mut income = Rupiah::zero();
        let mut expense = Rupiah::zero();

        for txn in coerced(rows) {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Format report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("Running balance\n");
        output.push_str(&format!("{}\n", "-".repeat(40)));
        output.push_str(&format!("  {:<12} {:>12}\n", "Income", self.income.to_string()));
        output.push_str(&format!("  {:<12} {:>12}\n", "Expense", self.expense.to_string()));
        output.push_str(&format!("  {:<12} {:>12}\n", "Balance", self.balance.to_string()));
        output
    }
}

/// Net balance over every row ever recorded. Zero for an empty ledger.
pub fn running_balance(rows: &[RawRow]) -> Rupiah {
    BalanceReport::from_rows(rows).balance
}
