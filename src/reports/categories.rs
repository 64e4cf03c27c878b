//! Category breakdown report
//!
//! Groups a month's expenses by description. The description IS the
//! category key: "Kopi" and "Kopi pagi" stay separate buckets. Fuzzy
//! merging was considered and rejected; the grouping must be predictable
//! from what the user typed.

use std::collections::HashMap;

use crate::ledger::RawRow;
use crate::models::Rupiah;
use crate::reports::coerced;

/// Bucket label for everything past the display limit.
pub const OTHER_LABEL: &str = "Lainnya";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: Rupiah,
}

/// Per-category expense totals for one month, largest first.
#[derive(Debug)]
pub struct CategoryReport {
    pub month: String,
    pub entries: Vec<CategoryTotal>,
    pub total: Rupiah,
}

impl CategoryReport {
    /// Build the breakdown for `month`, keeping at most `limit` named
    /// categories. Anything beyond the limit is collapsed into a single
    /// [`OTHER_LABEL`] bucket, so the entry totals always sum to the raw
    /// expense total.
    pub fn from_rows(rows: &[RawRow], month: &str, limit: usize) -> Self {
        let mut sums: HashMap<String, Rupiah> = HashMap::new();
        for txn in coerced(rows).filter(|txn| txn.is_expense() && txn.month == month) {
            *sums.entry(txn.description).or_default() += txn.amount;
        }

        let total = sums.values().copied().sum();

        let mut entries: Vec<CategoryTotal> = sums
            .into_iter()
            .map(|(label, total)| CategoryTotal { label, total })
            .collect();

        // Largest first; ties break alphabetically so the order is stable.
        entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));

        if entries.len() > limit {
            let tail = entries.split_off(limit);
            let bucket = tail.iter().map(|entry| entry.total).sum();
            entries.push(CategoryTotal {
                label: OTHER_LABEL.to_string(),
                total: bucket,
            });
        }

        Self {
            month: month.to_string(),
            entries,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("No expenses in {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!("Categories for {}\n", self.month));
        output.push_str(&format!("{}\n", "-".repeat(48)));

        for entry in &self.entries {
            let percent = if self.total.is_zero() {
                0.0
            } else {
                entry.total.value() as f64 / self.total.value() as f64 * 100.0
            };
            output.push_str(&format!(
                "  {:<24} {:>12} {:>5.1}%\n",
                entry.label,
                entry.total.to_string(),
                percent
            ));
        }

        output.push_str(&format!("{}\n", "-".repeat(48)));
        output.push_str(&format!(
            "  {:<24} {:>12}\n",
            "Total",
            self.total.to_string()
        ));

        output
    }
}
