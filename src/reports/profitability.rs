//! Profitability by Category
//!
//! Nets income and expenses per category: each category's total is the
//! signed sum of its transaction amounts.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::display::report::{format_money, format_title, separator, truncate, REPORT_WIDTH};
use crate::models::{Money, Transaction};

/// Signed net total per category code
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfitabilityReport {
    /// Net amount per category; keys are the raw, case-sensitive codes
    pub categories: BTreeMap<String, Money>,
    /// Transactions left out because they had no category
    pub uncategorized_count: usize,
}

impl ProfitabilityReport {
    /// Sum signed amounts per category
    ///
    /// Transactions without a category are skipped.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut categories: BTreeMap<String, Money> = BTreeMap::new();
        let mut uncategorized_count = 0;

        for txn in transactions {
            match txn.category() {
                Some(category) => {
                    *categories.entry(category.to_string()).or_default() += txn.amount;
                }
                None => uncategorized_count += 1,
            }
        }

        if uncategorized_count > 0 {
            debug!(uncategorized_count, "skipped uncategorized transactions in profitability");
        }

        Self {
            categories,
            uncategorized_count,
        }
    }

    /// Net total for a category (exact, case-sensitive match)
    pub fn get(&self, category: &str) -> Option<Money> {
        self.categories.get(category).copied()
    }

    /// Categories sorted from most to least profitable
    pub fn ranked(&self) -> Vec<(&str, Money)> {
        let mut ranked: Vec<_> = self
            .categories
            .iter()
            .map(|(code, net)| (code.as_str(), *net))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.categories.is_empty() {
            return "No categorized transactions available".to_string();
        }

        let mut output = format_title("Profitability by Category");
        output.push_str(&format!("{:<30} {:>18}\n", "Category", "Net"));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        for (category, net) in self.ranked() {
            output.push_str(&format!(
                "{:<30} {:>18}\n",
                truncate(category, 30),
                format_money(net, symbol)
            ));
        }

        if self.uncategorized_count > 0 {
            output.push_str(&format!(
                "\n({} uncategorized transaction(s) not included)\n",
                self.uncategorized_count
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: &str) -> Transaction {
        Transaction::dated(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            category,
        )
    }

    #[test]
    fn test_nets_income_and_expenses() {
        let transactions = vec![
            txn(50000, "Sales"),
            txn(-20000, "Sales"),
            txn(10000, "Consulting"),
        ];

        let report = ProfitabilityReport::generate(&transactions);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.get("Sales"), Some(Money::from_units(300)));
        assert_eq!(report.get("Consulting"), Some(Money::from_units(100)));
    }

    #[test]
    fn test_expense_heavy_category_is_negative() {
        let report = ProfitabilityReport::generate(&[txn(-7500, "Cement"), txn(2500, "Cement")]);
        assert_eq!(report.get("Cement"), Some(Money::from_cents(-5000)));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let report = ProfitabilityReport::generate(&[txn(100, "sales"), txn(200, "Sales")]);
        assert_eq!(report.get("sales"), Some(Money::from_cents(100)));
        assert_eq!(report.get("Sales"), Some(Money::from_cents(200)));
    }

    #[test]
    fn test_uncategorized_are_skipped() {
        let transactions = vec![
            txn(100, "Sales"),
            Transaction::new(Money::from_cents(-999), None, None),
        ];
        let report = ProfitabilityReport::generate(&transactions);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.uncategorized_count, 1);
    }

    #[test]
    fn test_undated_still_counted() {
        let undated = Transaction::new(Money::from_cents(400), None, Some("Sales".into()));
        let report = ProfitabilityReport::generate(&[undated]);
        assert_eq!(report.get("Sales"), Some(Money::from_cents(400)));
    }

    #[test]
    fn test_ranked_orders_by_net_descending() {
        let report = ProfitabilityReport::generate(&[
            txn(-500, "Labour"),
            txn(900, "Sales"),
            txn(100, "Consulting"),
        ]);
        let order: Vec<&str> = report.ranked().into_iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Sales", "Consulting", "Labour"]);
    }

    #[test]
    fn test_format_terminal() {
        let report = ProfitabilityReport::generate(&[txn(-20000, "Labour")]);
        let output = report.format_terminal("GH₵");
        assert!(output.contains("Labour"));
        assert!(output.contains("-GH₵200.00"));
    }
}
