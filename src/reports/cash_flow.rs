//! Monthly Cash Flow Report
//!
//! Buckets transactions by calendar month, splitting each month into an
//! expense total and an income total. Every other time-based analysis
//! (burn rate, forecast) is derived from this aggregation.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::display::report::{format_amount, format_money, format_title, separator, REPORT_WIDTH};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, MonthKey, Transaction};

use super::burn_rate::BurnRate;

/// Message rendered instead of an empty table
pub const NO_DATA_MESSAGE: &str = "No expenditure data available";

/// Expense and income totals for one calendar month
///
/// Both totals are non-negative magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    /// Sum of the absolute values of negative amounts
    pub expense_total: Money,
    /// Sum of zero and positive amounts
    pub income_total: Money,
    /// Number of transactions that landed in this month
    pub transaction_count: usize,
}

impl MonthBucket {
    fn record(&mut self, amount: Money) {
        if amount.is_negative() {
            self.expense_total += amount.abs();
        } else {
            self.income_total += amount;
        }
        self.transaction_count += 1;
    }

    /// Income minus expenses; negative when the month burned cash
    pub fn net(&self) -> Money {
        self.income_total - self.expense_total
    }
}

/// Monthly cash flow, iterated in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CashFlowReport {
    /// Month buckets keyed by calendar month
    pub months: BTreeMap<MonthKey, MonthBucket>,
    /// Transactions left out because they had no date
    pub undated_count: usize,
}

impl CashFlowReport {
    /// Aggregate transactions into month buckets
    ///
    /// Transactions without a date are skipped.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut months: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
        let mut undated_count = 0;

        for txn in transactions {
            let Some(date) = txn.date else {
                undated_count += 1;
                continue;
            };

            months
                .entry(MonthKey::from_date(date))
                .or_default()
                .record(txn.amount);
        }

        if undated_count > 0 {
            debug!(undated_count, "skipped undated transactions in cash flow");
        }

        Self {
            months,
            undated_count,
        }
    }

    /// Check if there are no month buckets
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Number of distinct months with at least one transaction
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Get the bucket for a month
    pub fn month(&self, key: MonthKey) -> Option<&MonthBucket> {
        self.months.get(&key)
    }

    /// Total expenses across all months (non-negative)
    pub fn total_expenses(&self) -> Money {
        self.months.values().map(|b| b.expense_total).sum()
    }

    /// Total income across all months
    pub fn total_income(&self) -> Money {
        self.months.values().map(|b| b.income_total).sum()
    }

    /// Average monthly expense over the months present
    pub fn burn_rate(&self) -> f64 {
        BurnRate::from_cash_flow(self).monthly_average
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }

        let mut output = format_title("Monthly Cash Flow Report");

        output.push_str(&format!(
            "{:<12} {:>15} {:>15} {:>15}\n",
            "Month-Year", "Expenses", "Income", "Net"
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        for (month, bucket) in &self.months {
            output.push_str(&format!(
                "{:<12} {:>15} {:>15} {:>15}\n",
                month.label(),
                format_money(bucket.expense_total, symbol),
                format_money(bucket.income_total, symbol),
                format_money(bucket.net(), symbol),
            ));
        }

        output.push_str(&format!(
            "\nAverage Monthly Burn Rate: {}",
            format_amount(self.burn_rate(), symbol)
        ));

        output
    }

    /// Export the month buckets as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> CashflowResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Month", "Expenses", "Income", "Net", "Transactions"])
            .map_err(|e| CashflowError::Export(e.to_string()))?;

        for (month, bucket) in &self.months {
            csv.write_record([
                month.label(),
                bucket.expense_total.to_string(),
                bucket.income_total.to_string(),
                bucket.net().to_string(),
                bucket.transaction_count.to_string(),
            ])
            .map_err(|e| CashflowError::Export(e.to_string()))?;
        }

        csv.flush()
            .map_err(|e| CashflowError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(cents: i64, y: i32, m: u32) -> Transaction {
        Transaction::dated(Money::from_cents(cents), date(y, m, 10), "GEN")
    }

    #[test]
    fn test_buckets_split_expense_and_income() {
        let transactions = vec![
            txn(-10000, 2025, 1),
            txn(-5000, 2025, 1),
            txn(30000, 2025, 1),
            txn(-2000, 2025, 2),
        ];

        let report = CashFlowReport::generate(&transactions);
        assert_eq!(report.month_count(), 2);

        let jan = report.month(MonthKey::new(2025, 1).unwrap()).unwrap();
        assert_eq!(jan.expense_total.cents(), 15000);
        assert_eq!(jan.income_total.cents(), 30000);
        assert_eq!(jan.net().cents(), 15000);
        assert_eq!(jan.transaction_count, 3);

        let feb = report.month(MonthKey::new(2025, 2).unwrap()).unwrap();
        assert_eq!(feb.expense_total.cents(), 2000);
        assert!(feb.income_total.is_zero());
        assert_eq!(feb.net().cents(), -2000);
    }

    #[test]
    fn test_zero_amount_counts_as_income() {
        let report = CashFlowReport::generate(&[txn(0, 2025, 3)]);
        let bucket = report.month(MonthKey::new(2025, 3).unwrap()).unwrap();
        assert!(bucket.expense_total.is_zero());
        assert!(bucket.income_total.is_zero());
        assert_eq!(bucket.transaction_count, 1);
    }

    #[test]
    fn test_undated_transactions_are_skipped() {
        let transactions = vec![
            txn(-10000, 2025, 1),
            Transaction::new(Money::from_cents(-99999), None, Some("GEN".into())),
        ];

        let report = CashFlowReport::generate(&transactions);
        assert_eq!(report.month_count(), 1);
        assert_eq!(report.undated_count, 1);
        assert_eq!(report.total_expenses().cents(), 10000);
    }

    #[test]
    fn test_expense_totals_match_dated_expenses() {
        let transactions = vec![
            txn(-1234, 2024, 11),
            txn(-4321, 2024, 12),
            txn(5000, 2024, 12),
            txn(-1, 2025, 1),
            Transaction::new(Money::from_cents(-700), None, None),
        ];

        let report = CashFlowReport::generate(&transactions);
        let expected: Money = transactions
            .iter()
            .filter(|t| t.date.is_some() && t.amount.is_negative())
            .map(|t| t.amount.abs())
            .sum();

        assert_eq!(report.total_expenses(), expected);
        assert!(report
            .months
            .values()
            .all(|b| !b.expense_total.is_negative() && !b.income_total.is_negative()));
    }

    #[test]
    fn test_months_iterate_chronologically_across_years() {
        let transactions = vec![
            txn(-100, 2024, 1),
            txn(-100, 2023, 12),
            txn(-100, 2023, 2),
        ];

        let report = CashFlowReport::generate(&transactions);
        let labels: Vec<String> = report.months.keys().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["Feb-2023", "Dec-2023", "Jan-2024"]);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let transactions = vec![txn(-333, 2025, 1), txn(777, 2025, 2), txn(-1, 2025, 2)];
        let first = CashFlowReport::generate(&transactions);
        let second = CashFlowReport::generate(&transactions);
        assert_eq!(first, second);
        assert_eq!(first.burn_rate().to_bits(), second.burn_rate().to_bits());
    }

    #[test]
    fn test_format_terminal() {
        let transactions = vec![txn(-30000, 2025, 1), txn(50000, 2025, 1), txn(-10000, 2025, 2)];
        let report = CashFlowReport::generate(&transactions);
        let output = report.format_terminal("GH₵");

        assert!(output.starts_with("Monthly Cash Flow Report"));
        let jan_row = output.lines().find(|l| l.starts_with("Jan-2025")).unwrap();
        assert!(jan_row.contains("GH₵300.00"));
        assert!(jan_row.contains("GH₵500.00"));
        assert!(jan_row.contains("GH₵200.00"));

        let feb_row = output.lines().find(|l| l.starts_with("Feb-2025")).unwrap();
        assert!(feb_row.contains("-GH₵100.00"));

        assert!(output.ends_with("Average Monthly Burn Rate: GH₵200.00"));

        let jan_pos = output.find("Jan-2025").unwrap();
        let feb_pos = output.find("Feb-2025").unwrap();
        assert!(jan_pos < feb_pos);
    }

    #[test]
    fn test_format_terminal_without_data() {
        let report = CashFlowReport::generate(&[]);
        assert_eq!(report.format_terminal("GH₵"), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_export_csv() {
        let report = CashFlowReport::generate(&[txn(-1050, 2025, 4), txn(2000, 2025, 4)]);
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Month,Expenses,Income,Net,Transactions"));
        assert_eq!(lines.next(), Some("Apr-2025,10.50,20.00,9.50,2"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_huge_expenses_saturate() {
        let transactions = vec![
            txn(-9_000_000_000_000_000_000, 2025, 1),
            txn(-9_000_000_000_000_000_000, 2025, 1),
        ];

        let report = CashFlowReport::generate(&transactions);
        let jan = report.month(MonthKey::new(2025, 1).unwrap()).unwrap();
        assert_eq!(jan.expense_total.cents(), i64::MAX);
        assert!(jan.net().is_negative());
        assert!(report.burn_rate().is_finite());
    }
}
