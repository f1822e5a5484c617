//! Burn Rate
//!
//! The average monthly expense across every month present in the cash flow.

use serde::Serialize;

use crate::display::report::{format_amount, format_money};
use crate::models::{Money, Transaction};

use super::cash_flow::CashFlowReport;

/// Average monthly expense total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurnRate {
    /// Sum of every month's expense total
    pub total_expenses: Money,
    /// Number of distinct months averaged over
    pub month_count: usize,
    /// `total_expenses / month_count`, or 0.0 with no months; unrounded
    pub monthly_average: f64,
}

impl BurnRate {
    /// Derive the burn rate from a monthly cash flow
    pub fn from_cash_flow(cash_flow: &CashFlowReport) -> Self {
        let total_expenses = cash_flow.total_expenses();
        let month_count = cash_flow.month_count();

        let monthly_average = if month_count == 0 {
            0.0
        } else {
            total_expenses.as_f64() / month_count as f64
        };

        Self {
            total_expenses,
            month_count,
            monthly_average,
        }
    }

    /// Aggregate transactions and compute the burn rate in one step
    pub fn calculate(transactions: &[Transaction]) -> Self {
        Self::from_cash_flow(&CashFlowReport::generate(transactions))
    }

    /// Format for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        format!(
            "Average Monthly Burn Rate: {}\n(total expenses {} over {} month(s))",
            format_amount(self.monthly_average, symbol),
            format_money(self.total_expenses, symbol),
            self.month_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(cents: i64, month: u32) -> Transaction {
        Transaction::dated(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
            "GEN",
        )
    }

    #[test]
    fn test_empty_input_is_exactly_zero() {
        let rate = BurnRate::calculate(&[]);
        assert_eq!(rate.monthly_average, 0.0);
        assert_eq!(rate.month_count, 0);
    }

    #[test]
    fn test_only_undated_input_is_zero() {
        let rate = BurnRate::calculate(&[Transaction::new(Money::from_cents(-500), None, None)]);
        assert_eq!(rate.monthly_average, 0.0);
    }

    #[test]
    fn test_average_over_months_present() {
        let transactions = vec![txn(-30000, 1), txn(-10000, 1), txn(50000, 2), txn(-20000, 3)];
        let rate = BurnRate::calculate(&transactions);

        assert_eq!(rate.month_count, 3);
        assert_eq!(rate.total_expenses.cents(), 60000);
        assert_eq!(rate.monthly_average, 200.0);
    }

    #[test]
    fn test_no_internal_rounding() {
        let transactions = vec![txn(-100, 1), txn(0, 2), txn(0, 3)];
        let rate = BurnRate::calculate(&transactions);
        assert_eq!(rate.monthly_average, 1.0 / 3.0);
    }

    #[test]
    fn test_format_terminal() {
        let rate = BurnRate::calculate(&[txn(-12345, 1)]);
        assert!(rate
            .format_terminal("GH₵")
            .starts_with("Average Monthly Burn Rate: GH₵123.45"));
    }
}
