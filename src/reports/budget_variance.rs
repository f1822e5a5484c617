//! Budget vs Actuals
//!
//! Compares a stated budget against the total of every expense on record.
//! No month bucketing is applied, so undated and uncategorized expenses
//! still count.

use serde::Serialize;
use std::fmt;

use crate::display::report::format_money;
use crate::models::{Money, Transaction};

/// Whether spending stayed within the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Variance is zero or positive
    UnderBudget,
    /// Variance is negative
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderBudget => write!(f, "Under Budget"),
            Self::OverBudget => write!(f, "Over Budget"),
        }
    }
}

/// Budget compared with actual expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetVarianceReport {
    /// The budget supplied by the caller
    pub budget: Money,
    /// Sum of absolute values of all negative amounts
    pub actual_expenses: Money,
    /// `budget - actual_expenses`
    pub variance: Money,
    /// Classification of the variance
    pub status: BudgetStatus,
}

impl BudgetVarianceReport {
    /// Compare `budget` with the total expenses in `transactions`
    pub fn generate(transactions: &[Transaction], budget: Money) -> Self {
        let actual_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount.abs())
            .sum();

        let variance = budget - actual_expenses;
        let status = if variance.is_negative() {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::UnderBudget
        };

        Self {
            budget,
            actual_expenses,
            variance,
            status,
        }
    }

    /// The size of the variance, regardless of direction
    pub fn absolute_variance(&self) -> Money {
        self.variance.abs()
    }

    /// Format for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        format!(
            "Budget: {}\nActual Expenses: {}\nVariance: {} ({})",
            format_money(self.budget, symbol),
            format_money(self.actual_expenses, symbol),
            format_money(self.absolute_variance(), symbol),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(units: i64) -> Transaction {
        Transaction::dated(
            Money::from_units(-units),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            "GEN",
        )
    }

    #[test]
    fn test_under_budget() {
        let income = Transaction::dated(
            Money::from_units(10_000),
            NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
            "Sales",
        );
        let transactions = vec![expense(500), expense(200), income];

        let report = BudgetVarianceReport::generate(&transactions, Money::from_units(1000));
        assert_eq!(report.actual_expenses, Money::from_units(700));
        assert_eq!(report.variance, Money::from_units(300));
        assert_eq!(report.status, BudgetStatus::UnderBudget);
        assert_eq!(report.status.to_string(), "Under Budget");
    }

    #[test]
    fn test_over_budget_reports_absolute_variance() {
        let transactions = vec![expense(700), expense(500)];

        let report = BudgetVarianceReport::generate(&transactions, Money::from_units(1000));
        assert_eq!(report.variance, Money::from_units(-200));
        assert_eq!(report.absolute_variance(), Money::from_units(200));
        assert_eq!(report.status, BudgetStatus::OverBudget);
        assert!(report
            .format_terminal("GH₵")
            .ends_with("Variance: GH₵200.00 (Over Budget)"));
    }

    #[test]
    fn test_exactly_on_budget_is_under() {
        let report = BudgetVarianceReport::generate(&[expense(1000)], Money::from_units(1000));
        assert!(report.variance.is_zero());
        assert_eq!(report.status, BudgetStatus::UnderBudget);
    }

    #[test]
    fn test_counts_undated_and_uncategorized_expenses() {
        let transactions = vec![
            expense(100),
            Transaction::new(Money::from_units(-50), None, None),
        ];
        let report = BudgetVarianceReport::generate(&transactions, Money::from_units(1000));
        assert_eq!(report.actual_expenses, Money::from_units(150));
    }

    #[test]
    fn test_empty_input() {
        let report = BudgetVarianceReport::generate(&[], Money::from_units(250));
        assert!(report.actual_expenses.is_zero());
        assert_eq!(report.variance, Money::from_units(250));
        assert_eq!(report.status, BudgetStatus::UnderBudget);
    }

    #[test]
    fn test_format_terminal() {
        let report = BudgetVarianceReport::generate(&[expense(700)], Money::from_units(1000));
        assert_eq!(
            report.format_terminal("GH₵"),
            "Budget: GH₵1000.00\nActual Expenses: GH₵700.00\nVariance: GH₵300.00 (Under Budget)"
        );
    }

    #[test]
    fn test_huge_expenses_saturate() {
        let huge = Transaction::new(Money::from_cents(-9_000_000_000_000_000_000), None, None);
        let report = BudgetVarianceReport::generate(&[huge.clone(), huge], Money::from_units(-1));

        assert_eq!(report.actual_expenses.cents(), i64::MAX);
        assert_eq!(report.status, BudgetStatus::OverBudget);
        assert!(report.absolute_variance().is_positive());
    }
}
