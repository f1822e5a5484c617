//! Financial analyzer
//!
//! Single entry point to every analysis over one borrowed snapshot of
//! transactions. The analyzer holds no state of its own; each call builds a
//! fresh report.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::error::CashflowResult;
use crate::models::{BankAccount, Money, MonthKey, Transaction};
use crate::reports::{
    BudgetVarianceReport, BurnRate, CashFlowReport, CashForecast, MaterialImpactReport,
    MonthBucket, ProfitabilityReport,
};

/// Analytics over a borrowed set of transactions and bank accounts
#[derive(Debug, Clone, Copy)]
pub struct FinancialAnalyzer<'a> {
    transactions: &'a [Transaction],
    accounts: &'a [BankAccount],
}

impl<'a> FinancialAnalyzer<'a> {
    /// Create an analyzer over the given snapshot
    pub fn new(transactions: &'a [Transaction], accounts: &'a [BankAccount]) -> Self {
        Self {
            transactions,
            accounts,
        }
    }

    /// Transactions under analysis
    pub fn transactions(&self) -> &'a [Transaction] {
        self.transactions
    }

    /// Bank accounts carried alongside the transactions
    ///
    /// Not used by any analysis.
    pub fn bank_accounts(&self) -> &'a [BankAccount] {
        self.accounts
    }

    /// Full month-bucketed cash flow report
    pub fn cash_flow(&self) -> CashFlowReport {
        CashFlowReport::generate(self.transactions)
    }

    /// Month buckets in chronological order
    pub fn monthly_cash_flow(&self) -> BTreeMap<MonthKey, MonthBucket> {
        self.cash_flow().months
    }

    /// Average monthly expense
    pub fn burn_rate(&self) -> f64 {
        self.cash_flow().burn_rate()
    }

    /// Burn rate with its totals
    pub fn burn_rate_report(&self) -> BurnRate {
        BurnRate::calculate(self.transactions)
    }

    /// Project the burn rate over the months following the current one
    pub fn forecast_cash_needs(&self, months_to_project: i32) -> CashForecast {
        self.forecast_from(Local::now().date_naive(), months_to_project)
    }

    /// Project the burn rate over the months following `today`'s month
    pub fn forecast_from(&self, today: NaiveDate, months_to_project: i32) -> CashForecast {
        CashForecast::project(self.burn_rate(), months_to_project, today)
    }

    /// Signed net amount per category
    pub fn profitability_by_category(&self) -> ProfitabilityReport {
        ProfitabilityReport::generate(self.transactions)
    }

    /// Compare a budget against total actual expenses
    pub fn compare_budget_vs_actuals(&self, budget: Money) -> BudgetVarianceReport {
        BudgetVarianceReport::generate(self.transactions, budget)
    }

    /// Share of expense cost attributable to one category
    pub fn analyze_material_impact(
        &self,
        material_category: Option<&str>,
    ) -> CashflowResult<MaterialImpactReport> {
        MaterialImpactReport::generate(self.transactions, material_category)
    }

    /// Rendered cash flow table
    pub fn cash_flow_report(&self, symbol: &str) -> String {
        self.cash_flow().format_terminal(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{BudgetStatus, NO_DATA_MESSAGE};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::dated(Money::from_units(-500), date(2025, 1, 5), "Cement"),
            Transaction::dated(Money::from_units(-300), date(2025, 1, 20), "Labour"),
            Transaction::dated(Money::from_units(2000), date(2025, 1, 25), "Sales"),
            Transaction::dated(Money::from_units(-400), date(2025, 2, 3), "cement"),
            Transaction::new(Money::from_units(-100), None, None),
        ]
    }

    #[test]
    fn test_every_analysis_on_one_snapshot() {
        let transactions = sample();
        let accounts = vec![BankAccount::new("GCB", Money::from_units(1000))];
        let analyzer = FinancialAnalyzer::new(&transactions, &accounts);

        let months = analyzer.monthly_cash_flow();
        assert_eq!(months.len(), 2);

        assert!((analyzer.burn_rate() - 600.0).abs() < 1e-9);
        assert_eq!(analyzer.burn_rate_report().month_count, 2);

        let forecast = analyzer.forecast_from(date(2025, 11, 10), 3);
        let keys: Vec<String> = forecast.months.keys().map(|k| k.label()).collect();
        assert_eq!(keys, vec!["Dec-2025", "Jan-2026", "Feb-2026"]);
        assert!(forecast.months.values().all(|v| (*v - 600.0).abs() < 1e-9));

        let profit = analyzer.profitability_by_category();
        assert_eq!(profit.get("Cement"), Some(Money::from_units(-500)));
        assert_eq!(profit.get("cement"), Some(Money::from_units(-400)));

        let variance = analyzer.compare_budget_vs_actuals(Money::from_units(1000));
        assert_eq!(variance.actual_expenses, Money::from_units(1300));
        assert_eq!(variance.status, BudgetStatus::OverBudget);

        let impact = analyzer.analyze_material_impact(Some("CEMENT")).unwrap();
        assert_eq!(impact.material_cost, Money::from_units(900));
        assert_eq!(impact.other_costs, Money::from_units(400));

        assert_eq!(analyzer.bank_accounts().len(), 1);
        assert_eq!(analyzer.transactions().len(), 5);
    }

    #[test]
    fn test_forecast_cash_needs_uses_current_month() {
        let transactions = sample();
        let analyzer = FinancialAnalyzer::new(&transactions, &[]);

        let forecast = analyzer.forecast_cash_needs(3);
        assert_eq!(forecast.len(), 3);
        assert!(forecast
            .months
            .values()
            .all(|v| (*v - analyzer.burn_rate()).abs() < 1e-9));

        let next_month = MonthKey::from_date(chrono::Local::now().date_naive()).next();
        let first = forecast.months.keys().next().copied();
        // A month boundary between the two clock reads shifts the window by one
        assert!(first == Some(next_month) || first == Some(next_month.next()));
    }

    #[test]
    fn test_material_impact_requires_target() {
        let transactions = sample();
        let analyzer = FinancialAnalyzer::new(&transactions, &[]);
        assert!(analyzer
            .analyze_material_impact(None)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_empty_snapshot() {
        let analyzer = FinancialAnalyzer::new(&[], &[]);

        assert!(analyzer.monthly_cash_flow().is_empty());
        assert_eq!(analyzer.burn_rate(), 0.0);
        assert!(analyzer.forecast_cash_needs(0).is_empty());
        assert_eq!(analyzer.cash_flow_report("GH₵"), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_input_untouched() {
        let transactions = sample();
        let before = transactions.clone();
        let analyzer = FinancialAnalyzer::new(&transactions, &[]);

        let _ = analyzer.cash_flow_report("GH₵");
        let _ = analyzer.profitability_by_category();
        let _ = analyzer.analyze_material_impact(Some("Cement"));

        assert_eq!(transactions, before);
    }
}
