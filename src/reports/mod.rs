//! Reports module for cashflow-cli
//!
//! The analytic core. Every report is generated from a borrowed slice of
//! transactions, never mutates it, and builds fresh output on each call:
//!
//! - `cash_flow`: monthly expense/income buckets and the cash flow table
//! - `burn_rate`: average monthly expense
//! - `forecast`: flat projection of the burn rate
//! - `profitability`: signed net per category
//! - `budget_variance`: budget vs total actual expenses
//! - `material_impact`: share of expense cost for one category

pub mod budget_variance;
pub mod burn_rate;
pub mod cash_flow;
pub mod forecast;
pub mod material_impact;
pub mod profitability;

pub use budget_variance::{BudgetStatus, BudgetVarianceReport};
pub use burn_rate::BurnRate;
pub use cash_flow::{CashFlowReport, MonthBucket, NO_DATA_MESSAGE};
pub use forecast::CashForecast;
pub use material_impact::MaterialImpactReport;
pub use profitability::ProfitabilityReport;
