//! cashflow-cli - cash flow analysis for small organizations
//!
//! This library records expenditures and income and derives cash-flow
//! analytics from them: monthly inflow/outflow summaries, the average burn
//! rate, flat multi-month forecasts, per-category profitability, budget
//! variance, and the cost impact of a single spending category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, bank accounts, months)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer, including the `FinancialAnalyzer` facade
//! - `reports`: The analyses and their terminal/CSV renderings
//! - `display`: Terminal formatting helpers
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `cashflow` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow_cli::services::FinancialAnalyzer;
//!
//! let transactions = storage.transactions.get_all()?;
//! let analyzer = FinancialAnalyzer::new(&transactions, &[]);
//! println!("{}", analyzer.cash_flow_report("GH₵"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CashflowError, CashflowResult};
