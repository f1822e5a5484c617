//! Service layer for cashflow-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, reference numbering, imports, and the analytics
//! facade the report commands use.

pub mod account;
pub mod analyzer;
pub mod category;
pub mod import;
pub mod transaction;

pub use account::AccountService;
pub use analyzer::FinancialAnalyzer;
pub use category::CategoryService;
pub use import::{ImportResult, ImportService, LegacyImportOptions};
pub use transaction::{CreateTransactionInput, TransactionService};
