//! Export module for cashflow-cli
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: transaction register, categories, and bank accounts
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_accounts_csv, export_categories_csv, export_transactions_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
