//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod category;
pub mod export;
pub mod import;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{CashflowError, CashflowResult};
use crate::models::Money;

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str, what: &str) -> CashflowResult<Money> {
    Money::parse(input)
        .map_err(|e| CashflowError::Validation(format!("Invalid {}: {}", what, e)))
}
