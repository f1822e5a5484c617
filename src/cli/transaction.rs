//! Transaction CLI commands
//!
//! Records expenditures and income and lists or searches them.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{CashflowError, CashflowResult};
use crate::services::{CategoryService, CreateTransactionInput, TransactionService};
use crate::storage::Storage;

use super::parse_amount;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction (negative amounts are expenses)
    Add {
        /// Amount (e.g., "-250.50" for an expense, "1200" for income)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Record as an expense regardless of the amount's sign
        #[arg(short, long)]
        expense: bool,
        /// Category code
        #[arg(short, long)]
        category: Option<String>,
        /// Create the category if it does not exist
        #[arg(long)]
        create_category: bool,
        /// Transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method (Cash, Bank, MoMo, ...)
        #[arg(short = 'm', long = "method")]
        payment_method: Option<String>,
        /// Vendor or payer
        #[arg(long)]
        vendor: Option<String>,
        /// Bank account ID to link the transaction to
        #[arg(short, long)]
        account: Option<String>,
    },

    /// List transactions
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Show every transaction
        #[arg(long)]
        all: bool,
    },

    /// Search by category code or vendor
    Search {
        /// Case-insensitive keyword
        keyword: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> CashflowResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            expense,
            category,
            create_category,
            date,
            payment_method,
            vendor,
            account,
        } => {
            let mut amount = parse_amount(&amount, "amount")?;
            if expense {
                amount = -amount.abs();
            }

            let date = date
                .map(|d| parse_date(&d, &settings.date_format))
                .transpose()?;

            let txn = service.add(CreateTransactionInput {
                amount,
                date,
                category,
                create_category,
                payment_method,
                vendor,
                account,
            })?;

            let category_name = match txn.category() {
                Some(code) => CategoryService::new(storage).get(code)?.map(|c| c.name),
                None => None,
            };

            println!("Transaction recorded.");
            print!(
                "{}",
                format_transaction_details(&txn, category_name.as_deref(), symbol)
            );
        }

        TransactionCommands::List { limit, all } => {
            let limit = if all { None } else { Some(limit) };
            let transactions = service.list(limit)?;
            print!("{}", format_transaction_register(&transactions, symbol));
        }

        TransactionCommands::Search { keyword } => {
            let results = service.search(&keyword)?;
            if results.is_empty() {
                println!("No matches found.");
            } else {
                print!("{}", format_transaction_register(&results, symbol));
            }
        }
    }

    Ok(())
}

/// Parse a date in the configured format, falling back to ISO
fn parse_date(input: &str, format: &str) -> CashflowResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, format)
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .map_err(|_| {
            CashflowError::Validation(format!(
                "Invalid date format: {}. Use YYYY-MM-DD",
                input
            ))
        })
}
