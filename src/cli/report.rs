//! CLI commands for reports
//!
//! Every report works on one snapshot of the stored transactions. Only the
//! cash flow report can be written to a file, and only from here.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::{format_money, format_title};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, Transaction};
use crate::services::FinancialAnalyzer;
use crate::storage::Storage;

use super::parse_amount;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly expenses, income and net with the average burn rate
    #[command(alias = "cashflow")]
    CashFlow {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Average monthly expense
    #[command(alias = "burn")]
    BurnRate,

    /// Project cash needs over the coming months
    Forecast {
        /// Number of months to project (defaults to the configured horizon)
        #[arg(short, long, allow_hyphen_values = true)]
        months: Option<i32>,
    },

    /// Net amount per category
    #[command(alias = "profit")]
    Profitability,

    /// Compare a budget against actual expenses
    Budget {
        /// Budget amount (e.g., "5000")
        amount: String,
    },

    /// Share of costs spent on one category
    Material {
        /// Category to analyse (case-insensitive)
        category: Option<String>,
    },

    /// Totals over every transaction
    Total,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> CashflowResult<()> {
    let transactions = storage.transactions.get_all()?;
    let accounts = storage.accounts.get_all()?;
    let analyzer = FinancialAnalyzer::new(&transactions, &accounts);
    let symbol = settings.currency_symbol.as_str();

    if let Some(org) = &settings.organization_name {
        println!("{}\n", org);
    }

    match cmd {
        ReportCommands::CashFlow { output } => {
            let report = analyzer.cash_flow();
            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    CashflowError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                report.export_csv(BufWriter::new(file))?;
                println!("Cash flow report exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal(symbol));
            }
        }

        ReportCommands::BurnRate => {
            println!("{}", analyzer.burn_rate_report().format_terminal(symbol));
        }

        ReportCommands::Forecast { months } => {
            let months = months.unwrap_or(settings.forecast_months);
            println!("{}", analyzer.forecast_cash_needs(months).format_terminal(symbol));
        }

        ReportCommands::Profitability => {
            println!("{}", analyzer.profitability_by_category().format_terminal(symbol));
        }

        ReportCommands::Budget { amount } => {
            let budget = parse_amount(&amount, "budget amount")?;
            println!(
                "{}",
                analyzer.compare_budget_vs_actuals(budget).format_terminal(symbol)
            );
        }

        ReportCommands::Material { category } => {
            let report = analyzer.analyze_material_impact(category.as_deref())?;
            println!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Total => {
            println!("{}", format_totals(&transactions, symbol));
        }
    }

    Ok(())
}

/// Expenditure, income and net over every transaction, dated or not
fn format_totals(transactions: &[Transaction], symbol: &str) -> String {
    let expenditure: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum();
    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let mut output = format_title("Totals");
    output.push_str(&format!("Transactions:      {}\n", transactions.len()));
    output.push_str(&format!("Total Expenditure: {}\n", format_money(expenditure, symbol)));
    output.push_str(&format!("Total Income:      {}\n", format_money(income, symbol)));
    output.push_str(&format!("Net:               {}", format_money(income - expenditure, symbol)));
    output
}
