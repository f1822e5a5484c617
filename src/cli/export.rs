//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{CashflowError, CashflowResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (everything)
    Json,
    /// YAML format (everything, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path
        output: PathBuf,
    },

    /// Export categories to CSV
    Categories {
        /// Output file path
        output: PathBuf,
    },

    /// Export bank accounts to CSV
    Accounts {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> CashflowResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            write_to(&output, |w| match format {
                ExportFormat::Csv => csv::export_transactions_csv(storage, w),
                ExportFormat::Json => json::export_full_json(storage, w, pretty),
                ExportFormat::Yaml => yaml::export_full_yaml(storage, w),
            })?;
            println!("Exported {:?} to: {}", format, output.display());
        }

        ExportCommands::Transactions { output } => {
            write_to(&output, |w| csv::export_transactions_csv(storage, w))?;
            println!("Transactions exported to: {}", output.display());
        }

        ExportCommands::Categories { output } => {
            write_to(&output, |w| csv::export_categories_csv(storage, w))?;
            println!("Categories exported to: {}", output.display());
        }

        ExportCommands::Accounts { output } => {
            write_to(&output, |w| csv::export_accounts_csv(storage, w))?;
            println!("Bank accounts exported to: {}", output.display());
        }

        ExportCommands::Info => {
            let export = json::FullExport::from_storage(storage)?;
            let meta = &export.metadata;

            println!("Export Information");
            println!("{}", "=".repeat(40));
            println!("Schema version:   {}", export.schema_version);
            println!("Transactions:     {} ({} undated)", meta.transaction_count, meta.undated_count);
            println!("Categories:       {}", meta.category_count);
            println!("Bank accounts:    {}", meta.bank_account_count);
            if let (Some(first), Some(last)) =
                (&meta.earliest_transaction, &meta.latest_transaction)
            {
                println!("Date range:       {} to {}", first, last);
            }
        }
    }

    Ok(())
}

/// Create `path` and hand a buffered writer to `write`
fn write_to<F>(path: &Path, write: F) -> CashflowResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> CashflowResult<()>,
{
    let file = File::create(path).map_err(|e| {
        CashflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}
