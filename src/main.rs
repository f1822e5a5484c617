use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cashflow_cli::cli::{
    handle_account_command, handle_category_command, handle_export_command,
    handle_import_command, handle_report_command, handle_transaction_command, AccountCommands,
    CategoryCommands, ExportCommands, ReportCommands, TransactionCommands,
};
use cashflow_cli::config::{paths::CashflowPaths, settings::Settings};
use cashflow_cli::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "cashflow",
    author = "Kaylee Beyene",
    version,
    about = "Cash flow and expenditure analysis from the command line",
    long_about = "cashflow records an organization's expenditures and income and \
                  turns them into monthly cash flow, burn rate, forecasts, \
                  per-category profitability, budget variance and cost impact reports."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Bank account commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Import a legacy pipe-delimited expenditure file
    Import {
        /// Expenditure file (id|amount|category|date|method|vendor)
        file: PathBuf,
        /// Category file to import first (id|name|limit)
        #[arg(short, long)]
        categories: Option<PathBuf>,
        /// Treat every amount as an expense
        #[arg(long)]
        as_expenses: bool,
    },

    /// Financial reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize data files and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Import {
            file,
            categories,
            as_expenses,
        }) => {
            handle_import_command(&storage, &file, categories.as_deref(), as_expenses)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::History { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing cashflow at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  cashflow category add CEM Cement --limit 5000");
            println!("  cashflow transaction add -- -250.50 --category CEM --vendor \"Ghacem Depot\"");
            println!("  cashflow report cash-flow");
        }
        Some(Commands::Config) => {
            println!("cashflow Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Forecast months: {}", settings.forecast_months);
            if let Some(org) = &settings.organization_name {
                println!("  Organization:    {}", org);
            }
            if !paths.is_initialized() {
                println!();
                println!("Not initialized yet. Run 'cashflow init'.");
            }
        }
        None => {
            println!("cashflow - cash flow and expenditure analysis");
            println!();
            println!("Run 'cashflow --help' for usage information.");
        }
    }

    Ok(())
}
