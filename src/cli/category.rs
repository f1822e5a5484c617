//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_category_list;
use crate::error::{CashflowError, CashflowResult};
use crate::models::Money;
use crate::services::CategoryService;
use crate::storage::Storage;

use super::parse_amount;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category
    #[command(alias = "create")]
    Add {
        /// Category code (e.g., "CEM")
        code: String,
        /// Descriptive name (defaults to the code)
        name: Option<String>,
        /// Budget limit (e.g., "5000" or "5000.00")
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Show one category
    Show {
        /// Category code
        code: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> CashflowResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            println!("{}", format_category_list(&categories, &settings.currency_symbol));
        }

        CategoryCommands::Add { code, name, limit } => {
            let limit = match limit {
                Some(limit) => parse_amount(&limit, "budget limit")?,
                None => Money::zero(),
            };

            let category = service.create(&code, name.as_deref().unwrap_or(""), limit)?;
            println!("Category added: {}", category.code);
            println!("  Name:  {}", category.name);
            println!(
                "  Limit: {}",
                category.budget_limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        CategoryCommands::Show { code } => {
            let category = service
                .get(&code)?
                .ok_or_else(|| CashflowError::category_not_found(&code))?;
            println!("{}", category);
        }
    }

    Ok(())
}
