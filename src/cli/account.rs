//! Bank account CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_account_list;
use crate::error::CashflowResult;
use crate::models::Money;
use crate::services::AccountService;
use crate::storage::Storage;

use super::parse_amount;

/// Bank account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List bank accounts
    List,

    /// Record a bank account
    #[command(alias = "create")]
    Add {
        /// Bank name (e.g., "GCB", "MTN MoMo")
        bank: String,
        /// Current balance
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> CashflowResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts, &settings.currency_symbol));
        }

        AccountCommands::Add { bank, balance } => {
            let balance = match balance {
                Some(balance) => parse_amount(&balance, "balance")?,
                None => Money::zero(),
            };

            let account = service.create(&bank, balance)?;
            println!("Bank account added: {}", account.bank_name);
            println!("  ID:      {}", account.id);
            println!(
                "  Balance: {}",
                account.balance.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
