//! Bank account display formatting

use crate::models::{BankAccount, Money};

use super::report::format_money;

/// Format bank accounts with balances as a table
pub fn format_account_list(accounts: &[BankAccount], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No bank accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.bank_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>14}  {:>6}\n",
        "ID",
        "Bank",
        "Balance",
        "Txns",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->14}  {:->6}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>14}  {:>6}\n",
            account.id.to_string(),
            account.bank_name,
            format_money(account.balance, symbol),
            account.transaction_ids.len(),
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>14}\n",
        "",
        "Total",
        format_money(total, symbol),
        name_width = name_width,
    ));

    output
}
