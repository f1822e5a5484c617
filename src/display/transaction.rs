//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including the register view used by `transaction list` and `search`.

use crate::models::{Money, Transaction};

use super::report::{format_money, separator, truncate};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let date = txn
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "(no date)".to_string());

    let vendor = if txn.vendor.is_empty() {
        "(no vendor)"
    } else {
        txn.vendor.as_str()
    };

    format!(
        "{:<8} {:<10} {:<8} {:<20} {:>14}",
        truncate(&txn.display_reference(), 8),
        date,
        truncate(txn.category().unwrap_or("-"), 8),
        truncate(vendor, 20),
        format_money(txn.amount, symbol),
    )
}

/// Format a list of transactions as a register with a total line
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<10} {:<8} {:<20} {:>14}\n",
        "Ref", "Date", "Category", "Vendor", "Amount"
    ));
    output.push_str(&separator(64));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    let total: Money = transactions.iter().map(|t| t.amount).sum();
    output.push_str(&separator(64));
    output.push('\n');
    output.push_str(&format!(
        "{:<49}{:>15}\n",
        format!("{} transaction(s)", transactions.len()),
        format_money(total, symbol)
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_name: Option<&str>,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {} ({})\n", txn.display_reference(), txn.id));
    match txn.date {
        Some(date) => output.push_str(&format!("Date:        {}\n", date.format("%Y-%m-%d"))),
        None => output.push_str("Date:        (no date)\n"),
    }
    output.push_str(&format!("Amount:      {}\n", format_money(txn.amount, symbol)));
    output.push_str(&format!(
        "Type:        {}\n",
        if txn.is_expense() { "Expense" } else { "Income" }
    ));

    match (txn.category(), category_name) {
        (Some(code), Some(name)) => output.push_str(&format!("Category:    {} ({})\n", code, name)),
        (Some(code), None) => output.push_str(&format!("Category:    {}\n", code)),
        (None, _) => output.push_str("Category:    (uncategorized)\n"),
    }

    if !txn.payment_method.is_empty() {
        output.push_str(&format!("Paid by:     {}\n", txn.payment_method));
    }

    if !txn.vendor.is_empty() {
        output.push_str(&format!("Vendor:      {}\n", txn.vendor));
    }

    output
}
