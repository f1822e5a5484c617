//! CSV Export functionality
//!
//! Exports transactions, categories, and bank account data to CSV format.

use std::io::Write;

use crate::error::{CashflowError, CashflowResult};
use crate::storage::Storage;

fn export_err(e: csv::Error) -> CashflowError {
    CashflowError::Export(e.to_string())
}

/// Export all transactions to CSV in recorded order
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> CashflowResult<()> {
    let categories = storage.categories.get_all()?;
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "Reference",
        "Date",
        "Category",
        "Category Name",
        "Amount",
        "Type",
        "Payment Method",
        "Vendor",
    ])
    .map_err(export_err)?;

    for txn in storage.transactions.get_all()? {
        let category_name = txn
            .category()
            .and_then(|code| categories.iter().find(|c| c.code == code))
            .map(|c| c.name.clone())
            .unwrap_or_default();

        let kind = if txn.is_expense() { "Expense" } else { "Income" };

        csv.write_record([
            txn.display_reference(),
            txn.date.map(|d| d.to_string()).unwrap_or_default(),
            txn.category().unwrap_or("").to_string(),
            category_name,
            format!("{:.2}", txn.amount.as_f64()),
            kind.to_string(),
            txn.payment_method.clone(),
            txn.vendor.clone(),
        ])
        .map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}

/// Export categories with their budget limits
pub fn export_categories_csv<W: Write>(storage: &Storage, writer: &mut W) -> CashflowResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Code", "Name", "Budget Limit"])
        .map_err(export_err)?;

    for category in storage.categories.get_all()? {
        csv.write_record([
            category.code.clone(),
            category.name.clone(),
            category.budget_limit.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}

/// Export bank accounts with their balances
pub fn export_accounts_csv<W: Write>(storage: &Storage, writer: &mut W) -> CashflowResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Bank", "Balance", "Linked Transactions"])
        .map_err(export_err)?;

    for account in storage.accounts.get_all()? {
        csv.write_record([
            account.id.to_string(),
            account.bank_name.clone(),
            account.balance.to_string(),
            account.transaction_ids.len().to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}
