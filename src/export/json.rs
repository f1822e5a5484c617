//! JSON Export functionality
//!
//! Exports the complete data set to JSON format with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CashflowError, CashflowResult};
use crate::models::{BankAccount, Category, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions in recorded order
    pub transactions: Vec<Transaction>,

    /// All categories
    pub categories: Vec<Category>,

    /// All bank accounts
    pub bank_accounts: Vec<BankAccount>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Transactions without a date
    pub undated_count: usize,

    /// Total number of categories
    pub category_count: usize,

    /// Total number of bank accounts
    pub bank_account_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> CashflowResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let bank_accounts = storage.accounts.get_all()?;

        let dates = || transactions.iter().filter_map(|t| t.date);

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            undated_count: transactions.iter().filter(|t| t.date.is_none()).count(),
            category_count: categories.len(),
            bank_account_count: bank_accounts.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            categories,
            bank_accounts,
            metadata,
        })
    }

    /// Validate the export structure
    ///
    /// Transactions may name categories that were never defined (legacy
    /// imports do), so only account links and references are checked.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let txn_ids: HashSet<_> = self.transactions.iter().map(|t| t.id).collect();

        for account in &self.bank_accounts {
            for txn_id in &account.transaction_ids {
                if !txn_ids.contains(txn_id) {
                    return Err(format!(
                        "Bank account {} references unknown transaction {}",
                        account.id, txn_id
                    ));
                }
            }
        }

        let mut references = HashSet::new();
        for txn in &self.transactions {
            if !txn.reference.is_empty() && !references.insert(txn.reference.as_str()) {
                return Err(format!("Duplicate transaction reference {}", txn.reference));
            }
        }

        Ok(())
    }
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> CashflowResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export, validating it
pub fn import_from_json(json_str: &str) -> CashflowResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| CashflowError::Import(e.to_string()))?;

    export.validate().map_err(CashflowError::Import)?;

    Ok(export)
}
