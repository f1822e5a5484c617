//! Transaction service
//!
//! Provides business logic for recording expenditures and income: input
//! validation, category checks, reference numbering, and audit logging.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Category, Money, Transaction};
use crate::storage::Storage;

use super::account::AccountService;

/// Prefix of the sequential reference codes given to new transactions
pub const REFERENCE_PREFIX: &str = "EXP";

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    /// Signed amount (negative for expenses)
    pub amount: Money,
    /// Transaction date; left empty for undated records
    pub date: Option<NaiveDate>,
    /// Category code
    pub category: Option<String>,
    /// Create the category (zero limit) when it does not exist yet
    pub create_category: bool,
    /// Payment method (Cash, Bank, MoMo, ...)
    pub payment_method: Option<String>,
    /// Vendor or payer
    pub vendor: Option<String>,
    /// Bank account to link the transaction to
    pub account: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn add(&self, input: CreateTransactionInput) -> CashflowResult<Transaction> {
        if input.amount.is_zero() {
            return Err(CashflowError::Validation(
                "Transaction amount cannot be zero".into(),
            ));
        }

        let category = match input.category.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => {
                self.ensure_category(code, input.create_category)?;
                Some(code.to_string())
            }
            _ => None,
        };

        let accounts = AccountService::new(self.storage);
        let account = input
            .account
            .as_deref()
            .map(|identifier| accounts.resolve(identifier))
            .transpose()?;

        let txn = Transaction::new(input.amount, input.date, category)
            .with_vendor(
                input.vendor.unwrap_or_default().trim(),
                input.payment_method.unwrap_or_default().trim(),
            )
            .with_reference(self.next_reference()?);

        self.storage.transactions.add(txn.clone())?;
        self.storage.transactions.save()?;

        // Only a persisted transaction may be referenced by an account
        if let Some(account) = account {
            accounts.attach(account, txn.id)?;
        }

        self.storage.log_create(
            EntityType::Transaction,
            txn.reference.clone(),
            Some(txn.vendor.clone()).filter(|v| !v.is_empty()),
            &txn,
        )?;

        info!(reference = %txn.reference, amount = %txn.amount, "transaction recorded");
        Ok(txn)
    }

    /// Check that a category exists, optionally creating it
    fn ensure_category(&self, code: &str, create: bool) -> CashflowResult<()> {
        if self.storage.categories.contains(code)? {
            return Ok(());
        }

        if !create {
            return Err(CashflowError::category_not_found(code));
        }

        let category = Category::new(code, code, Money::zero());
        category
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;
        self.storage.log_create(
            EntityType::Category,
            category.code.clone(),
            Some(category.name.clone()),
            &category,
        )?;

        debug!(code, "category created on the fly");
        Ok(())
    }

    /// Next free `EXP<n>` reference
    pub fn next_reference(&self) -> CashflowResult<String> {
        let highest = self
            .storage
            .transactions
            .get_all()?
            .iter()
            .filter_map(|t| reference_number(&t.reference))
            .max()
            .unwrap_or(0);

        let next = highest.checked_add(1).ok_or_else(|| {
            CashflowError::Validation(format!(
                "No {} reference number left after {}{}",
                REFERENCE_PREFIX, REFERENCE_PREFIX, highest
            ))
        })?;

        Ok(format!("{}{}", REFERENCE_PREFIX, next))
    }

    /// List transactions, most recent `limit` in recorded order
    pub fn list(&self, limit: Option<usize>) -> CashflowResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        Ok(match limit {
            Some(limit) => {
                let start = all.len().saturating_sub(limit);
                all[start..].to_vec()
            }
            None => all,
        })
    }

    /// Search by category code or vendor (case-insensitive substring)
    pub fn search(&self, keyword: &str) -> CashflowResult<Vec<Transaction>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(CashflowError::Validation(
                "Search keyword cannot be empty".into(),
            ));
        }
        self.storage.transactions.search(keyword)
    }

    /// Signed total of every recorded amount
    pub fn total(&self) -> CashflowResult<Money> {
        self.storage.transactions.total_amount()
    }

    /// Count transactions
    pub fn count(&self) -> CashflowResult<usize> {
        self.storage.transactions.count()
    }
}

/// Numeric part of an `EXP<n>` reference
pub(crate) fn reference_number(reference: &str) -> Option<u64> {
    reference
        .strip_prefix(REFERENCE_PREFIX)
        .and_then(|n| n.parse().ok())
}
