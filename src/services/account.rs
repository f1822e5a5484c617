//! Bank account service

use tracing::info;

use crate::audit::EntityType;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{AccountId, BankAccount, Money, TransactionId};
use crate::storage::Storage;

/// Service for bank account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new bank account
    pub fn create(&self, bank_name: &str, balance: Money) -> CashflowResult<BankAccount> {
        let account = BankAccount::new(bank_name.trim(), balance);

        account
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::BankAccount,
            account.id.to_string(),
            Some(account.bank_name.clone()),
            &account,
        )?;

        info!(account = %account.id, bank = %account.bank_name, "bank account created");
        Ok(account)
    }

    /// Find an account by its ID string (full UUID or `bnk-` prefixed)
    pub fn find(&self, identifier: &str) -> CashflowResult<Option<BankAccount>> {
        let trimmed = identifier.trim();

        if let Ok(id) = trimmed.parse::<AccountId>() {
            return self.storage.accounts.get(id);
        }

        // Short display form: match on the prefix of the simple UUID
        let short = trimmed.strip_prefix("bnk-").unwrap_or(trimmed).to_lowercase();
        if short.is_empty() {
            return Ok(None);
        }

        let matches: Vec<BankAccount> = self
            .storage
            .accounts
            .get_all()?
            .into_iter()
            .filter(|a| a.id.as_uuid().simple().to_string().starts_with(&short))
            .collect();

        match matches.len() {
            1 => Ok(matches.into_iter().next()),
            _ => Ok(None),
        }
    }

    /// Find an account, failing with `NotFound` when there is no match
    pub fn resolve(&self, identifier: &str) -> CashflowResult<BankAccount> {
        self.find(identifier)?
            .ok_or_else(|| CashflowError::account_not_found(identifier))
    }

    /// Link a transaction to an account and persist the account
    pub fn link_transaction(
        &self,
        identifier: &str,
        txn_id: TransactionId,
    ) -> CashflowResult<BankAccount> {
        let account = self.resolve(identifier)?;
        self.attach(account, txn_id)
    }

    /// Link a transaction to an already resolved account
    pub(crate) fn attach(
        &self,
        mut account: BankAccount,
        txn_id: TransactionId,
    ) -> CashflowResult<BankAccount> {
        account.link_transaction(txn_id);
        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        Ok(account)
    }

    /// List all bank accounts in the order they were recorded
    pub fn list(&self) -> CashflowResult<Vec<BankAccount>> {
        self.storage.accounts.get_all()
    }
}
