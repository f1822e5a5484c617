//! Bank account repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{AccountId, BankAccount};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<BankAccount>,
}

/// Repository for bank account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<Vec<BankAccount>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.accounts;

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = AccountData {
            accounts: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Snapshot of all accounts
    pub fn get_all(&self) -> Result<Vec<BankAccount>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<BankAccount>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|a| a.id == id).cloned())
    }

    /// Insert or replace an account
    pub fn upsert(&self, account: BankAccount) -> Result<(), CashflowError> {
        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => *existing = account,
            None => data.push(account),
        }
        Ok(())
    }
}
