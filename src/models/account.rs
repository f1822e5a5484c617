//! Bank account model
//!
//! Bank accounts are recorded alongside transactions and carry the IDs of
//! the transactions paid from them. No analysis reads them yet; they are
//! kept for a future reconciliation of balances against expenditures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// A bank or mobile-money account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier
    pub id: AccountId,

    /// Bank name (e.g., "GCB", "MTN MoMo")
    pub bank_name: String,

    /// Last known balance
    pub balance: Money,

    /// Transactions paid from or into this account
    #[serde(default)]
    pub transaction_ids: Vec<TransactionId>,

    /// When the account was recorded
    pub created_at: DateTime<Utc>,
}

impl BankAccount {
    /// Create a new bank account with a starting balance
    pub fn new(bank_name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            bank_name: bank_name.into(),
            balance,
            transaction_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Link a transaction to this account
    pub fn link_transaction(&mut self, id: TransactionId) {
        if !self.transaction_ids.contains(&id) {
            self.transaction_ids.push(id);
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.bank_name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.bank_name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.bank_name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bank_name, self.balance)
    }
}

/// Validation errors for bank accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bank name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Bank name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = BankAccount::new("GCB", Money::from_cents(500000));
        assert_eq!(account.bank_name, "GCB");
        assert_eq!(account.balance.cents(), 500000);
        assert!(account.transaction_ids.is_empty());
    }

    #[test]
    fn test_link_transaction_is_idempotent() {
        let mut account = BankAccount::new("GCB", Money::zero());
        let id = TransactionId::new();
        account.link_transaction(id);
        account.link_transaction(id);
        assert_eq!(account.transaction_ids, vec![id]);
    }

    #[test]
    fn test_validation() {
        let mut account = BankAccount::new("Valid", Money::zero());
        assert!(account.validate().is_ok());

        account.bank_name = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.bank_name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_display() {
        let account = BankAccount::new("MTN MoMo", Money::from_cents(1250));
        assert_eq!(account.to_string(), "MTN MoMo (12.50)");
    }
}
