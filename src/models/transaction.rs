//! Transaction model
//!
//! A transaction is a single expenditure or income record. The sign of the
//! amount is the only thing that distinguishes the two: negative amounts are
//! expenses, zero and positive amounts are income.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Human-facing reference code (e.g. "EXP12"), carried over on import
    #[serde(default)]
    pub reference: String,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Transaction date; undated records are left out of monthly analyses
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Category code; uncategorized records are left out of per-category analyses
    #[serde(default)]
    pub category: Option<String>,

    /// How the transaction was paid (Cash, Bank, MoMo, ...)
    #[serde(default)]
    pub payment_method: String,

    /// Vendor or payer name
    #[serde(default)]
    pub vendor: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with only the analytic fields set
    pub fn new(amount: Money, date: Option<NaiveDate>, category: Option<String>) -> Self {
        Self {
            id: TransactionId::new(),
            reference: String::new(),
            amount,
            date,
            category,
            payment_method: String::new(),
            vendor: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a dated, categorized transaction
    pub fn dated(amount: Money, date: NaiveDate, category: impl Into<String>) -> Self {
        Self::new(amount, Some(date), Some(category.into()))
    }

    /// Set the vendor and payment method
    pub fn with_vendor(mut self, vendor: impl Into<String>, payment_method: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self.payment_method = payment_method.into();
        self
    }

    /// Set the reference code
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Check if this is income (zero or positive amount)
    pub fn is_income(&self) -> bool {
        !self.is_expense()
    }

    /// Category code if the transaction has one
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Case-insensitive match on category code or vendor
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.category()
            .is_some_and(|c| c.to_lowercase().contains(&keyword))
            || self.vendor.to_lowercase().contains(&keyword)
    }

    /// Reference code, falling back to the short ID
    pub fn display_reference(&self) -> String {
        if self.reference.is_empty() {
            self.id.to_string()
        } else {
            self.reference.clone()
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "(no date)".into());
        write!(
            f,
            "{} | {} | Cat: {} | {} | {} | Vendor: {}",
            self.display_reference(),
            self.amount,
            self.category().unwrap_or("-"),
            date,
            self.payment_method,
            self.vendor
        )
    }
}
