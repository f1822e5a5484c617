//! Category model
//!
//! A category is identified by a short, user-chosen code (e.g. "CEM") which
//! transactions reference directly, and carries a spending limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category code, used as the label on transactions
    pub code: String,

    /// Descriptive name
    pub name: String,

    /// Budget limit for this category
    #[serde(default)]
    pub budget_limit: Money,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(code: impl Into<String>, name: impl Into<String>, budget_limit: Money) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            budget_limit,
            created_at: Utc::now(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.code.trim().is_empty() {
            return Err(CategoryValidationError::EmptyCode);
        }

        if self.code.len() > 20 {
            return Err(CategoryValidationError::CodeTooLong(self.code.len()));
        }

        if self.budget_limit.is_negative() {
            return Err(CategoryValidationError::NegativeLimit);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | Limit: {}", self.code, self.name, self.budget_limit)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyCode,
    CodeTooLong(usize),
    NegativeLimit,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "Category code cannot be empty"),
            Self::CodeTooLong(len) => {
                write!(f, "Category code too long ({} chars, max 20)", len)
            }
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
