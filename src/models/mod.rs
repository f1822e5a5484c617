//! Core data models for cashflow-cli
//!
//! This module contains the records the analyses run over: transactions,
//! categories, bank accounts, and the calendar month keys used to bucket them.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use account::BankAccount;
pub use category::Category;
pub use ids::{AccountId, TransactionId};
pub use money::Money;
pub use period::MonthKey;
pub use transaction::Transaction;
