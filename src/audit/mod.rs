//! Audit logging for cashflow-cli
//!
//! Every record the application creates (transactions, categories, bank
//! accounts) and every import run is appended to a line-delimited JSON log.
//! Entries are never rewritten.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
