//! Storage layer for cashflow-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit log every create goes through.

pub mod accounts;
pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use accounts::AccountRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::CashflowPaths;
use crate::error::CashflowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CashflowPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub accounts: AccountRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CashflowPaths) -> Result<Self, CashflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            accounts: AccountRepository::new(paths.accounts_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CashflowPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CashflowError> {
        self.transactions.load()?;
        self.categories.load()?;
        self.accounts.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CashflowError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.accounts.save()?;
        Ok(())
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), CashflowError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an import run in the audit log
    pub fn log_import(
        &self,
        entity_type: EntityType,
        source: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<(), CashflowError> {
        self.audit
            .log(&AuditEntry::import(entity_type, source, summary))
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
