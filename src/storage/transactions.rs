//! Transaction repository for JSON storage
//!
//! Keeps transactions in the order they were recorded and hands out cloned
//! snapshots, so reports never observe a list that is being modified.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{Money, Transaction};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.transactions;

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Snapshot of all transactions in recorded order
    pub fn get_all(&self) -> Result<Vec<Transaction>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Append a transaction
    pub fn add(&self, txn: Transaction) -> Result<(), CashflowError> {
        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(txn);
        Ok(())
    }

    /// Find a transaction by reference code
    pub fn find_by_reference(&self, reference: &str) -> Result<Option<Transaction>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|t| t.reference == reference).cloned())
    }

    /// Transactions whose category code or vendor contains `keyword` (case-insensitive)
    pub fn search(&self, keyword: &str) -> Result<Vec<Transaction>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .filter(|t| t.matches_keyword(keyword))
            .cloned()
            .collect())
    }

    /// Signed sum of every transaction amount
    pub fn total_amount(&self) -> Result<Money, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().map(|t| t.amount).sum())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn txn(cents: i64, category: &str, vendor: &str) -> Transaction {
        Transaction::dated(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            category,
        )
        .with_vendor(vendor, "Cash")
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let (temp_dir, repo) = create_test_repo();

        let first = txn(-100, "CEM", "Depot").with_reference("EXP1");
        let second = txn(500, "SAL", "Client").with_reference("EXP2");
        repo.add(first.clone()).unwrap();
        repo.add(second.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(txn(-100, "CEM", "Depot")).unwrap();

        let snapshot = repo.get_all().unwrap();
        repo.add(txn(-200, "LAB", "Kofi")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_search_and_total() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(txn(-100, "CEM", "Ghacem Depot")).unwrap();
        repo.add(txn(-200, "LAB", "Kofi")).unwrap();
        repo.add(txn(1000, "SAL", "Kofi Ventures")).unwrap();

        assert_eq!(repo.search("kofi").unwrap().len(), 2);
        assert_eq!(repo.search("cem").unwrap().len(), 1);
        assert!(repo.search("nothing").unwrap().is_empty());
        assert_eq!(repo.total_amount().unwrap().cents(), 700);
    }

    #[test]
    fn test_find_by_reference() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(txn(-100, "CEM", "Depot").with_reference("EXP7")).unwrap();

        assert!(repo.find_by_reference("EXP7").unwrap().is_some());
        assert!(repo.find_by_reference("EXP8").unwrap().is_none());
    }
}
