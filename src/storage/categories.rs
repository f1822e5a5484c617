//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. Categories are
//! keyed by their code.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::Category;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.code.clone(), category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = CategoryData {
            categories: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by code
    pub fn get(&self, code: &str) -> Result<Option<Category>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(code).cloned())
    }

    /// Check whether a category code is known
    pub fn contains(&self, code: &str) -> Result<bool, CashflowError> {
        Ok(self.get(code)?.is_some())
    }

    /// All categories ordered by code
    pub fn get_all(&self) -> Result<Vec<Category>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().cloned().collect())
    }

    /// Insert or replace a category
    pub fn upsert(&self, category: Category) -> Result<(), CashflowError> {
        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(category.code.clone(), category);
        Ok(())
    }
}
