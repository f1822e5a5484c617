//! Category service
//!
//! Categories are identified by a short user-chosen code (e.g. "CEM") and
//! carry an informational budget limit.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Category, Money};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, code: &str, name: &str, budget_limit: Money) -> CashflowResult<Category> {
        let code = code.trim();
        let name = name.trim();

        if self.storage.categories.contains(code)? {
            return Err(CashflowError::Duplicate {
                entity_type: "Category",
                identifier: code.to_string(),
            });
        }

        let name = if name.is_empty() { code } else { name };
        let category = Category::new(code, name, budget_limit);

        category
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.code.clone(),
            Some(category.name.clone()),
            &category,
        )?;

        info!(code = %category.code, "category created");
        Ok(category)
    }

    /// Get a category by code
    pub fn get(&self, code: &str) -> CashflowResult<Option<Category>> {
        self.storage.categories.get(code.trim())
    }

    /// List all categories ordered by code
    pub fn list(&self) -> CashflowResult<Vec<Category>> {
        self.storage.categories.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service
            .create(" CEM ", "Cement", Money::from_units(5000))
            .unwrap();
        assert_eq!(category.code, "CEM");
        assert_eq!(category.name, "Cement");

        assert!(service.get("CEM").unwrap().is_some());
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_name_defaults_to_code() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service.create("LAB", "  ", Money::zero()).unwrap();
        assert_eq!(category.name, "LAB");
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("CEM", "Cement", Money::zero()).unwrap();
        let result = service.create("CEM", "Other", Money::zero());
        assert!(matches!(result, Err(CashflowError::Duplicate { .. })));
    }

    #[test]
    fn test_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let result = service.create("", "Nothing", Money::zero());
        assert!(result.unwrap_err().is_validation());

        let result = service.create("NEG", "Negative", Money::from_cents(-1));
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_list_sorted_by_code() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("SAL", "Sales", Money::zero()).unwrap();
        service.create("CEM", "Cement", Money::zero()).unwrap();

        let codes: Vec<String> = service.list().unwrap().into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["CEM", "SAL"]);
    }
}
