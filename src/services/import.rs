//! Legacy file import service
//!
//! Reads the pipe-delimited files written by the earlier expenditure tracker:
//!
//! - expenditures: `id|amount|categoryId|date|paymentMethod|vendor`
//! - categories:   `id|name|budgetLimit`
//!
//! Neither file has a header row. Rows whose amount cannot be read are
//! rejected; a bad date or an empty category is kept as "absent" so the
//! record still counts towards the totals that do not need it.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::audit::EntityType;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Category, Money, Transaction};
use crate::storage::Storage;

use super::transaction::{reference_number, REFERENCE_PREFIX};

/// Date format used by the legacy files
pub const LEGACY_DATE_FORMAT: &str = "%Y-%m-%d";

/// How legacy amounts should be read
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyImportOptions {
    /// Treat every amount as an expense regardless of its written sign
    ///
    /// The old tracker stored expenditures as positive numbers.
    pub as_expenses: bool,
}

/// A parsed expenditure row before import
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpenditure {
    /// Legacy reference (e.g. "EXP3"); empty when the row had none
    pub reference: String,
    /// Signed amount
    pub amount: Money,
    /// Category code, `None` if the column was empty
    pub category: Option<String>,
    /// Date, `None` if the column was empty or unreadable
    pub date: Option<NaiveDate>,
    /// Payment method
    pub payment_method: String,
    /// Vendor
    pub vendor: String,
    /// Line in the source file (1-based)
    pub line: usize,
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of records imported
    pub imported: usize,
    /// Number of rows skipped because their reference already exists
    pub duplicates_skipped: usize,
    /// Number of rows that could not be read
    pub rejected: usize,
    /// Error messages by line
    pub error_messages: Vec<(usize, String)>,
}

impl ImportResult {
    /// One-line summary used for output and the audit log
    pub fn summary(&self) -> String {
        format!(
            "{} imported, {} duplicates skipped, {} rejected",
            self.imported, self.duplicates_skipped, self.rejected
        )
    }
}

/// Service for importing legacy data files
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse a legacy expenditure file into rows
    pub fn parse_expenditures<R: Read>(
        &self,
        reader: R,
        options: LegacyImportOptions,
    ) -> Vec<Result<ParsedExpenditure, (usize, String)>> {
        let mut reader = legacy_reader(reader);
        let mut results = Vec::new();

        for (idx, record) in reader.records().enumerate() {
            let line = idx + 1;
            let result = match record {
                Ok(record) => parse_expenditure(&record, line, options),
                Err(e) => Err(format!("Error reading record: {}", e)),
            };
            results.push(result.map_err(|msg| (line, msg)));
        }

        results
    }

    /// Import expenditures from a reader
    pub fn import_expenditures<R: Read>(
        &self,
        reader: R,
        source: &str,
        options: LegacyImportOptions,
    ) -> CashflowResult<ImportResult> {
        let existing = self.storage.transactions.get_all()?;
        let mut seen: HashSet<String> = existing.iter().map(|t| t.reference.clone()).collect();
        let mut next_number = existing
            .iter()
            .filter_map(|t| reference_number(&t.reference))
            .max()
            .unwrap_or(0);

        let mut result = ImportResult::default();

        for parsed in self.parse_expenditures(reader, options) {
            let parsed = match parsed {
                Ok(parsed) => parsed,
                Err((line, msg)) => {
                    warn!(line, error = %msg, "rejected legacy row");
                    result.rejected += 1;
                    result.error_messages.push((line, msg));
                    continue;
                }
            };

            let reference = if parsed.reference.is_empty() {
                let Some(number) = next_number.checked_add(1) else {
                    let msg = format!("No {} reference number left to assign", REFERENCE_PREFIX);
                    warn!(line = parsed.line, "{}", msg);
                    result.rejected += 1;
                    result.error_messages.push((parsed.line, msg));
                    continue;
                };
                next_number = number;
                format!("{}{}", REFERENCE_PREFIX, next_number)
            } else {
                parsed.reference.clone()
            };

            if !seen.insert(reference.clone()) {
                debug!(line = parsed.line, reference = %reference, "duplicate reference skipped");
                result.duplicates_skipped += 1;
                continue;
            }

            if let Some(n) = reference_number(&reference) {
                next_number = next_number.max(n);
            }

            let txn = Transaction::new(parsed.amount, parsed.date, parsed.category)
                .with_vendor(parsed.vendor, parsed.payment_method)
                .with_reference(reference);

            self.storage.transactions.add(txn)?;
            result.imported += 1;
        }

        if result.imported > 0 {
            self.storage.transactions.save()?;
        }

        self.storage
            .log_import(EntityType::Transaction, source, result.summary())?;

        info!(source, imported = result.imported, rejected = result.rejected, "expenditure import finished");
        Ok(result)
    }

    /// Import expenditures from a file on disk
    pub fn import_expenditure_file(
        &self,
        path: &Path,
        options: LegacyImportOptions,
    ) -> CashflowResult<ImportResult> {
        let file = open(path)?;
        self.import_expenditures(file, &path.display().to_string(), options)
    }

    /// Import categories from a reader; existing codes are left unchanged
    pub fn import_categories<R: Read>(&self, reader: R, source: &str) -> CashflowResult<ImportResult> {
        let mut reader = legacy_reader(reader);
        let mut result = ImportResult::default();

        for (idx, record) in reader.records().enumerate() {
            let line = idx + 1;
            let category = record
                .map_err(|e| format!("Error reading record: {}", e))
                .and_then(|record| parse_category(&record));

            let category = match category {
                Ok(category) => category,
                Err(msg) => {
                    warn!(line, error = %msg, "rejected legacy category");
                    result.rejected += 1;
                    result.error_messages.push((line, msg));
                    continue;
                }
            };

            if self.storage.categories.contains(&category.code)? {
                result.duplicates_skipped += 1;
                continue;
            }

            self.storage.categories.upsert(category)?;
            result.imported += 1;
        }

        if result.imported > 0 {
            self.storage.categories.save()?;
        }

        self.storage
            .log_import(EntityType::Category, source, result.summary())?;

        Ok(result)
    }

    /// Import categories from a file on disk
    pub fn import_category_file(&self, path: &Path) -> CashflowResult<ImportResult> {
        let file = open(path)?;
        self.import_categories(file, &path.display().to_string())
    }
}

fn open(path: &Path) -> CashflowResult<File> {
    File::open(path)
        .map_err(|e| CashflowError::Import(format!("Failed to open {}: {}", path.display(), e)))
}

fn legacy_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader)
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn parse_expenditure(
    record: &StringRecord,
    line: usize,
    options: LegacyImportOptions,
) -> Result<ParsedExpenditure, String> {
    let amount_str = field(record, 1);
    let mut amount = Money::parse(amount_str)
        .map_err(|_| format!("Could not parse amount: '{}'", amount_str))?;

    if options.as_expenses {
        amount = -amount.abs();
    }

    let category = Some(field(record, 2))
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let date_str = field(record, 3);
    let date = NaiveDate::parse_from_str(date_str, LEGACY_DATE_FORMAT).ok();
    if date.is_none() && !date_str.is_empty() {
        debug!(line, date = date_str, "unreadable date, importing as undated");
    }

    Ok(ParsedExpenditure {
        reference: field(record, 0).to_string(),
        amount,
        category,
        date,
        payment_method: field(record, 4).to_string(),
        vendor: field(record, 5).to_string(),
        line,
    })
}

fn parse_category(record: &StringRecord) -> Result<Category, String> {
    let code = field(record, 0);
    let limit_str = field(record, 2);
    let limit = if limit_str.is_empty() {
        Money::zero()
    } else {
        Money::parse(limit_str).map_err(|_| format!("Could not parse budget limit: '{}'", limit_str))?
    };

    let name = match field(record, 1) {
        "" => code,
        name => name,
    };

    let category = Category::new(code, name, limit);
    category.validate().map_err(|e| e.to_string())?;
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::CashflowPaths;
    use tempfile::TempDir;

    const LEGACY: &str = "\
EXP1|250.5|CEM|2025-01-15|Cash|Ghacem Depot
EXP2|1200.0|LAB|2025-02-01|MoMo|Kofi
EXP3|abc|CEM|2025-02-03|Cash|Depot
EXP4|80.0||not-a-date|Cash|
EXP1|99.0|CEM|2025-03-01|Cash|Repeat
";

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_parse_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let rows = service.parse_expenditures(LEGACY.as_bytes(), LegacyImportOptions::default());
        assert_eq!(rows.len(), 5);

        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.reference, "EXP1");
        assert_eq!(first.amount, Money::from_cents(25050));
        assert_eq!(first.category.as_deref(), Some("CEM"));
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(first.vendor, "Ghacem Depot");

        let (line, msg) = rows[2].as_ref().unwrap_err();
        assert_eq!(*line, 3);
        assert!(msg.contains("abc"));

        let fourth = rows[3].as_ref().unwrap();
        assert!(fourth.category.is_none());
        assert!(fourth.date.is_none());
        assert_eq!(fourth.vendor, "");
    }

    #[test]
    fn test_import_as_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let result = service
            .import_expenditures(
                LEGACY.as_bytes(),
                "expenditures.txt",
                LegacyImportOptions { as_expenses: true },
            )
            .unwrap();

        assert_eq!(result.imported, 3);
        assert_eq!(result.rejected, 1);
        assert_eq!(result.duplicates_skipped, 1);

        let all = storage.transactions.get_all().unwrap();
        assert!(all.iter().all(|t| t.is_expense()));
        assert_eq!(all[1].amount, Money::from_units(-1200));

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Import);
        assert_eq!(
            audit[0].summary.as_deref(),
            Some("3 imported, 1 duplicates skipped, 1 rejected")
        );
    }

    #[test]
    fn test_import_skips_existing_references() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);
        let options = LegacyImportOptions::default();

        service
            .import_expenditures(LEGACY.as_bytes(), "a.txt", options)
            .unwrap();
        let again = service
            .import_expenditures(LEGACY.as_bytes(), "a.txt", options)
            .unwrap();

        assert_eq!(again.imported, 0);
        assert_eq!(again.duplicates_skipped, 4);
        assert_eq!(storage.transactions.count().unwrap(), 3);
    }

    #[test]
    fn test_missing_reference_gets_next_number() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let input = "EXP7|-10.00|CEM|2025-01-01|Cash|A\n|-5.00|CEM|2025-01-02|Cash|B\n";
        service
            .import_expenditures(input.as_bytes(), "b.txt", LegacyImportOptions::default())
            .unwrap();

        let refs: Vec<String> = storage
            .transactions
            .get_all()
            .unwrap()
            .into_iter()
            .map(|t| t.reference)
            .collect();
        assert_eq!(refs, vec!["EXP7", "EXP8"]);
    }

    #[test]
    fn test_import_categories() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .categories
            .upsert(Category::new("LAB", "Labour", Money::zero()))
            .unwrap();
        let service = ImportService::new(&storage);

        let input = "CEM|Cement|5000.0\nLAB|Labour again|10.0\nBAD|Bad|lots\nSTL||\n";
        let result = service.import_categories(input.as_bytes(), "categories.txt").unwrap();

        assert_eq!(result.imported, 2);
        assert_eq!(result.duplicates_skipped, 1);
        assert_eq!(result.rejected, 1);

        let cement = storage.categories.get("CEM").unwrap().unwrap();
        assert_eq!(cement.budget_limit, Money::from_units(5000));
        assert_eq!(storage.categories.get("LAB").unwrap().unwrap().name, "Labour");
        assert_eq!(storage.categories.get("STL").unwrap().unwrap().name, "STL");
    }

    #[test]
    fn test_missing_file() {
        let (temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let err = service
            .import_expenditure_file(&temp_dir.path().join("nope.txt"), LegacyImportOptions::default())
            .unwrap_err();
        assert!(matches!(err, CashflowError::Import(_)));
    }

    #[test]
    fn test_exhausted_reference_numbers_reject_row() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let data = "EXP18446744073709551615|10.0|||Cash|\n|20.0|||Cash|\n";
        let result = service
            .import_expenditures(data.as_bytes(), "max.txt", LegacyImportOptions::default())
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.rejected, 1);
        assert_eq!(result.error_messages[0].0, 2);
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }
}
