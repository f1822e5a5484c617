//! CLI command handler for legacy file import

use std::path::Path;

use crate::error::{CashflowError, CashflowResult};
use crate::services::{ImportResult, ImportService, LegacyImportOptions};
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    file: &Path,
    categories: Option<&Path>,
    as_expenses: bool,
) -> CashflowResult<()> {
    let service = ImportService::new(storage);

    // Categories first so imported expenditures find their codes
    if let Some(category_file) = categories {
        if !category_file.exists() {
            return Err(CashflowError::Import(format!(
                "File not found: {}",
                category_file.display()
            )));
        }
        let result = service.import_category_file(category_file)?;
        print_result("Categories", category_file, &result);
    }

    if !file.exists() {
        return Err(CashflowError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let result = service.import_expenditure_file(file, LegacyImportOptions { as_expenses })?;
    print_result("Expenditures", file, &result);

    Ok(())
}

fn print_result(label: &str, path: &Path, result: &ImportResult) {
    println!("{} from {}", label, path.display());
    println!("{}", "=".repeat(40));
    println!("  Imported:           {}", result.imported);
    println!("  Duplicates (skip):  {}", result.duplicates_skipped);
    println!("  Rejected:           {}", result.rejected);

    for (line, msg) in &result.error_messages {
        println!("    line {}: {}", line, msg);
    }
    println!();
}
