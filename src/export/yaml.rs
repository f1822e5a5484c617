//! YAML Export functionality
//!
//! Exports the complete data set to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{CashflowError, CashflowResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full data set to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> CashflowResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# cashflow-cli Full Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # {} transactions, {} categories, {} bank accounts\n\n",
        export.exported_at,
        export.app_version,
        export.metadata.transaction_count,
        export.metadata.category_count,
        export.metadata.bank_account_count,
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| CashflowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export, validating it
pub fn import_from_yaml(yaml_str: &str) -> CashflowResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| CashflowError::Import(e.to_string()))?;

    export.validate().map_err(CashflowError::Import)?;

    Ok(export)
}
