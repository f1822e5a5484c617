//! Storage initialization
//!
//! Handles first-run setup: directories, settings and empty data files.

use crate::config::paths::CashflowPaths;
use crate::config::settings::Settings;
use crate::error::CashflowError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &CashflowPaths) -> Result<Settings, CashflowError> {
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    let empty_files = [
        (paths.transactions_file(), "transactions"),
        (paths.categories_file(), "categories"),
        (paths.accounts_file(), "accounts"),
    ];

    for (path, key) in empty_files {
        if !path.exists() {
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), serde_json::Value::Array(Vec::new()));
            write_json_atomic(&path, &serde_json::Value::Object(map))?;
        }
    }

    Ok(settings)
}
