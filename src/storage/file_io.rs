//! JSON persistence for the ledger files
//!
//! `transactions.json`, `categories.json` and `accounts.json` are always
//! replaced whole: a snapshot is written next to the target and renamed over
//! it, so an interrupted save leaves the previous ledger intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CashflowError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> CashflowError {
    CashflowError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Sibling path the snapshot is staged in before the rename
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Load a ledger file, or its empty default when it has not been written yet
pub fn read_json<T, P>(path: P) -> Result<T, CashflowError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a ledger file with a new snapshot
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CashflowError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    let staged = staging_path(path);
    let file = File::create(&staged).map_err(|e| storage_error("create", &staged, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", path, e))?;
    writer
        .flush()
        .and_then(|()| writer.get_ref().sync_all())
        .map_err(|e| storage_error("flush", &staged, e))?;

    // Same directory, so the rename swaps the file in one step
    if let Err(e) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(storage_error("replace", path, e));
    }

    Ok(())
}
