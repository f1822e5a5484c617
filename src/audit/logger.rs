//! Append-only history of ledger changes
//!
//! `audit.log` holds one JSON object per line. Recording a transaction,
//! category or bank account appends one line; a legacy import appends a
//! single summary line. Nothing ever rewrites earlier lines.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{CashflowError, CashflowResult};

use super::entry::AuditEntry;

fn io_error(action: &str, err: impl std::fmt::Display) -> CashflowError {
    CashflowError::Io(format!("Failed to {} audit log: {}", action, err))
}

/// Writer and reader for `audit.log`
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> CashflowResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append entries in order; the file is only opened when there is something to write
    pub fn log_batch(&self, entries: &[AuditEntry]) -> CashflowResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| io_error("open", e))?;
        let mut writer = BufWriter::new(file);

        for entry in entries {
            serde_json::to_writer(&mut writer, entry).map_err(|e| {
                CashflowError::Json(format!("Failed to serialize audit entry: {}", e))
            })?;
            writer.write_all(b"\n").map_err(|e| io_error("write", e))?;
        }

        writer.flush().map_err(|e| io_error("flush", e))
    }

    /// Every entry, oldest first
    ///
    /// Blank lines are ignored; a line that is not an entry is an error
    /// naming its line number.
    pub fn read_all(&self) -> CashflowResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| io_error("open", e))?;

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(serde_json::from_str(&line).map_err(|e| {
                    CashflowError::Json(format!("Bad audit entry on line {}: {}", idx + 1, e))
                })),
                Err(e) => Some(Err(io_error("read", e))),
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> CashflowResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
