//! History store contract and JSON file implementation.

use chrono::{DateTime, Utc};
use report_core::ConsolidatedRow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the history store.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to access history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("History file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// One stored run: when it happened, which file it came from, and the
/// consolidated rows it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Store-assigned id, unique within one history file.
    pub id: u64,
    /// When the run was appended.
    pub created_at: DateTime<Utc>,
    /// Name of the source report file.
    pub source_filename: String,
    /// The consolidated output rows.
    pub rows: Vec<ConsolidatedRow>,
}

/// Repository interface for past runs. The pipeline itself never
/// depends on this; only hosts do.
pub trait HistoryStore {
    /// Append a run; returns the assigned id.
    fn append(
        &self,
        source_filename: &str,
        rows: Vec<ConsolidatedRow>,
    ) -> Result<u64, HistoryError>;

    /// All stored runs, oldest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Remove one run by id; returns whether it existed.
    fn remove(&self, id: u64) -> Result<bool, HistoryError>;

    /// Remove all stored runs.
    fn clear(&self) -> Result<(), HistoryError>;
}

/// History store backed by one JSON file. A missing file reads as an
/// empty history; every mutation rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(
        &self,
        source_filename: &str,
        rows: Vec<ConsolidatedRow>,
    ) -> Result<u64, HistoryError> {
        let mut entries = self.load()?;
        let id = entries.iter().map(|e| e.id).max().map_or(1, |m| m + 1);

        entries.push(HistoryEntry {
            id,
            created_at: Utc::now(),
            source_filename: source_filename.to_string(),
            rows,
        });
        self.save(&entries)?;

        log::debug!("appended run {} for `{}`", id, source_filename);
        Ok(id)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.load()
    }

    fn remove(&self, id: u64) -> Result<bool, HistoryError> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.save(&[])
    }
}
