//! Calculation history.
//!
//! Every successful evaluation can be stored as a `(formula, result)` pair.
//! Stores never retry: a failure is logged and handed back to the caller,
//! which decides whether it matters.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{error, info, warn};

/// Records shown by a bare `calcdeck` invocation
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot access history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("history file {path} is malformed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// A saved calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: u64,
    pub formula: String,
    pub result: String,
    /// Unix epoch millis
    pub created_at: u64,
}

impl StoredRecord {
    pub fn display(&self) -> String {
        format!("#{} {} = {}", self.id, self.formula, self.result)
    }
}

/// Persistence collaborator for evaluated expressions
pub trait HistoryStore {
    fn save(&mut self, formula: &str, result: &str) -> HistoryResult<StoredRecord>;

    /// Up to `limit` records, most recent first
    fn list_recent(&self, limit: usize) -> HistoryResult<Vec<StoredRecord>>;
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn append_record(records: &mut Vec<StoredRecord>, formula: &str, result: &str) -> StoredRecord {
    let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let record = StoredRecord {
        id,
        formula: formula.to_string(),
        result: result.to_string(),
        created_at: current_timestamp(),
    };
    records.push(record.clone());
    record
}

fn most_recent(records: &[StoredRecord], limit: usize) -> Vec<StoredRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

// ============================================================================
// In-memory store
// ============================================================================

/// Store that lives as long as the process (REPL sessions, tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    records: Vec<StoredRecord>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn save(&mut self, formula: &str, result: &str) -> HistoryResult<StoredRecord> {
        let record = append_record(&mut self.records, formula, result);
        info!(id = record.id, formula, result, "saved calculation");
        Ok(record)
    }

    fn list_recent(&self, limit: usize) -> HistoryResult<Vec<StoredRecord>> {
        Ok(most_recent(&self.records, limit))
    }
}

// ============================================================================
// JSON file store
// ============================================================================

/// Store backed by a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/calcdeck/history.json`
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcdeck")
            .join("history.json")
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn format_error(&self, source: serde_json::Error) -> HistoryError {
        HistoryError::Format {
            path: self.path.clone(),
            source,
        }
    }

    /// A missing file is an empty history.
    fn load(&self) -> HistoryResult<Vec<StoredRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|e| self.format_error(e))
    }

    fn store(&self, records: &[StoredRecord]) -> HistoryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let contents = serde_json::to_string_pretty(records).map_err(|e| self.format_error(e))?;
        fs::write(&self.path, contents).map_err(|e| self.io_error(e))
    }

    fn try_save(&self, formula: &str, result: &str) -> HistoryResult<StoredRecord> {
        let mut records = self.load()?;
        let record = append_record(&mut records, formula, result);
        self.store(&records)?;
        Ok(record)
    }
}

impl HistoryStore for JsonHistoryStore {
    fn save(&mut self, formula: &str, result: &str) -> HistoryResult<StoredRecord> {
        match self.try_save(formula, result) {
            Ok(record) => {
                info!(id = record.id, formula, result, path = %self.path.display(), "saved calculation");
                Ok(record)
            }
            Err(err) => {
                error!(error = %err, "error saving calculation");
                Err(err)
            }
        }
    }

    fn list_recent(&self, limit: usize) -> HistoryResult<Vec<StoredRecord>> {
        self.load()
            .map(|records| most_recent(&records, limit))
            .inspect_err(|err| error!(error = %err, "error fetching history"))
    }
}

/// Save without letting a storage failure affect the calculation.
pub fn save_or_warn(
    store: &mut dyn HistoryStore,
    formula: &str,
    result: &str,
) -> Option<StoredRecord> {
    store
        .save(formula, result)
        .inspect_err(|err| warn!(error = %err, "calculation was not saved"))
        .ok()
}
