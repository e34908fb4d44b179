//! Persistent record of the moves a restoration run performed.
//!
//! After a run that moved at least one file, a JSON history file is written
//! to the root so the migration leaves a trace of what it did. The file is a
//! record only; there is no undo.

use crate::relocator::{Relocation, RestoreError, RestoreResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the history file written into the root directory.
const HISTORY_FILE_NAME: &str = ".kotapal_restore_history.json";

/// A single recorded move, with both paths relative to the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocationRecord {
    pub source: String,
    pub destination: String,
}

/// The complete record of one restoration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreLog {
    /// ISO 8601 timestamp of when the restoration ran.
    pub timestamp: String,
    /// The root directory the restoration operated on.
    pub root: String,
    /// All moves performed in this run, in execution order.
    pub relocations: Vec<RelocationRecord>,
}

impl RestoreLog {
    /// Creates an empty log for a run over the given root.
    pub fn new(root: &Path) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            root: root.to_string_lossy().to_string(),
            relocations: Vec::new(),
        }
    }

    /// Appends a performed relocation to this log.
    pub fn record(&mut self, relocation: &Relocation) {
        self.relocations.push(RelocationRecord {
            source: relocation.source.to_string_lossy().to_string(),
            destination: relocation.destination.to_string_lossy().to_string(),
        });
    }

    /// Returns true if no moves were recorded.
    pub fn is_empty(&self) -> bool {
        self.relocations.is_empty()
    }

    /// Returns the path of the history file for a root directory.
    pub fn history_file_path(root: &Path) -> PathBuf {
        root.join(HISTORY_FILE_NAME)
    }

    /// Saves this log as pretty-printed JSON in the root directory.
    pub fn save(&self, root: &Path) -> RestoreResult<()> {
        let json_string =
            serde_json::to_string_pretty(self).map_err(|e| RestoreError::HistoryWriteFailed {
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("JSON serialization failed: {}", e),
                ),
            })?;

        fs::write(Self::history_file_path(root), json_string)
            .map_err(|e| RestoreError::HistoryWriteFailed { source: e })
    }

    /// Loads the history file from a root directory, if one exists.
    pub fn load(root: &Path) -> RestoreResult<Option<Self>> {
        let history_path = Self::history_file_path(root);
        if !history_path.exists() {
            return Ok(None);
        }

        let json_string = fs::read_to_string(&history_path)
            .map_err(|e| RestoreError::HistoryReadFailed { source: e })?;

        let log = serde_json::from_str(&json_string).map_err(|e| {
            RestoreError::InvalidHistoryFormat {
                reason: format!("JSON parse error: {}", e),
            }
        })?;

        Ok(Some(log))
    }
}
