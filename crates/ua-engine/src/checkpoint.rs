//! Resume checkpoint for batch runs.
//!
//! File location: `<logs_dir>/operation_resume_<operation>.json`
//!
//! The file holds the case-folded emails already processed by an
//! interrupted run. It is rewritten every few items, kept when a run aborts
//! and removed when a run completes.

use crate::{EngineError, EngineResult};

use ua_core::{Operation, normalize_email};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const CHECKPOINT_PREFIX: &str = "operation_resume_";

/// On-disk shape of the checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointFile {
    pub processed_identities: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Checkpoint {
    path: PathBuf,
    processed: HashSet<String>,
}

impl Checkpoint {
    pub fn path_for(logs_dir: &Path, operation: Operation) -> PathBuf {
        logs_dir.join(format!("{CHECKPOINT_PREFIX}{operation}.json"))
    }

    /// An empty checkpoint that will be saved to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            processed: HashSet::new(),
        }
    }

    /// Load the checkpoint at `path`; a missing or unreadable file yields an
    /// empty checkpoint.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut checkpoint = Self::empty(path);

        match Self::read(&checkpoint.path) {
            Ok(Some(file)) => {
                checkpoint.processed = file
                    .processed_identities
                    .iter()
                    .map(|email| normalize_email(email))
                    .collect();
                debug!(
                    "Loaded checkpoint {} with {} entries (saved {})",
                    checkpoint.path.display(),
                    checkpoint.processed.len(),
                    file.timestamp
                );
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable checkpoint: {e}"),
        }

        checkpoint
    }

    fn read(path: &Path) -> EngineResult<Option<CheckpointFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        let file = serde_json::from_str(&content).map_err(|e| EngineError::json(path, e))?;
        Ok(Some(file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, email: &str) -> bool {
        self.processed.contains(&normalize_email(email))
    }

    pub fn insert(&mut self, email: &str) {
        self.processed.insert(normalize_email(email));
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }

    /// Forget every entry (the file on disk is left alone).
    pub fn clear(&mut self) {
        self.processed.clear();
    }

    /// Write the checkpoint through a sibling temp file and rename it into
    /// place.
    pub fn save(&self) -> EngineResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| EngineError::io(dir, e))?;
        }

        let mut processed_identities: Vec<String> = self.processed.iter().cloned().collect();
        processed_identities.sort();

        let file = CheckpointFile {
            processed_identities,
            timestamp: Utc::now(),
        };
        let content =
            serde_json::to_string_pretty(&file).map_err(|e| EngineError::json(&self.path, e))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|e| EngineError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| EngineError::io(&self.path, e))?;

        debug!(
            "Saved checkpoint {} ({} entries)",
            self.path.display(),
            self.processed.len()
        );
        Ok(())
    }

    /// Delete the checkpoint file; a file that is already gone is fine.
    pub fn remove(&self) -> EngineResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EngineError::io(&self.path, e)),
        }
    }
}
