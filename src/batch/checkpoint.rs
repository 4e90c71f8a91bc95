//! Batch checkpoint persistence
//!
//! A checkpoint is the durable record of which worklist items have completed
//! successfully. It is loaded at batch start, rewritten after every completed
//! site (write-temp-then-rename, so a crash mid-write leaves the previous
//! checkpoint intact), and deleted when the batch finishes with nothing left
//! to do. A corrupt or missing checkpoint means "no prior progress", never an
//! error.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Persisted set of completed site identifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    pub completed: Vec<String>,
}

impl Checkpoint {
    /// Loads a checkpoint from disk
    ///
    /// A missing file or unparsable content yields an empty checkpoint.
    ///
    /// # Arguments
    ///
    /// * `path` - Checkpoint file path
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Could not read checkpoint {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(checkpoint) => checkpoint,
            Err(e) => {
                tracing::warn!(
                    "Corrupt checkpoint {} treated as empty: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Whether a site identifier is already marked completed
    pub fn contains(&self, url: &str) -> bool {
        self.completed.iter().any(|c| c == url)
    }

    /// Marks a site identifier as completed (idempotent)
    pub fn mark_completed(&mut self, url: &str) {
        if !self.contains(url) {
            self.completed.push(url.to_string());
        }
    }

    /// Writes the checkpoint to durable storage
    ///
    /// The content is written to a sibling temp file first and renamed over
    /// the target, so readers never observe a half-written checkpoint.
    ///
    /// # Arguments
    ///
    /// * `path` - Checkpoint file path
    pub fn flush(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::debug!(
            "Checkpoint flushed: {} completed sites",
            self.completed.len()
        );
        Ok(())
    }

    /// Removes the checkpoint file; a missing file is not an error
    ///
    /// # Arguments
    ///
    /// * `path` - Checkpoint file path
    pub fn remove(path: &Path) -> io::Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
