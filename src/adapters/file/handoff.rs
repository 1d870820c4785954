//! Append-only handoff log
//!
//! Entries are kept as a pretty-printed JSON array. Appending reads the
//! array, pushes the entry and replaces the file through a temp file and a
//! rename, so a crash mid-write never leaves a truncated log behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::models::HandoffEntry;
use crate::error::Result;

/// Handoff log stored at a JSON file path
#[derive(Debug, Clone)]
pub struct HandoffLog {
    path: PathBuf,
}

impl HandoffLog {
    /// Log stored at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries, oldest first. A missing file is an empty log.
    pub fn load(&self) -> Result<Vec<HandoffEntry>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append an entry, returning the new number of entries
    pub fn append(&self, entry: HandoffEntry) -> Result<usize> {
        let mut entries = self.load()?;
        entries.push(entry);
        let content = serde_json::to_string_pretty(&entries)?;
        write_atomic(&self.path, &content)?;
        log::debug!("Appended handoff #{} to {}", entries.len(), self.path.display());
        Ok(entries.len())
    }
}

/// Replace `path` with `content` via a sibling temp file
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}
