//! Git integration adapter
//!
//! Implements `VersionControl` trait using git commands.
//!
//! - [`staging`] - Staged and uncommitted file detection

pub mod staging;

use std::path::PathBuf;

use crate::core::ports::VersionControl;

pub use staging::{get_staged_files, get_uncommitted_changes};

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }
}

impl VersionControl for GitVersionControl {
    fn uncommitted_changes(&self) -> anyhow::Result<Vec<String>> {
        get_uncommitted_changes(&self.workdir)
    }

    fn staged_files(&self) -> anyhow::Result<Vec<String>> {
        get_staged_files(&self.workdir)
    }
}
