//! Version control system port
//!
//! Defines the interface for interacting with version control.

/// Version control system abstraction
pub trait VersionControl {
    /// Paths with uncommitted changes (`git status --porcelain`)
    fn uncommitted_changes(&self) -> anyhow::Result<Vec<String>>;

    /// Get list of staged files (ready to be committed)
    fn staged_files(&self) -> anyhow::Result<Vec<String>>;
}
