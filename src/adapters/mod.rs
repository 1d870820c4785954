//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `notion/` - Notion REST API (`TaskService`)
//! - `git/` - Git operations (`VersionControl`)
//! - `process/` - Subprocess execution (`CommandRunner`)
//! - `file/` - JSON file storage (handoff log)

pub mod file;
pub mod git;
pub mod notion;
pub mod process;

pub use file::HandoffLog;
pub use git::GitVersionControl;
pub use notion::NotionClient;
pub use process::SystemRunner;
