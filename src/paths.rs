//! Centralized path definitions for docops
//!
//! All files docops reads or writes live relative to the project root.
//!
//! ```text
//! repo/
//! ├── .env                         # NOTION_API_TOKEN, NOTION_DATABASE_ID
//! ├── docops/
//! │   ├── docops_config.json       # property name mapping
//! │   ├── handoff.json             # append-only session handoffs
//! │   └── docops.log               # append-only text log
//! ├── scripts/
//! └── src/
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory holding docops state
pub const DOCOPS_DIR: &str = "docops";

/// Environment file consulted at startup
pub const ENV_FILE: &str = ".env";

/// Configuration filename inside [`DOCOPS_DIR`]
const CONFIG_FILE: &str = "docops_config.json";

/// Handoff log filename inside [`DOCOPS_DIR`]
const HANDOFF_FILE: &str = "handoff.json";

/// Text log filename inside [`DOCOPS_DIR`]
const LOG_FILE: &str = "docops.log";

/// Directories a project must contain to pass preflight
pub const REQUIRED_DIRS: [&str; 3] = [DOCOPS_DIR, "scripts", "src"];

/// Get the project root directory.
///
/// Uses the top level of the enclosing git work tree, falling back to the
/// current directory outside of git.
#[must_use]
pub fn project_root() -> PathBuf {
    Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Get path to `.env`
#[must_use]
pub fn env_file(root: &Path) -> PathBuf {
    root.join(ENV_FILE)
}

/// Get path to `docops/docops_config.json`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(DOCOPS_DIR).join(CONFIG_FILE)
}

/// Get path to `docops/handoff.json`
#[must_use]
pub fn handoff_file(root: &Path) -> PathBuf {
    root.join(DOCOPS_DIR).join(HANDOFF_FILE)
}

/// Get path to `docops/docops.log`
#[must_use]
pub fn log_file(root: &Path) -> PathBuf {
    root.join(DOCOPS_DIR).join(LOG_FILE)
}
