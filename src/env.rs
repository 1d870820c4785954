//! Environment and credentials
//!
//! Credentials come from the process environment, optionally seeded from a
//! `.env` file in the project root. Variables already set in the process are
//! never overridden by `.env`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Bearer token for the Notion API
pub const TOKEN_VAR: &str = "NOTION_API_TOKEN";

/// Identifier of the tracked Notion database
pub const DATABASE_VAR: &str = "NOTION_DATABASE_ID";

/// Optional override of the Notion API base URL
pub const API_URL_VAR: &str = "NOTION_API_URL";

/// Load `.env` from the project root into the process environment.
///
/// Returns the loaded file, or why nothing was loaded. A missing or malformed
/// file is not an error here; preflight reports on it. Runs before logging is
/// initialized so `.env` can set `RUST_LOG`; pass the result to
/// [`log_dotenv`] afterwards.
pub fn load_dotenv(root: &Path) -> Result<PathBuf, dotenvy::Error> {
    let path = crate::paths::env_file(root);
    dotenvy::from_path(&path).map(|()| path)
}

/// Record the outcome of [`load_dotenv`]
pub fn log_dotenv(loaded: &Result<PathBuf, dotenvy::Error>) {
    match loaded {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No environment loaded from .env: {e}"),
    }
}

/// Notion credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer token
    pub token: String,
    /// Target database ID
    pub database_id: String,
}

impl Credentials {
    /// Read credentials from the process environment
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup.
    ///
    /// Both variables must be present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            token: non_empty(TOKEN_VAR)?,
            database_id: non_empty(DATABASE_VAR)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .finish()
    }
}

/// Read the API base URL override, if any
#[must_use]
pub fn api_url_override() -> Option<String> {
    std::env::var(API_URL_VAR).ok().filter(|v| !v.trim().is_empty())
}
