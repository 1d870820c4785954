//! Error taxonomy for docops
//!
//! Only configuration errors are fatal. Everything else is expected to
//! degrade into a failed check by the gate that hit it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by docops collaborators
#[derive(Debug, Error)]
pub enum DocopsError {
    /// The configuration file does not exist
    #[error("configuration file not found: {}", path.display())]
    ConfigMissing {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The configuration file exists but could not be parsed or validated
    #[error("invalid configuration in {}: {reason}", path.display())]
    ConfigInvalid {
        /// Path of the offending file
        path: PathBuf,
        /// Parser or validation message
        reason: String,
    },

    /// The task service could not be reached or rejected our credentials
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// The task service answered with a non-success status
    #[error("Notion API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the API error body, or the raw body
        message: String,
    },

    /// An external tool could not be spawned or did not finish in time
    #[error("failed to run `{command}`: {reason}")]
    Subprocess {
        /// Command line that was attempted
        command: String,
        /// What went wrong
        reason: String,
    },

    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used by the adapters and ports
pub type Result<T> = std::result::Result<T, DocopsError>;
