//! Project configuration
//!
//! Maps the logical property names docops needs (task title, task status)
//! to the property names used by the Notion database. Stored as JSON at
//! `docops/docops_config.json`:
//!
//! ```json
//! {
//!   "notion_config": {
//!     "properties": {
//!       "status_property_name": "Status",
//!       "title_property_name": "Name"
//!     }
//!   }
//! }
//! ```
//!
//! Unknown keys are ignored. Missing or empty property names are rejected at
//! load time.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocopsError, Result};

/// Root of `docops_config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocopsConfig {
    /// Notion-specific settings
    pub notion_config: NotionConfig,
}

/// Notion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Database property names
    pub properties: PropertyNames,
}

/// Names of the database properties docops reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNames {
    /// Property holding the task status (a Notion `status` property)
    pub status_property_name: String,
    /// Property holding the task title (a Notion `title` property)
    pub title_property_name: String,
}

impl DocopsConfig {
    /// Build a config from explicit property names
    #[must_use]
    pub fn new(status_property: impl Into<String>, title_property: impl Into<String>) -> Self {
        Self {
            notion_config: NotionConfig {
                properties: PropertyNames {
                    status_property_name: status_property.into(),
                    title_property_name: title_property.into(),
                },
            },
        }
    }

    /// Load and validate the config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DocopsError::ConfigMissing {
                    path: path.to_path_buf(),
                }
            } else {
                DocopsError::ConfigInvalid {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })?;

        let config = Self::from_json(&content).map_err(|reason| DocopsError::ConfigInvalid {
            path: path.to_path_buf(),
            reason,
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config content
    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let config: Self = serde_json::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let props = &self.notion_config.properties;
        if props.status_property_name.trim().is_empty() {
            return Err("status_property_name must not be empty".to_string());
        }
        if props.title_property_name.trim().is_empty() {
            return Err("title_property_name must not be empty".to_string());
        }
        Ok(())
    }

    /// Name of the status property
    #[must_use]
    pub fn status_property(&self) -> &str {
        &self.notion_config.properties.status_property_name
    }

    /// Name of the title property
    #[must_use]
    pub fn title_property(&self) -> &str {
        &self.notion_config.properties.title_property_name
    }
}
