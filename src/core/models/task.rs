//! Task and Notion page models
//!
//! [`Page`] mirrors the subset of a Notion page object docops reads.
//! [`Task`] is the flattened view shown to users.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status shown when a page has no status value
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Status queried by `status` and `sync`
pub const READY_STATUS: &str = "Ready";

/// A Notion page, as returned by database queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page ID
    pub id: String,
    /// Page URL
    pub url: String,
    /// Creation time (ISO 8601)
    pub created_time: String,
    /// Last edit time (ISO 8601)
    pub last_edited_time: String,
    /// Property values keyed by property name
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// A page property value. Only title and status shapes are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Rich text fragments of a `title` property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,
    /// Value of a `status` property (`null` when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusValue>,
}

/// A rich text fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// Text without formatting
    pub plain_text: String,
}

/// A status option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusValue {
    /// Option name (e.g., "Ready")
    pub name: String,
}

/// A task, flattened from a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Page ID
    pub id: String,
    /// Title, or empty when the page has none
    pub title: String,
    /// Status name, or [`UNKNOWN_STATUS`]
    pub status: String,
    /// Page URL
    pub url: String,
    /// Creation time (ISO 8601)
    pub created_time: String,
    /// Last edit time (ISO 8601)
    pub last_edited_time: String,
}

impl Task {
    /// Flatten a page using the configured property names
    #[must_use]
    pub fn from_page(page: &Page, title_property: &str, status_property: &str) -> Self {
        let title = page
            .properties
            .get(title_property)
            .and_then(|p| p.title.as_ref())
            .and_then(|fragments| fragments.first())
            .map(|t| t.plain_text.clone())
            .unwrap_or_default();

        let status = page
            .properties
            .get(status_property)
            .and_then(|p| p.status.as_ref())
            .map_or_else(|| UNKNOWN_STATUS.to_string(), |s| s.name.clone());

        Self {
            id: page.id.clone(),
            title,
            status,
            url: page.url.clone(),
            created_time: page.created_time.clone(),
            last_edited_time: page.last_edited_time.clone(),
        }
    }

    /// Date part of the last edit time
    #[must_use]
    pub fn last_edited_date(&self) -> &str {
        self.last_edited_time.get(..10).unwrap_or(&self.last_edited_time)
    }
}
