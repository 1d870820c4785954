//! Task service port
//!
//! The narrow contract docops needs from a remote task tracker.

use serde::Serialize;

use crate::core::models::Page;
use crate::error::Result;

/// Database query filter: `{property, status: {equals}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusFilter {
    /// Status property name
    pub property: String,
    /// Condition on the status value
    pub status: StatusCondition,
}

/// Equality condition on a status property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCondition {
    /// Required status name
    pub equals: String,
}

impl StatusFilter {
    /// Match pages whose `property` equals `status`
    #[must_use]
    pub fn equals(property: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            status: StatusCondition {
                equals: status.into(),
            },
        }
    }
}

/// Remote task tracker
///
/// Implementations perform blocking calls with bounded timeouts.
pub trait TaskService {
    /// Fetch database metadata; used to check connectivity and credentials
    fn retrieve_database(&self, database_id: &str) -> Result<()>;

    /// Query all pages of a database matching `filter`
    fn query_database(&self, database_id: &str, filter: &StatusFilter) -> Result<Vec<Page>>;

    /// Update page properties
    fn update_page(&self, page_id: &str, properties: &serde_json::Value) -> Result<()>;
}
