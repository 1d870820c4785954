//! Notion API payloads

use serde::{Deserialize, Serialize};

use crate::core::models::Page;
use crate::core::ports::StatusFilter;

/// Body of `POST /databases/{id}/query`
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    /// Status filter
    pub filter: &'a StatusFilter,
    /// Cursor from the previous page of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<&'a str>,
}

/// Response of `POST /databases/{id}/query`
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    /// Pages in this batch
    pub results: Vec<Page>,
    /// Whether more pages follow
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next batch
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Body of `PATCH /pages/{id}`
#[derive(Debug, Serialize)]
pub struct UpdatePageRequest<'a> {
    /// Property values to set
    pub properties: &'a serde_json::Value,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code (e.g., `unauthorized`)
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best description of an error body, falling back to the raw text
    #[must_use]
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<Self>(body) {
            Ok(Self {
                message: Some(message),
                code,
            }) => code.map_or_else(|| message.clone(), |code| format!("{code}: {message}")),
            _ => body.trim().to_string(),
        }
    }
}
