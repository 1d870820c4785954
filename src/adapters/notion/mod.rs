//! Notion API adapter
//!
//! Implements `TaskService` over the Notion REST API with a blocking HTTP
//! client. Every request is bounded by a timeout; there is no retry.

pub mod types;

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::core::models::Page;
use crate::core::ports::{StatusFilter, TaskService};
use crate::env::Credentials;
use crate::error::{DocopsError, Result};

use types::{ErrorResponse, QueryRequest, QueryResponse, UpdatePageRequest};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent with every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Notion REST client
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// Create a client authenticating with `token`
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("docops/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DocopsError::Connectivity(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        })
    }

    /// Create a client from credentials, honoring `NOTION_API_URL`
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let client = Self::new(credentials.token.clone())?;
        Ok(match crate::env::api_url_override() {
            Some(url) => client.with_base_url(url),
            None => client,
        })
    }

    /// Point the client at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token).header("Notion-Version", NOTION_VERSION)
    }

    /// Send a request and decode a successful JSON response
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self
            .authorized(request)
            .send()
            .map_err(|e| DocopsError::Connectivity(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| DocopsError::Connectivity(e.to_string()))?;

        if !status.is_success() {
            return Err(DocopsError::Api {
                status: status.as_u16(),
                message: ErrorResponse::describe(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl TaskService for NotionClient {
    fn retrieve_database(&self, database_id: &str) -> Result<()> {
        let _: serde_json::Value = self.send(self.http.get(self.url(&format!("databases/{database_id}"))))?;
        Ok(())
    }

    fn query_database(&self, database_id: &str, filter: &StatusFilter) -> Result<Vec<Page>> {
        let url = self.url(&format!("databases/{database_id}/query"));
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = QueryRequest {
                filter,
                start_cursor: cursor.as_deref(),
            };
            let batch: QueryResponse = self.send(self.http.post(&url).json(&body))?;
            pages.extend(batch.results);

            match batch.next_cursor {
                Some(next) if batch.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(pages)
    }

    fn update_page(&self, page_id: &str, properties: &serde_json::Value) -> Result<()> {
        let body = UpdatePageRequest { properties };
        let _: serde_json::Value =
            self.send(self.http.patch(self.url(&format!("pages/{page_id}"))).json(&body))?;
        Ok(())
    }
}
