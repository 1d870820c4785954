//! Fake Notion API on a local port
//!
//! Serves the three endpoints docops uses from an in-memory page list.
//! Query results come back two at a time so pagination is exercised.

use std::io::Read as _;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde_json::{Value, json};
use tiny_http::{Header, Request, Response, Server};

/// Token the fake accepts
pub const TOKEN: &str = "secret_test_token";

/// Database the fake serves
pub const DATABASE_ID: &str = "db-123";

const BATCH_SIZE: usize = 2;

/// A request the fake received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub notion_version: Option<String>,
    pub body: String,
}

/// Running fake server; stops when dropped
pub struct FakeNotion {
    server: Arc<Server>,
    handle: Option<JoinHandle<()>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    base_url: String,
}

impl FakeNotion {
    /// Start serving `pages` on an ephemeral port
    pub fn start(pages: Vec<Value>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to bind fake server"));
        let addr = server.server_addr().to_ip().expect("Fake server has no IP address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let recorded = record(&mut request);
                    let (status, body) = route(&recorded, &pages);
                    requests.lock().unwrap().push(recorded);

                    let content_type =
                        Header::from_bytes("Content-Type", "application/json").unwrap();
                    let response = Response::from_string(body.to_string())
                        .with_status_code(status)
                        .with_header(content_type);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            handle: Some(handle),
            requests,
            base_url: format!("http://{addr}/v1"),
        }
    }

    /// Base URL to put in `NOTION_API_URL`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeNotion {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Build a page object with a `Name` title and a `Status` status
pub fn page(id: &str, title: &str, status: Option<&str>, last_edited: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "url": format!("https://www.notion.so/{id}"),
        "created_time": "2024-06-01T09:00:00.000Z",
        "last_edited_time": last_edited,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{ "type": "text", "plain_text": title }]
            },
            "Status": {
                "id": "s%3Ax",
                "type": "status",
                "status": status.map(|name| json!({ "name": name }))
            }
        }
    })
}

fn header(request: &Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

fn record(request: &mut Request) -> RecordedRequest {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    RecordedRequest {
        method: request.method().to_string(),
        path: request.url().to_string(),
        authorization: header(request, "Authorization"),
        notion_version: header(request, "Notion-Version"),
        body,
    }
}

fn error(status: u16, code: &str, message: &str) -> (u16, Value) {
    (status, json!({ "object": "error", "status": status, "code": code, "message": message }))
}

fn route(request: &RecordedRequest, pages: &[Value]) -> (u16, Value) {
    if request.authorization.as_deref() != Some(&format!("Bearer {TOKEN}")) {
        return error(401, "unauthorized", "API token is invalid.");
    }

    let path = request.path.strip_prefix("/v1/").unwrap_or(&request.path);
    let database = format!("databases/{DATABASE_ID}");

    match (request.method.as_str(), path) {
        ("GET", p) if p == database => (200, json!({ "object": "database", "id": DATABASE_ID })),
        ("POST", p) if p == format!("{database}/query") => query(&request.body, pages),
        ("PATCH", p) if p.starts_with("pages/") => {
            let id = p.trim_start_matches("pages/");
            if pages.iter().any(|page| page["id"] == id) {
                (200, json!({ "object": "page", "id": id }))
            } else {
                error(404, "object_not_found", &format!("Could not find page with ID: {id}."))
            }
        },
        _ => error(404, "object_not_found", "Could not find database."),
    }
}

fn query(body: &str, pages: &[Value]) -> (u16, Value) {
    let body: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let property = body["filter"]["property"].as_str().unwrap_or_default();
    let wanted = body["filter"]["status"]["equals"].as_str().unwrap_or_default();
    let start: usize = body["start_cursor"].as_str().and_then(|c| c.parse().ok()).unwrap_or(0);

    let matching: Vec<&Value> = pages
        .iter()
        .filter(|page| page["properties"][property]["status"]["name"] == wanted)
        .collect();
    let end = (start + BATCH_SIZE).min(matching.len());
    let has_more = end < matching.len();

    (
        200,
        json!({
            "object": "list",
            "results": matching.get(start..end).unwrap_or_default(),
            "has_more": has_more,
            "next_cursor": has_more.then(|| end.to_string()),
        }),
    )
}

