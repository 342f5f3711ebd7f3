//! In-process mock of the Plane REST API for tests.
//!
//! Routes are matched on exact method and path. Every request is recorded,
//! matched or not, so tests can assert on URLs, headers and bodies or on the
//! absence of traffic.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::config::PlaneConfig;
use crate::plane::PlaneClient;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SLUG: &str = "acme";

/// Install the rustls crypto provider once per process
pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Debug, Clone)]
pub struct MockRoute {
    method: Method,
    path: String,
    status: StatusCode,
    body: String,
}

impl MockRoute {
    /// 200 with a JSON body
    pub fn json(method: Method, path: impl Into<String>, body: Value) -> Self {
        Self::status(method, path, StatusCode::OK, &body.to_string())
    }

    pub fn status(method: Method, path: impl Into<String>, status: StatusCode, body: &str) -> Self {
        Self {
            method,
            path: path.into(),
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<Vec<MockRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockPlane {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockPlane {
    /// Spawn the mock on an ephemeral localhost port
    pub async fn start(routes: Vec<MockRoute>) -> Self {
        init_crypto();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(routes),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url,
            requests,
            _handle: handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> PlaneConfig {
        PlaneConfig {
            api_key: TEST_API_KEY.to_string(),
            base_url: self.url.clone(),
            workspace_slug: TEST_SLUG.to_string(),
        }
    }

    pub fn client(&self) -> Arc<PlaneClient> {
        Arc::new(PlaneClient::new(&self.config()).unwrap())
    }
}

/// Path prefix of a project in the test workspace
pub fn project_path(project_id: &str) -> String {
    format!("/api/v1/workspaces/{}/projects/{}", TEST_SLUG, project_id)
}

/// Wrap items in Plane's paginated list envelope
pub fn envelope(results: Value) -> Value {
    let count = results.as_array().map(|a| a.len()).unwrap_or(0);
    serde_json::json!({
        "results": results,
        "count": count,
        "total_pages": 1,
        "next_cursor": "100:1:0",
        "prev_cursor": "100:-1:1",
    })
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    match state
        .routes
        .iter()
        .find(|r| r.method == method && r.path == uri.path())
    {
        Some(route) if route.status == StatusCode::NO_CONTENT => {
            StatusCode::NO_CONTENT.into_response()
        }
        Some(route) => Response::builder()
            .status(route.status)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(route.body.clone()))
            .unwrap(),
        None => (
            StatusCode::NOT_FOUND,
            format!("{{\"detail\": \"no mock for {} {}\"}}", method, uri.path()),
        )
            .into_response(),
    }
}
