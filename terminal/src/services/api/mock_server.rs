//! In-process stand-in for the journal API, used by the HTTP-level tests.
//!
//! Binds `127.0.0.1:0`, answers from a `(method, path)` route table and records every request.
//! Unknown routes answer `404 {"detail":"Not Found"}`.

use super::client::ApiClient;
use crate::core::config::ClientConfig;
use crate::services::session::CredentialStore;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

type RouteTable = HashMap<(String, String), (u16, String)>;

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<RouteTable>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub(crate) struct MockBackend {
    pub base_url: String,
    state: MockState,
    handle: JoinHandle<()>,
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    let route = state
        .routes
        .lock()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    let (status, body) = route.unwrap_or((404, json!({ "detail": "Not Found" }).to_string()));
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if body.is_empty() {
        status.into_response()
    } else {
        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock backend should bind");
        let addr = listener.local_addr().expect("mock backend has an address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            handle,
        }
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a raw body (empty for no body).
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state
            .routes
            .lock()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    pub fn reset_requests(&self) {
        self.state.requests.lock().clear();
    }

    pub fn profile_json(role: &str) -> Value {
        json!({ "id": "u1", "email": "a@b.com", "username": "alice", "role": role })
    }

    pub fn trade_json(id: &str, status: &str) -> Value {
        json!({
            "id": id, "user_id": "u1", "symbol": "AAPL", "side": "LONG",
            "quantity": 10.0, "entry_price": 100.0, "entry_date": "2024-03-01T10:00:00",
            "exit_price": null, "exit_date": null, "pnl": null, "status": status
        })
    }

    pub fn closed_trade_json(id: &str, exit_price: f64, pnl: f64) -> Value {
        json!({
            "id": id, "user_id": "u1", "symbol": "AAPL", "side": "LONG",
            "quantity": 10.0, "entry_price": 100.0, "entry_date": "2024-03-01T10:00:00",
            "exit_price": exit_price, "exit_date": "2024-03-05T16:00:00", "pnl": pnl,
            "status": "CLOSED"
        })
    }

    pub fn page_json(data: Vec<Value>, total: u64) -> Value {
        json!({ "total": total, "page": 1, "limit": 20, "data": data })
    }

    pub fn trader_summary_json() -> Value {
        json!({
            "net_realized_pnl": 100.0, "profit_factor": 2.0, "win_rate": 50.0,
            "total_closed_trades": 2, "active_positions": 1, "avg_win": 150.0, "avg_loss": -50.0,
            "best_asset": { "symbol": "AAPL", "total_pnl": 100.0 }
        })
    }

    pub fn admin_summary_json() -> Value {
        json!({
            "total_users": 4, "total_trades": 30, "active_positions": 6,
            "total_platform_pnl": 875.0,
            "top_gainer": { "username": "alice", "email": "a@b.com", "total_pnl": 900.0 },
            "top_loser": { "username": "bob", "email": "bob@b.com", "total_pnl": -25.0 }
        })
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client pointed at `backend`.
pub(crate) fn client_for(backend: &MockBackend, store: Arc<dyn CredentialStore>) -> ApiClient {
    let config = ClientConfig::default().with_api_url(backend.base_url.clone());
    ApiClient::new(&config, store).expect("client should build")
}
