//! # API Client
//!
//! Single choke point for outbound requests to the journal API.
//!
//! Every call goes through [`ApiClient::send`], which runs the [`AuthInterceptor`] on the way out
//! (bearer credential) and on the way back (401 handling), then converts non-success responses into
//! [`AppError`]. There is no retry or backoff: failures are returned to the caller untouched.

use super::interceptor::AuthInterceptor;
use crate::app::events::AppEvent;
use crate::core::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::JournalApi;
use crate::services::session::CredentialStore;
use async_channel::Sender;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    AuthResponse, ChartPoint, CloseTrade, CreateTrade, DashboardSummary, ErrorResponse,
    PaginatedResponse, RegisterRequest, Trade, TradeQuery, UpdateTrade, UserProfile,
};
use std::sync::Arc;
use std::time::Instant;

/// HTTP client for the journal REST API.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    interceptor: AuthInterceptor,
}

impl ApiClient {
    /// Create a client for `config.api_url` reading credentials from `store`.
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            interceptor: AuthInterceptor::new(store),
        })
    }

    /// Publish session expiry on the app's event channel.
    pub fn with_events(mut self, events: Sender<AppEvent>) -> Self {
        self.interceptor = self.interceptor.with_events(events);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn interceptor(&self) -> &AuthInterceptor {
        &self.interceptor
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request to `path`, letting `build` add query, body and headers.
    pub(crate) async fn send<F>(&self, method: Method, path: &str, build: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let start = Instant::now();
        let request = self
            .interceptor
            .on_request(self.client.request(method.clone(), self.url(path)));

        let response = build(request).send().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, error = %e, "Network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "API response"
        );

        if status.is_success() {
            return Ok(response);
        }

        self.interceptor.on_response(path, status);
        Err(Self::error_from(status, response).await)
    }

    async fn error_from(status: StatusCode, response: Response) -> AppError {
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message());

        tracing::warn!(
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or("-"),
            "API request rejected"
        );

        if status == StatusCode::UNAUTHORIZED {
            AppError::Unauthorized { detail }
        } else {
            AppError::Api {
                status: status.as_u16(),
                detail,
            }
        }
    }

    /// Decode a success body.
    pub(crate) async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            AppError::Parse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl JournalApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        super::auth::register(self, request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        super::auth::login(self, email, password).await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        super::users::get_profile(self).await
    }

    async fn list_trades(&self, query: &TradeQuery) -> Result<PaginatedResponse<Trade>> {
        super::trades::list_trades(self, query).await
    }

    async fn get_trade(&self, id: &str) -> Result<Trade> {
        super::trades::get_trade(self, id).await
    }

    async fn get_recent_trades(&self, limit: u32) -> Result<Vec<Trade>> {
        super::trades::get_recent_trades(self, limit).await
    }

    async fn create_trade(&self, trade: &CreateTrade) -> Result<Trade> {
        super::trades::create_trade(self, trade).await
    }

    async fn update_trade(&self, id: &str, changes: &UpdateTrade) -> Result<Trade> {
        super::trades::update_trade(self, id, changes).await
    }

    async fn close_trade(&self, id: &str, close: &CloseTrade) -> Result<Trade> {
        super::trades::close_trade(self, id, close).await
    }

    async fn delete_trade(&self, id: &str) -> Result<()> {
        super::trades::delete_trade(self, id).await
    }

    async fn get_summary(&self) -> Result<DashboardSummary> {
        super::analytics::get_summary(self).await
    }

    async fn get_chart(&self) -> Result<Vec<ChartPoint>> {
        super::analytics::get_chart(self).await
    }

    async fn get_top_trades(&self) -> Result<Vec<Trade>> {
        super::analytics::get_top_trades(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::mock_server::{client_for, MockBackend};
    use crate::services::session::MemoryCredentialStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_bearer_attached_when_token_stored() {
        let backend = MockBackend::start().await;
        backend.respond("GET", "/users/me", 200, MockBackend::profile_json("trader"));
        let store = Arc::new(MemoryCredentialStore::with_token("secret-token"));
        let client = client_for(&backend, store);

        client.get_profile().await.unwrap();

        let requests = backend.requests_to("GET", "/users/me");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Bearer secret-token")
        );
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let backend = MockBackend::start().await;
        backend.respond("GET", "/users/me", 200, MockBackend::profile_json("trader"));
        let client = client_for(&backend, Arc::new(MemoryCredentialStore::new()));

        client.get_profile().await.unwrap();

        assert_eq!(backend.requests()[0].authorization, None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_credential_and_publishes() {
        let backend = MockBackend::start().await;
        backend.respond(
            "GET",
            "/analytics/summary",
            401,
            json!({ "detail": "Could not validate credentials" }),
        );
        let store = Arc::new(MemoryCredentialStore::with_token("expired"));
        let (tx, rx) = async_channel::unbounded();
        let client = client_for(&backend, store.clone()).with_events(tx);

        let err = client.get_summary().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(store.token(), None);
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::SessionExpired));
    }

    #[tokio::test]
    async fn test_unauthorized_login_does_not_redirect() {
        let backend = MockBackend::start().await;
        backend.respond(
            "POST",
            "/auth/login",
            401,
            json!({ "detail": "Incorrect email or password" }),
        );
        let store = Arc::new(MemoryCredentialStore::with_token("previous"));
        let (tx, rx) = async_channel::unbounded();
        let client = client_for(&backend, store.clone()).with_events(tx);

        let err = client.login("a@b.com", "wrong").await.unwrap_err();

        assert_eq!(err.server_detail(), Some("Incorrect email or password"));
        assert_eq!(store.token().as_deref(), Some("previous"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_validation_detail_is_kept_verbatim() {
        let backend = MockBackend::start().await;
        backend.respond(
            "POST",
            "/trades/",
            422,
            json!({ "detail": [{ "loc": ["body", "quantity"], "msg": "Input should be greater than 0", "type": "greater_than" }] }),
        );
        let client = client_for(&backend, Arc::new(MemoryCredentialStore::with_token("t")));

        let err = client
            .create_trade(&CreateTrade {
                symbol: "AAPL".to_string(),
                side: shared::TradeSide::Long,
                quantity: 1.0,
                entry_price: 10.0,
                entry_date: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(422));
        assert_eq!(
            err.user_message("Failed to save trade."),
            "Input should be greater than 0"
        );
    }

    #[tokio::test]
    async fn test_server_error_without_body() {
        let backend = MockBackend::start().await;
        backend.respond_raw("GET", "/analytics/chart", 502, "upstream down");
        let client = client_for(&backend, Arc::new(MemoryCredentialStore::with_token("t")));

        let err = client.get_chart().await.unwrap_err();
        assert!(matches!(err, AppError::Api { status: 502, detail: None }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = ClientConfig::default().with_api_url(format!("http://127.0.0.1:{}", port));
        let client = ApiClient::new(&config, Arc::new(MemoryCredentialStore::new())).unwrap();

        let err = client.get_profile().await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_parse_error() {
        let backend = MockBackend::start().await;
        backend.respond("GET", "/users/me", 200, json!({ "unexpected": true }));
        let client = client_for(&backend, Arc::new(MemoryCredentialStore::with_token("t")));

        let err = client.get_profile().await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
