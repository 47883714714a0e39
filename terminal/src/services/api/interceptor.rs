//! # Authentication Interceptor
//!
//! Request/response hooks every API call passes through.
//!
//! - **Request**: attach `Authorization: Bearer <token>` when a credential is stored
//! - **Response**: on `401 Unauthorized`, clear the stored credential and publish
//!   [`AppEvent::SessionExpired`] so navigation returns to the login screen
//!
//! Login and registration are on an allow-list: a 401 from them is a failed attempt, not an
//! expired session, and must not clear anything or redirect.

use crate::app::events::AppEvent;
use crate::services::session::CredentialStore;
use async_channel::Sender;
use reqwest::{RequestBuilder, StatusCode};
use std::sync::Arc;
use tracing::{error, warn};

/// Paths whose 401 responses never end the session
pub const AUTH_EXEMPT_PATHS: &[&str] = &["/auth/login", "/auth/register"];

pub struct AuthInterceptor {
    store: Arc<dyn CredentialStore>,
    events: Option<Sender<AppEvent>>,
    exempt_paths: &'static [&'static str],
}

impl AuthInterceptor {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            events: None,
            exempt_paths: AUTH_EXEMPT_PATHS,
        }
    }

    /// Publish session expiry on `events`.
    pub fn with_events(mut self, events: Sender<AppEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.iter().any(|exempt| path.contains(exempt))
    }

    pub fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Inspect a failed response. Returns `true` when the session was ended.
    pub fn on_response(&self, path: &str, status: StatusCode) -> bool {
        if status != StatusCode::UNAUTHORIZED || self.is_exempt(path) {
            return false;
        }

        warn!(path = %path, "Credential rejected by API, ending session");

        if let Err(e) = self.store.clear() {
            error!(error = %e, "Failed to clear rejected credential");
        }

        if let Some(events) = &self.events {
            // Unbounded channel: only fails once the app has shut down
            let _ = events.try_send(AppEvent::SessionExpired);
        }

        true
    }
}
