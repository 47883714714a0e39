//! # Session Controller
//!
//! Login, registration, logout and the startup profile check.
//!
//! Forms are validated locally first; nothing is sent for invalid input. A successful login or
//! registration stores the returned credential and publishes [`AppEvent::LoggedIn`].

use crate::app::events::AppEvent;
use crate::core::error::Result;
use crate::core::service::JournalApi;
use crate::services::session::CredentialStore;
use crate::utils::validation::{
    validate_display_name, validate_email, validate_new_password, validate_password,
};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{AuthResponse, RegisterRequest, UserProfile};
use std::sync::Arc;

pub const LOGIN_ERROR_MESSAGE: &str = "Invalid email or password.";
pub const REGISTER_ERROR_MESSAGE: &str = "Registration failed. Please try a different email.";

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub error: Option<String>,
}

pub struct SessionController {
    api: Arc<dyn JournalApi>,
    store: Arc<dyn CredentialStore>,
    events: Option<Sender<AppEvent>>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionController {
    pub fn new(api: Arc<dyn JournalApi>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            api,
            store,
            events: None,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    pub fn with_events(mut self, events: Sender<AppEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }

    /// Log in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let email = email.trim();
        let checks = [validate_email(email), validate_password(password)];
        if let Some(message) = checks.into_iter().find_map(|check| check.error) {
            self.set_error(message);
            return false;
        }

        let result = self.api.login(email, password).await;
        self.complete(result, LOGIN_ERROR_MESSAGE)
    }

    /// Create an account. The server logs the new user in directly.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> bool {
        let request = RegisterRequest {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let checks = [
            validate_display_name(&request.username),
            validate_email(&request.email),
            validate_new_password(&request.password),
        ];
        if let Some(message) = checks.into_iter().find_map(|check| check.error) {
            self.set_error(message);
            return false;
        }

        let result = self.api.register(&request).await;
        self.complete(result, REGISTER_ERROR_MESSAGE)
    }

    fn complete(&self, result: Result<AuthResponse>, fallback: &str) -> bool {
        let saved = result.and_then(|auth| self.store.save(&auth.access_token));
        match saved {
            Ok(()) => {
                tracing::info!("Session started");
                self.state.write().error = None;
                self.publish(AppEvent::LoggedIn);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Authentication failed");
                self.set_error(err.user_message(fallback));
                false
            }
        }
    }

    /// Forget the credential and the cached profile.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        *self.state.write() = SessionState::default();
        tracing::info!("Logged out");
        self.publish(AppEvent::LoggedOut);
        Ok(())
    }

    /// Single profile fetch at startup. `None` means the session is not usable; a rejected
    /// credential has already been cleared by the API client.
    pub async fn bootstrap(&self) -> Option<UserProfile> {
        if !self.is_authenticated() {
            return None;
        }

        match self.api.get_profile().await {
            Ok(user) => {
                self.state.write().user = Some(user.clone());
                Some(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Session bootstrap failed");
                self.state.write().user = None;
                None
            }
        }
    }

    fn set_error(&self, message: String) {
        self.state.write().error = Some(message);
    }

    fn publish(&self, event: AppEvent) {
        if let Some(events) = &self.events {
            if events.try_send(event).is_err() {
                tracing::debug!(?event, "Event channel closed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock_api::MockJournalApi;
    use crate::core::error::AppError;
    use crate::services::session::MemoryCredentialStore;
    use shared::Role;

    struct Fixture {
        api: Arc<MockJournalApi>,
        store: Arc<MemoryCredentialStore>,
        events: async_channel::Receiver<AppEvent>,
        session: SessionController,
    }

    fn fixture() -> Fixture {
        let api = Arc::new(MockJournalApi::new(Role::Trader));
        let store = Arc::new(MemoryCredentialStore::new());
        let (tx, rx) = async_channel::unbounded();
        let session = SessionController::new(api.clone(), store.clone()).with_events(tx);
        Fixture {
            api,
            store,
            events: rx,
            session,
        }
    }

    #[tokio::test]
    async fn test_login_stores_credential() {
        let f = fixture();
        assert!(!f.session.is_authenticated());

        assert!(f.session.login(" a@b.com ", "secret").await);

        assert_eq!(f.store.token().as_deref(), Some("token-a@b.com"));
        assert!(f.session.is_authenticated());
        assert_eq!(f.events.try_recv().ok(), Some(AppEvent::LoggedIn));
    }

    #[tokio::test]
    async fn test_login_validation_sends_nothing() {
        let f = fixture();

        assert!(!f.session.login("", "secret").await);
        assert_eq!(f.session.state().error.as_deref(), Some("Email is required"));

        assert!(!f.session.login("not-an-email", "secret").await);
        assert!(!f.session.login("a@b.com", "").await);
        assert_eq!(f.session.state().error.as_deref(), Some("Password is required"));

        assert!(f.api.calls().is_empty());
        assert!(f.events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_login_rejection_message() {
        let f = fixture();
        f.api.fail_next("login", AppError::Unauthorized { detail: None });

        assert!(!f.session.login("a@b.com", "wrong").await);
        assert_eq!(f.session.state().error.as_deref(), Some(LOGIN_ERROR_MESSAGE));
        assert!(f.store.token().is_none());

        f.api.fail_next(
            "login",
            AppError::Unauthorized {
                detail: Some("Incorrect email or password".to_string()),
            },
        );
        assert!(!f.session.login("a@b.com", "wrong").await);
        assert_eq!(
            f.session.state().error.as_deref(),
            Some("Incorrect email or password")
        );
    }

    #[tokio::test]
    async fn test_register_validation() {
        let f = fixture();

        assert!(!f.session.register("ab", "a@b.com", "secret").await);
        assert_eq!(
            f.session.state().error.as_deref(),
            Some("Display Name must be at least 3 chars")
        );
        assert!(!f.session.register("alice", "a@b.com", "short").await);
        assert!(f.api.calls().is_empty());

        assert!(f.session.register("alice", "a@b.com", "secret").await);
        assert_eq!(f.store.token().as_deref(), Some("token-alice"));
        assert!(f.session.state().error.is_none());
    }

    #[tokio::test]
    async fn test_register_conflict_keeps_detail() {
        let f = fixture();
        f.api.fail_next(
            "register",
            AppError::Api {
                status: 400,
                detail: Some("Email already registered".to_string()),
            },
        );

        assert!(!f.session.register("alice", "a@b.com", "secret").await);
        assert_eq!(
            f.session.state().error.as_deref(),
            Some("Email already registered")
        );

        f.api
            .fail_next("register", AppError::Network("connection refused".to_string()));
        assert!(!f.session.register("alice", "a@b.com", "secret").await);
        assert_eq!(
            f.session.state().error.as_deref(),
            Some(REGISTER_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let f = fixture();
        f.session.login("a@b.com", "secret").await;
        f.session.bootstrap().await;
        assert!(f.session.state().user.is_some());

        f.session.logout().unwrap();

        assert!(!f.session.is_authenticated());
        assert!(f.session.state().user.is_none());
        assert_eq!(f.events.try_recv().ok(), Some(AppEvent::LoggedIn));
        assert_eq!(f.events.try_recv().ok(), Some(AppEvent::LoggedOut));
    }

    #[tokio::test]
    async fn test_bootstrap_fetches_profile_once() {
        let f = fixture();
        assert!(f.session.bootstrap().await.is_none());
        assert_eq!(f.api.count("get_profile"), 0);

        f.store.save("token").unwrap();
        let user = f.session.bootstrap().await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(f.api.count("get_profile"), 1);

        f.api.fail_next("get_profile", AppError::Unauthorized { detail: None });
        assert!(f.session.bootstrap().await.is_none());
        assert!(f.session.state().user.is_none());
    }
}
