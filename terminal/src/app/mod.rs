//! # Application Orchestrator
//!
//! The [`App`] struct wires configuration, the credential store, the API client and the
//! Data-Sync controllers together, and tracks the current [`Screen`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (orchestrator)                                         │
//! │  - navigate()        guarded screen changes                 │
//! │  - process_events()  applies session events to the screen   │
//! │                                                             │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────────────┐ │
//! │  │  Session     │ │  Dashboard   │ │  Journal             │ │
//! │  │  Controller  │ │  Controller  │ │  Controller          │ │
//! │  └──────┬───────┘ └──────┬───────┘ └──────────┬───────────┘ │
//! │         └────────────────┼────────────────────┘             │
//! │                          │ Arc<dyn JournalApi>              │
//! │  ┌───────────────────────▼──────────────────────────────┐   │
//! │  │  ApiClient + AuthInterceptor                         │   │
//! │  └───────────────────────┬──────────────────────────────┘   │
//! └──────────────────────────┼──────────────────────────────────┘
//!                            │ async_channel (unbounded)
//!                            ▼
//!            AppEvent::{SessionExpired, LoggedIn, LoggedOut}
//! ```
//!
//! Session events are produced by the interceptor (401 outside the auth endpoints) and by the
//! session controller; [`App::process_events`] drains them and moves to the screen each one forces.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use journal_terminal::app::{App, Screen};
//! use journal_terminal::core::ClientConfig;
//!
//! # async fn run() -> journal_terminal::core::Result<()> {
//! let mut app = App::new(ClientConfig::from_env()?)?;
//!
//! if app.navigate("/dashboard") == Screen::Dashboard {
//!     app.dashboard().load().await;
//! }
//!
//! // A rejected credential lands on the login screen
//! app.process_events();
//! println!("now on {}", app.screen().path());
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod events;
pub mod journal;
pub mod mutations;
pub mod navigation;
pub mod session;

#[cfg(test)]
pub(crate) mod mock_api;

pub use dashboard::{DashboardController, DashboardState, LoadStatus};
pub use events::AppEvent;
pub use journal::{JournalController, JournalState, TradeFilter};
pub use mutations::TradeMutation;
pub use navigation::Screen;
pub use session::{SessionController, SessionState};

use crate::core::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::JournalApi;
use crate::services::api::ApiClient;
use crate::services::session::{CredentialStore, FileCredentialStore};
use async_channel::{unbounded, Receiver};
use std::sync::Arc;

/// Main application orchestrator.
pub struct App {
    config: ClientConfig,
    store: Arc<dyn CredentialStore>,
    api: Arc<dyn JournalApi>,
    events: Receiver<AppEvent>,
    screen: Screen,
    session: SessionController,
    dashboard: DashboardController,
    journal: JournalController,
}

impl App {
    /// Build the app with the file-backed credential store from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let store = Arc::new(FileCredentialStore::new(config.credentials_file.clone()));
        Self::with_store(config, store)
    }

    /// Build the app around an existing credential store.
    pub fn with_store(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let (event_tx, event_rx) = unbounded();

        let client = ApiClient::new(&config, store.clone())?.with_events(event_tx.clone());
        let api: Arc<dyn JournalApi> = Arc::new(client);

        let session = SessionController::new(api.clone(), store.clone()).with_events(event_tx);
        let dashboard = DashboardController::new(api.clone());
        let journal = JournalController::new(api.clone());

        tracing::debug!(api_url = %config.api_url, "App initialized");

        Ok(Self {
            config,
            store,
            api,
            events: event_rx,
            screen: Screen::Landing,
            session,
            dashboard,
            journal,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Direct access to the resource services, for one-off reads outside the controllers
    pub fn api(&self) -> &Arc<dyn JournalApi> {
        &self.api
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }

    /// Move to the screen at `path`, applying the route guards. Returns where the app landed.
    pub fn navigate(&mut self, path: &str) -> Screen {
        let target = Screen::resolve(path, self.is_authenticated());
        if target != self.screen {
            tracing::debug!(from = self.screen.path(), to = target.path(), "Navigate");
        }
        self.screen = target;
        target
    }

    /// Guarded move to `screen`.
    pub fn show(&mut self, screen: Screen) -> Screen {
        self.navigate(screen.path())
    }

    /// Drain pending session events, moving to the screen each one forces.
    ///
    /// Returns the events processed, in order.
    pub fn process_events(&mut self) -> Vec<AppEvent> {
        let mut processed = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            let target = Screen::for_event(event);
            tracing::info!(?event, screen = target.path(), "Session event");
            self.screen = target;
            processed.push(event);
        }
        processed
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn dashboard(&self) -> &DashboardController {
        &self.dashboard
    }

    pub fn journal(&self) -> &JournalController {
        &self.journal
    }
}
