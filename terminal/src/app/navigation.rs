//! # Navigation
//!
//! Screens, their route paths and the guards that decide where a request for a screen lands.
//!
//! | Screen    | Path             | Access      |
//! |-----------|------------------|-------------|
//! | Landing   | `/`              | public only |
//! | Login     | `/auth/login`    | public only |
//! | Register  | `/auth/register` | public only |
//! | Dashboard | `/dashboard`     | protected   |
//! | Journal   | `/journal`       | protected   |

use crate::app::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Landing,
    Login,
    Register,
    Dashboard,
    Journal,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Landing,
            Screen::Login,
            Screen::Register,
            Screen::Dashboard,
            Screen::Journal,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Landing => "/",
            Screen::Login => "/auth/login",
            Screen::Register => "/auth/register",
            Screen::Dashboard => "/dashboard",
            Screen::Journal => "/journal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Welcome",
            Screen::Login => "Log In",
            Screen::Register => "Create Account",
            Screen::Dashboard => "Dashboard",
            Screen::Journal => "Trade Journal",
        }
    }

    /// Screen for a route path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Screen> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Screen::all()
            .iter()
            .copied()
            .find(|screen| screen.path() == normalized)
    }

    /// Requires a stored credential
    pub fn is_protected(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::Journal)
    }

    /// Only reachable without a credential
    pub fn is_public_only(&self) -> bool {
        !self.is_protected()
    }

    /// Where a request for this screen lands given the session state.
    pub fn guard(self, authenticated: bool) -> Screen {
        match (self.is_protected(), authenticated) {
            (true, false) => Screen::Landing,
            (false, true) => Screen::Dashboard,
            _ => self,
        }
    }

    /// Guarded resolution of a route path; unknown paths land on [`Screen::Landing`].
    pub fn resolve(path: &str, authenticated: bool) -> Screen {
        Screen::from_path(path)
            .unwrap_or(Screen::Landing)
            .guard(authenticated)
    }

    /// Screen a session event forces.
    pub fn for_event(event: AppEvent) -> Screen {
        match event {
            AppEvent::SessionExpired => Screen::Login,
            AppEvent::LoggedIn => Screen::Dashboard,
            AppEvent::LoggedOut => Screen::Landing,
        }
    }
}
