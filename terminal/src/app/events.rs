//! # Application Events
//!
//! Events published by the session layer and consumed by navigation.

/// Session lifecycle events delivered over the app's event channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The API rejected the stored credential; it has been cleared
    SessionExpired,
    /// Login or registration stored a fresh credential
    LoggedIn,
    /// The user logged out
    LoggedOut,
}
