//! # Session Credential Store
//!
//! Persistence for the bearer credential issued at login/registration.
//!
//! The credential lives in a small JSON key-value file under the fixed key
//! [`ACCESS_TOKEN_KEY`]. Every outbound request reads it, logout and the 401 interceptor delete it,
//! login and registration write it. Unknown keys in the file are preserved.
//!
//! ```text
//! .journal/session.json
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

use crate::core::error::{AppError, Result};
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage key of the bearer credential
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Process-wide storage for the session credential.
pub trait CredentialStore: Send + Sync {
    /// Stored credential, if any
    fn token(&self) -> Option<String>;

    /// Replace the stored credential
    fn save(&self, token: &str) -> Result<()>;

    /// Forget the stored credential. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// Credential store backed by a JSON file.
pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) | Err(_) => Err(AppError::Storage(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Storage(format!("Failed to encode credential file: {}", e)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn token(&self) -> Option<String> {
        let _guard = self.lock.lock();
        match self.read_entries() {
            Ok(entries) => entries
                .get(ACCESS_TOKEN_KEY)
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "Unreadable credential store");
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        let _guard = self.lock.lock();
        // A corrupt file is replaced rather than blocking login
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(ACCESS_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Credential stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries().unwrap_or_default();
        if entries.remove(ACCESS_TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Credential cleared");
        Ok(())
    }
}

/// In-memory credential store.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}
