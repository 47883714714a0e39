use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Grant type the login endpoint expects in its form body.
pub const PASSWORD_GRANT: &str = "password";

/// Registration request (JSON body of `POST /auth/register`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request, sent form-urlencoded to `POST /auth/login`.
///
/// The backend follows the OAuth2 password flow, so the user's email travels under the
/// `username` key. Field order is the wire order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginForm {
    pub grant_type: String,
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Build the password-grant form for an email/password pair.
    pub fn password_grant(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            grant_type: PASSWORD_GRANT.to_string(),
            username: email.into(),
            password: password.into(),
        }
    }
}

/// Token issued by login and registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Platform role of a user.
///
/// Parsed case-insensitively: `"Admin"` and `"ADMIN"` are admins, every other value is a trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Trader,
    Admin,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Trader
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Trader => "trader",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Role::parse).unwrap_or_default())
    }
}

/// Current user (`GET /users/me`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Error body returned by the API.
///
/// `detail` is a plain string for business errors (`"Trade with ID ... not found"`) and a list of
/// `{loc, msg, type}` items for request validation failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Human-readable detail, if the server sent one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
