//! Validation utilities for user input

use crate::core::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const MIN_DISPLAY_NAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, failing with [`AppError::Validation`].
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate email format (`something@domain.tld`, no whitespace)
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let valid = match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    };

    if !valid {
        return ValidationResult::err("Please enter a valid email address");
    }

    ValidationResult::ok()
}

/// Validate the login password (presence only; strength is the server's business)
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }
    ValidationResult::ok()
}

/// Validate a password chosen at registration
pub fn validate_new_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate the display name chosen at registration
pub fn validate_display_name(username: &str) -> ValidationResult {
    if username.trim().is_empty() {
        return ValidationResult::err("Display Name is required");
    }

    if username.chars().count() < MIN_DISPLAY_NAME_LEN {
        return ValidationResult::err(format!(
            "Display Name must be at least {} chars",
            MIN_DISPLAY_NAME_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate a ticker symbol
pub fn validate_symbol(symbol: &str) -> ValidationResult {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return ValidationResult::err("Symbol is required");
    }

    if symbol.chars().any(char::is_whitespace) {
        return ValidationResult::err("Symbol cannot contain spaces");
    }

    ValidationResult::ok()
}

/// Validate a quantity or price that must be strictly positive
pub fn validate_positive(field: &str, value: f64) -> ValidationResult {
    if !value.is_finite() || value <= 0.0 {
        return ValidationResult::err(format!("{} must be greater than 0", field));
    }
    ValidationResult::ok()
}

/// Normalize a user-entered date or date-time to `YYYY-MM-DDTHH:MM:SS`.
///
/// Accepts RFC 3339 (returned unchanged), `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`
/// and bare dates (midnight).
pub fn normalize_timestamp(input: &str) -> Result<String> {
    let input = input.trim();

    if DateTime::parse_from_rfc3339(input).is_ok() {
        return Ok(input.to_string());
    }

    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(format!("{}T00:00:00", date.format("%Y-%m-%d")));
    }

    Err(AppError::Validation(format!(
        "Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM",
        input
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user+tag@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("test@example").is_valid);
        assert!(!validate_email("te st@example.com").is_valid);
    }

    #[test]
    fn test_display_name_validation() {
        assert!(validate_display_name("alice").is_valid);
        assert!(validate_display_name("Al Ice").is_valid);
        assert!(!validate_display_name("ab").is_valid); // too short
        assert!(!validate_display_name("   ").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("x").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(validate_new_password("secret").is_valid);
        assert!(!validate_new_password("short").is_valid);
    }

    #[test]
    fn test_trade_field_validation() {
        assert!(validate_symbol("AAPL").is_valid);
        assert!(!validate_symbol("").is_valid);
        assert!(!validate_symbol("BRK B").is_valid);
        assert!(validate_positive("Quantity", 0.5).is_valid);
        assert!(!validate_positive("Quantity", 0.0).is_valid);
        assert!(!validate_positive("Quantity", -1.0).is_valid);
        assert!(!validate_positive("Quantity", f64::NAN).is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(validate_email("a@b.com").into_result().is_ok());
        match validate_email("nope").into_result() {
            Err(AppError::Validation(message)) => {
                assert_eq!(message, "Please enter a valid email address")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_timestamp() {
        assert_eq!(normalize_timestamp("2024-03-02").unwrap(), "2024-03-02T00:00:00");
        assert_eq!(
            normalize_timestamp("2024-03-02T09:30").unwrap(),
            "2024-03-02T09:30:00"
        );
        assert_eq!(
            normalize_timestamp("2024-03-02 09:30:15").unwrap(),
            "2024-03-02T09:30:15"
        );
        assert_eq!(
            normalize_timestamp("2024-03-02T09:30:00+02:00").unwrap(),
            "2024-03-02T09:30:00+02:00"
        );
        assert!(normalize_timestamp("yesterday").is_err());
        assert!(normalize_timestamp("2024-13-01").is_err());
    }
}
