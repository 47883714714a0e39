//! # Shared Utility Functions
//!
//! Display formatting used by the journal views.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_pnl, format_price, short_id};
//!
//! assert_eq!(format_pnl(1234.5), "+$1,234.50");
//! assert_eq!(format_price(0.5), "$0.50");
//! assert_eq!(short_id("3f2b9c1e-77aa-4c1d-9f0e-1b2c3d4e5f60"), "3f2b9c1e");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Group the integer part of a non-negative amount with thousands separators, two decimals.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{}", grouped, fraction)
}

/// Format a price as dollars, e.g. `$1,250.00`.
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", group_thousands(value))
    } else {
        format!("${}", group_thousands(value))
    }
}

/// Format a realized P&L with an explicit sign, e.g. `+$120.00` / `-$45.50`.
pub fn format_pnl(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", group_thousands(value))
    } else {
        format!("+${}", group_thousands(value))
    }
}

/// Format an optional P&L, showing a dash while the trade is open.
pub fn format_optional_pnl(value: Option<f64>) -> String {
    value.map(format_pnl).unwrap_or_else(|| "-".to_string())
}

/// Format a 0-100 percentage with one decimal, e.g. `62.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Leading segment of an identifier for compact tables.
pub fn short_id(id: &str) -> &str {
    match id.find('-') {
        Some(end) if end > 0 => &id[..end],
        _ if id.len() > 8 && id.is_char_boundary(8) => &id[..8],
        _ => id,
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a server timestamp: RFC 3339, naive ISO-8601 (with or without fractional seconds), or
/// a bare date at midnight.
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.naive_utc());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Calendar date of a server timestamp (`2024-03-02T10:00:00` -> `2024-03-02`).
///
/// Unparseable input is shown as received.
pub fn format_date(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(parsed) => parsed.format(DATE_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}
