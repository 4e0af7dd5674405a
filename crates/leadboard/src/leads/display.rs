//! Date rendering helpers that never fail.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;

pub const INVALID_DATE: &str = "Invalid date";

/// `Mar 4, 2025`
pub const DATE_PATTERN: &str = "%b %-d, %Y";
/// `Mar 4, 9:05 PM`
pub const CAPTURE_PATTERN: &str = "%b %-d, %-I:%M %p";

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Formats a timestamp with a chrono pattern; bad patterns yield [`INVALID_DATE`].
pub fn format_datetime(at: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", at.format(pattern)) {
        Ok(()) => out,
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Formats a raw timestamp string, falling back to [`INVALID_DATE`].
pub fn format_timestamp(raw: &str, pattern: &str) -> String {
    match parse_timestamp(raw) {
        Some(at) => format_datetime(at, pattern),
        None => INVALID_DATE.to_string(),
    }
}

/// Formats `primary` when it parses, otherwise `secondary`, otherwise [`INVALID_DATE`].
pub fn format_with_fallback(primary: Option<&str>, secondary: &str, pattern: &str) -> String {
    match primary.and_then(parse_timestamp) {
        Some(at) => format_datetime(at, pattern),
        None => format_timestamp(secondary, pattern),
    }
}

/// Coarse "time ago" string relative to `now`.
pub fn relative_age(raw: &str, now: DateTime<Utc>) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return INVALID_DATE.to_string();
    };

    let elapsed = now.signed_duration_since(at);
    let (amount, unit) = if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    format!("{amount} {unit}{} ago", if amount == 1 { "" } else { "s" })
}
