use chrono::{TimeZone, Utc};

use super::common::now;
use crate::leads::display::{
    format_datetime, format_timestamp, format_with_fallback, parse_timestamp, relative_age,
    CAPTURE_PATTERN, DATE_PATTERN, INVALID_DATE,
};

#[test]
fn formats_valid_timestamps() {
    assert_eq!(
        format_timestamp("2025-03-04T21:05:00Z", DATE_PATTERN),
        "Mar 4, 2025"
    );
    assert_eq!(
        format_timestamp("2025-03-04T21:05:00Z", CAPTURE_PATTERN),
        "Mar 4, 9:05 PM"
    );
    assert_eq!(format_timestamp("2025-03-04", DATE_PATTERN), "Mar 4, 2025");
}

#[test]
fn invalid_input_degrades_to_placeholder() {
    assert_eq!(format_timestamp("not a date", DATE_PATTERN), INVALID_DATE);
    assert_eq!(format_timestamp("", DATE_PATTERN), INVALID_DATE);
    assert!(parse_timestamp("2025-13-40").is_none());
}

#[test]
fn fallback_uses_secondary_when_primary_invalid() {
    assert_eq!(
        format_with_fallback(Some("garbage"), "2025-03-04T10:00:00Z", DATE_PATTERN),
        "Mar 4, 2025"
    );
    assert_eq!(
        format_with_fallback(None, "2025-03-04T10:00:00Z", DATE_PATTERN),
        "Mar 4, 2025"
    );
    assert_eq!(
        format_with_fallback(Some("2025-01-02"), "garbage", DATE_PATTERN),
        "Jan 2, 2025"
    );
    assert_eq!(
        format_with_fallback(Some("garbage"), "also garbage", DATE_PATTERN),
        INVALID_DATE
    );
}

#[test]
fn bad_pattern_does_not_panic() {
    let at = Utc
        .with_ymd_and_hms(2025, 3, 4, 9, 0, 0)
        .single()
        .expect("valid time");
    assert_eq!(format_datetime(at, "%Q"), INVALID_DATE);
}

#[test]
fn relative_age_counts_back_from_reference() {
    assert_eq!(relative_age("2025-03-10T14:30:00Z", now()), "2 days ago");
    assert_eq!(relative_age("2025-03-12T13:30:00Z", now()), "1 hour ago");
    assert_eq!(relative_age("2025-03-12T14:29:30Z", now()), "just now");
    assert_eq!(relative_age("yesterday", now()), INVALID_DATE);
}
