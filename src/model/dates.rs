//! Timestamp parsing and display for backend `created_at` values.
//!
//! The backend emits ISO-8601 timestamps, sometimes without an offset.
//! Anything that does not parse is reported as `None`, which the feed
//! treats as the oldest possible date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp.
///
/// Accepts RFC 3339, naive date-times (assumed UTC) and plain dates
/// (midnight UTC). Returns `None` for empty or malformed input.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Long display form used on cards, e.g. `January 2, 2024`.
pub fn display_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(
        || "Unknown date".to_string(),
        |d| d.format("%B %-d, %Y").to_string(),
    )
}
