//! Date handling for SEO documents
//!
//! The backend serves dates either as RFC 3339 timestamps or bare
//! `YYYY-MM-DD` strings; sitemaps want W3C dates and RSS wants RFC 2822.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a backend date string into UTC. Accepts RFC 3339 and `YYYY-MM-DD`.
#[must_use]
pub fn parse_backend_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Format a backend date as a W3C `lastmod` value (`YYYY-MM-DD`).
#[must_use]
pub fn w3c_date(raw: &str) -> Option<String> {
    parse_backend_date(raw).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Format a backend date as an RFC 2822 `pubDate` value.
#[must_use]
pub fn rfc2822_date(raw: &str) -> Option<String> {
    parse_backend_date(raw).map(|dt| dt.to_rfc2822())
}
