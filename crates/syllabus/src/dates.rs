//! Date parsing for collection ordering.
//!
//! Record dates stay raw strings; they are parsed only to order the
//! collection. Anything that does not parse orders like a missing date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parse a header date into a UTC timestamp.
///
/// Accepts RFC 3339 and RFC 2822 timestamps, naive date-times (taken as
/// UTC), and plain dates (midnight UTC) such as `2024-06-01`,
/// `2024/06/01` or `June 1, 2024`. A bare four-digit year such as `2024`
/// is taken as January 1 of that year. Returns `None` for blank or
/// unrecognized input.
///
/// # Example
///
/// ```rust
/// use syllabus::dates::parse_date;
///
/// assert!(parse_date("2024-06-01").is_some());
/// assert!(parse_date("2024-06-01T10:30:00Z").is_some());
/// assert!(parse_date("soon").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.and_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| parse_year(raw))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// January 1 of a bare four-digit year. YAML reads `date: 2024` as an
/// integer, which reaches here as the string `"2024"`.
fn parse_year(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)
}
