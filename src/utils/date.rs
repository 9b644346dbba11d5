use chrono::{DateTime, Utc};

/// Formats a backend timestamp for the "Date Posted" column.
///
/// Dates render as `YYYY-MM-DD` in UTC so sorting the column by its text
/// also sorts it chronologically. Anything that is not RFC 3339 is shown
/// as received.
pub fn display_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
