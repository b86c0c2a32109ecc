//! Broadcast timestamp parsing and display

use crate::error::{NewsroomError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Display format used in tables and listings
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a user-supplied timestamp.
///
/// Accepts a date with minutes, seconds or fractional seconds (space or `T`
/// separated), or a bare `YYYY-MM-DD` which resolves to midnight.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| NewsroomError::InvalidTimestamp(input.to_string()))
}

/// Format a timestamp for display
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}
