//! Date and time helpers for the API's due descriptors.
//!
//! Due dates arrive as `YYYY-MM-DD`; due timestamps as RFC3339 strings.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Date format used by the Todoist API for all-day due dates
pub const TODOIST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, TODOIST_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(TODOIST_DATE_FORMAT).to_string()
}

/// Parse an RFC3339 timestamp, keeping its offset.
///
/// Floating timestamps without an offset (`2025-01-15T14:30:00`) are rejected.
pub fn parse_rfc3339(datetime_str: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(datetime_str)
}
