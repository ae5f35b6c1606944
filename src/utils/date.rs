//! Date parsing for DATE values.
//!
//! GEDCOM dates are written `DD MON YYYY` (`01 JAN 1950`). Month names are
//! matched case-insensitively.

use chrono::NaiveDate;

/// Default GEDCOM date layout
pub const GEDCOM_DATE_FORMAT: &str = "%d %b %Y";

/// Configuration for string-to-date conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatConfig {
    /// Formats tried in order
    pub date_formats: Vec<String>,
    /// Fall back to guessing the layout from the string shape
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![GEDCOM_DATE_FORMAT.to_string()],
            enable_format_detection: false,
        }
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() == 3
        && parts[1].len() == 3
        && parts[1].chars().all(|c| c.is_ascii_alphabetic())
    {
        return Some(GEDCOM_DATE_FORMAT);
    }

    // ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d");
    }

    // Compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}

/// Signed distance in days from `from` to `to`
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Absolute distance in days between two dates
#[must_use]
pub fn day_gap(a: NaiveDate, b: NaiveDate) -> i64 {
    days_between(a, b).abs()
}
