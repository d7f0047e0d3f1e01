// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string, date and number processing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Normalize a string for tokenization: lowercase, then turn every character that is
/// neither alphanumeric nor whitespace into a space.
///
/// - "Node.js" → "node js"
/// - "C++/Rust" → "c   rust"
///
/// Whitespace is not collapsed here; [`tokenize`](crate::tokenize) splits on runs.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Parse a metadata date.
///
/// Accepts RFC 3339 (`2024-06-01T09:30:00+05:30`), a naive timestamp
/// (`2024-06-01T09:30:00`, read as UTC) or a bare date (`2024-06-01`, midnight UTC).
/// Anything else is `None`, which every caller treats as "no date".
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the epoch for an optional metadata date; missing or
/// unparseable dates sort as the epoch itself.
pub fn date_sort_key(value: Option<&str>) -> i64 {
    value
        .and_then(parse_date)
        .map_or(0, |date| date.timestamp_millis())
}

/// Leading numeric run of a salary string, thousands separators stripped.
///
/// - "12,00,000 INR" → 1200000
/// - "₹8,50,000 - 10,00,000" → 850000
/// - "Competitive" → 0
pub fn parse_salary(value: &str) -> u64 {
    let stripped: String = value.chars().filter(|c| *c != ',').collect();
    let digits: String = stripped
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
#[inline]
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
