//! Date/time normalization with passthrough
//!
//! Date composites carry a format qualifier next to the value. A value in
//! a recognized format is re-rendered in ISO-like display form; a value
//! whose length or content does not match its declared format passes
//! through unchanged. `reformat` keeps the two cases distinguishable:
//! `None` means "not recognized or malformed", never a hard error.

use chrono::{NaiveDate, NaiveDateTime};

/// Re-render a qualified date value, absent when the format qualifier is
/// unknown or the value does not parse under it.
///
/// Format 203 is `yyyymmddHHMM`, 204 is `yyyymmddHHMMSS`, 102 is
/// `yyyymmdd`; a length mismatch disqualifies the value outright.
pub fn reformat(value: &str, format_code: &str) -> Option<String> {
    match format_code {
        "203" if value.len() == 12 => NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M")
            .ok()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string()),
        "204" if value.len() == 14 => NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M%S")
            .ok()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        "102" if value.len() == 8 => NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .map(|d| d.format("%Y-%m-%d").to_string()),
        _ => None,
    }
}

/// Re-render a qualified date value, falling back to the raw text.
pub fn reformat_lossy(value: &str, format_code: &str) -> String {
    reformat(value, format_code).unwrap_or_else(|| value.to_string())
}

/// Normalize an interchange preparation stamp (`yymmdd:HHMM`, two-digit
/// year); absent when there is no time part or the value does not parse.
pub fn interchange_stamp(raw: &str) -> Option<String> {
    let (date, time) = raw.split_once(':')?;
    NaiveDateTime::parse_from_str(&format!("{date}{time}"), "%y%m%d%H%M")
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}
