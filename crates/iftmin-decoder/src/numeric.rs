//! Lenient numeric parsing
//!
//! Source numerals may use a decimal comma. Parsing never fails hard: an
//! unparseable value is reported as absent so the owning field stays unset.

/// Replace every comma flanked by digits with a decimal point.
///
/// Only digit-adjacent commas are rewritten, so grouping text like
/// "Bolgesi, Nokra" passes through untouched.
pub fn normalize_decimal_comma(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.char_indices() {
        let flanked = c == ','
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        out.push(if flanked { '.' } else { c });
    }
    out
}

/// Parse a possibly decimal-comma numeral; absent when empty or unparseable.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    normalize_decimal_comma(value).parse().ok()
}

/// Parse an integer count, truncating any fraction; zero when unparseable.
pub fn parse_count(value: &str) -> i64 {
    parse_decimal(value).unwrap_or(0.0) as i64
}
