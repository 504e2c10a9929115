//! Polars AnyValue utility functions.
//!
//! Helpers for working with string-typed frames: cell extraction, missing-value
//! checks, and numeric parsing/formatting.

use polars::prelude::{AnyValue, DataFrame};

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::Boolean(b) => if b { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

/// The missing-value sentinel: a cell is missing when it is null or its
/// string content trims to empty. Applied uniformly by fill-forward and
/// normalization.
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// String content of one cell, empty when the cell is null or the column is
/// absent.
pub fn cell_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(column) => any_to_string(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_strips_trailing_zeros() {
        assert_eq!(format_numeric(1.70), "1.7");
        assert_eq!(format_numeric(170.0), "170");
        assert_eq!(format_numeric(2.5), "2.5");
    }

    #[test]
    fn missing_is_trim_empty() {
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(!is_missing("0"));
    }

    #[test]
    fn parse_f64_rejects_empty_and_garbage() {
        assert_eq!(parse_f64(" 170 "), Some(170.0));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("tall"), None);
    }
}
