//! Measurement unit extraction from field suffixes.
//!
//! A field like `9.8 m/s^2` splits into its leading numeric literal and
//! a trailing unit symbol looked up in the catalog. The numeric prefix
//! grammar allows a sign, digits with an optional fractional part, an
//! exponent whose marker may be preceded by a single space, and one
//! trailing space before the unit.

use crate::constants::is_known_unit;

/// Byte length of the leading numeric literal, 0 when the field does
/// not start with one.
pub fn numeric_prefix_len(field: &str) -> usize {
    let bytes = field.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let integer_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > integer_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            has_digits = true;
            i = j;
        } else if has_digits {
            // bare trailing point, as in "5."
            i = j;
        }
    }

    if !has_digits {
        return 0;
    }

    // Exponent marker, optionally preceded by one space.
    let mut j = i;
    if j < bytes.len() && bytes[j] == b' ' {
        j += 1;
    }
    if j < bytes.len() && (bytes[j] == b'e' || bytes[j] == b'E') {
        let mut k = j + 1;
        if k < bytes.len() && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        let exponent_start = k;
        while k < bytes.len() && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > exponent_start {
            i = k;
        }
    }

    // One trailing space separating the literal from its unit.
    if i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    i
}

/// Split a field into its numeric literal and catalog unit suffix.
pub fn split_unit(field: &str) -> Option<(&str, &str)> {
    let prefix_len = numeric_prefix_len(field);
    if prefix_len == 0 || prefix_len >= field.len() {
        return None;
    }
    let suffix = &field[prefix_len..];
    if is_known_unit(suffix) {
        Some((field[..prefix_len].trim_end(), suffix))
    } else {
        None
    }
}

/// Per-field unit extraction for one record: each field's value with
/// any unit suffix stripped, paired with the unit itself. Fields
/// without a recognizable unit pass through unchanged.
pub fn extract_units(record: &str, delimiter: char) -> Vec<(String, Option<String>)> {
    record
        .split(delimiter)
        .map(|field| match split_unit(field) {
            Some((value, unit)) => (value.to_string(), Some(unit.to_string())),
            None => (field.to_string(), None),
        })
        .collect()
}
