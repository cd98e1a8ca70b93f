//! Date/time detection and canonicalization to Unix epoch seconds.
//!
//! A field is temporal when one of the catalog patterns matches it in
//! full. Matches canonicalize as UTC so the rendered epoch seconds are
//! identical on every host; the parser is pure and needs no locking.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::constants::DATE_TIME_FORMATS;
use crate::error::{PrepError, Result};

/// Try each catalog pattern in order; a match must consume the whole
/// token. Returns epoch seconds for the first match.
pub fn parse_datetime(token: &str) -> Option<i64> {
    for format in DATE_TIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(token, format) {
            return Some(datetime.and_utc().timestamp());
        }
    }
    None
}

/// Strict variant: unmatched tokens are an error.
pub fn epoch_seconds(token: &str) -> Result<i64> {
    parse_datetime(token).ok_or_else(|| PrepError::UnmatchedTemporalFormat {
        value: token.to_string(),
    })
}

/// Per-field mask of which fields hold a recognizable date/time.
pub fn datetime_field_mask(record: &str, delimiter: char) -> Vec<bool> {
    record
        .split(delimiter)
        .map(|field| parse_datetime(field).is_some())
        .collect()
}

/// Replace every temporal field with its epoch-seconds rendering.
///
/// Non-temporal fields pass through untouched; field order and count
/// are preserved.
pub fn replace_datetimes(record: &str, delimiter: char) -> String {
    let mut replaced = 0usize;
    let fields: Vec<String> = record
        .split(delimiter)
        .map(|field| match parse_datetime(field) {
            Some(epoch) => {
                replaced += 1;
                epoch.to_string()
            }
            None => field.to_string(),
        })
        .collect();
    if replaced > 0 {
        debug!(replaced, "canonicalized date/time fields");
    }
    fields.join(&delimiter.to_string())
}
