//! Field type inference and dataset-wide consensus.
//!
//! Tokens classify as numeric when they parse in full as a double; the
//! lone `-` is the missing-value sentinel and never numeric. A column's
//! consensus type is the most common per-record classification, with
//! ties broken toward the classification seen first.

use tracing::debug;

use crate::constants::sentinels;
use crate::models::{FieldType, Value};
use crate::scan::TokenCursor;

/// Whether the entire token parses as a numeric value.
pub fn is_numeric(token: &str) -> bool {
    if token.is_empty() || token == sentinels::MISSING {
        return false;
    }
    token.parse::<f64>().is_ok()
}

pub fn classify(token: &str) -> FieldType {
    if is_numeric(token) {
        FieldType::Numeric
    } else {
        FieldType::NonNumeric
    }
}

/// Parse a token into a tagged value.
pub fn parse_value(token: &str) -> Value {
    if token == sentinels::MISSING {
        return Value::Missing;
    }
    match token.parse::<f64>() {
        Ok(number) if !token.is_empty() => Value::Number(number),
        _ => Value::Text(token.to_string()),
    }
}

/// Classify each field of a single record.
pub fn classify_record(record: &str, delimiter: char) -> Vec<FieldType> {
    let delimiters = [delimiter];
    TokenCursor::new(record, &delimiters).map(classify).collect()
}

/// Consensus type per column across all data records.
///
/// Records shorter than `field_count` contribute votes only for the
/// columns they cover.
pub fn consensus_types<'a, I>(records: I, delimiter: char, field_count: usize) -> Vec<FieldType>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut numeric = vec![0usize; field_count];
    let mut non_numeric = vec![0usize; field_count];
    let mut winners: Vec<Option<FieldType>> = vec![None; field_count];

    for record in records {
        for (column, field_type) in classify_record(record, delimiter)
            .into_iter()
            .take(field_count)
            .enumerate()
        {
            let (own, other) = match field_type {
                FieldType::Numeric => (&mut numeric[column], non_numeric[column]),
                FieldType::NonNumeric => (&mut non_numeric[column], numeric[column]),
            };
            *own += 1;
            match winners[column] {
                None => winners[column] = Some(field_type),
                Some(current) if current != field_type && *own > other => {
                    winners[column] = Some(field_type)
                }
                _ => {}
            }
        }
    }

    let scheme: Vec<FieldType> = winners
        .into_iter()
        .map(|w| w.unwrap_or(FieldType::NonNumeric))
        .collect();
    debug!(?scheme, "derived consensus type scheme");
    scheme
}
