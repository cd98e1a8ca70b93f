//! Record sanitization pipeline.
//!
//! Four ordered stages: trim, prune internal whitespace, repair repeated
//! delimiters, canonicalize date/time fields. Each stage is best-effort;
//! an unusable stage result falls back to the last good form, so a
//! record is degraded rather than rejected.

use tracing::debug;

use crate::constants::sentinels;
use crate::temporal::replace_datetimes;

/// Remove every whitespace character, internal ones included.
pub fn prune_whitespace(record: &str) -> String {
    record.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Insert the placeholder token between adjacent delimiters so empty
/// fields survive tokenization.
pub fn repair_repeated_delimiters(record: &str, delimiter: char) -> String {
    let mut repaired = String::with_capacity(record.len());
    let mut previous_was_delimiter = false;
    for c in record.chars() {
        if c == delimiter && previous_was_delimiter {
            repaired.push_str(sentinels::PLACEHOLDER);
        }
        repaired.push(c);
        previous_was_delimiter = c == delimiter;
    }
    repaired
}

/// Run the full sanitization pipeline over one record.
pub fn sanitize_record(record: &str, delimiter: char) -> String {
    let mut current = record.trim().to_string();
    if current.is_empty() {
        debug!("record empty after trim");
        return current;
    }

    let pruned = prune_whitespace(&current);
    if !pruned.is_empty() {
        current = pruned;
    }

    let repaired = repair_repeated_delimiters(&current, delimiter);
    if !repaired.is_empty() {
        current = repaired;
    }

    let canonicalized = replace_datetimes(&current, delimiter);
    if !canonicalized.is_empty() {
        current = canonicalized;
    }

    current
}

/// Sanitize every line of a dataset.
pub fn sanitize_records<'a, I>(lines: I, delimiter: char) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| sanitize_record(line, delimiter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_whitespace() {
        assert_eq!(prune_whitespace("a b\tc"), "abc");
        assert_eq!(prune_whitespace("  1, 2 ,3  "), "1,2,3");
    }

    #[test]
    fn test_repair_repeated_delimiters() {
        assert_eq!(repair_repeated_delimiters("a,,b", ','), "a,0,b");
        assert_eq!(repair_repeated_delimiters("a,,,b", ','), "a,0,0,b");
        assert_eq!(repair_repeated_delimiters("a,b", ','), "a,b");
    }

    #[test]
    fn test_repair_leaves_edges() {
        // Leading and trailing single delimiters are short-record
        // territory, not repair territory.
        assert_eq!(repair_repeated_delimiters(",a,b,", ','), ",a,b,");
    }

    #[test]
    fn test_sanitize_record() {
        assert_eq!(sanitize_record("  a, b ,,c  ", ','), "a,b,0,c");
    }

    #[test]
    fn test_sanitize_canonicalizes_dates() {
        // 1970-01-01 00:01 -> 60 seconds; internal whitespace is pruned
        // first, the compact form still matches.
        let record = "site_a,1970-01-01 00:01:00,42";
        assert_eq!(sanitize_record(record, ','), "site_a,60,42");
    }

    #[test]
    fn test_sanitize_twelve_hour_date() {
        let record = "06/01/2024 12:30 PM,5";
        assert_eq!(sanitize_record(record, ','), "1717245000,5");
    }

    #[test]
    fn test_sanitize_idempotent() {
        // A second pass has nothing left to do: no whitespace, no
        // adjacent delimiters, and epoch seconds match no date pattern.
        let records = [
            "  a, b ,,c  ",
            "06/01/2024 12:30 PM,5",
            "x,,y,",
            "1969-12-31 23:59:00,v",
            "plain",
            "",
        ];
        for record in records {
            let once = sanitize_record(record, ',');
            assert_eq!(sanitize_record(&once, ','), once);
        }
    }

    #[test]
    fn test_sanitize_blank_record() {
        assert_eq!(sanitize_record("   \t ", ','), "");
    }

    #[test]
    fn test_sanitize_records() {
        let lines = ["a,,b", " 1,2 "];
        assert_eq!(sanitize_records(lines, ','), vec!["a,0,b", "1,2"]);
    }
}
