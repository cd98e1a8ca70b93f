//! Field delimiter inference.
//!
//! Each sampled line votes once for every delimiter-candidate character
//! tied at that line's maximum frequency. The dataset winner is the
//! candidate with the most line votes, ties broken toward the lowest
//! byte value so the election is deterministic.

use tracing::debug;

use crate::scan::is_delimiter_candidate;

const TABLE_SIZE: usize = 256;

fn line_winners(line: &str, excluded: &[char]) -> Vec<char> {
    let mut counts = [0usize; TABLE_SIZE];
    for c in line.chars() {
        if is_delimiter_candidate(c) && !excluded.contains(&c) {
            counts[c as usize] += 1;
        }
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == max)
        .map(|(byte, _)| byte as u8 as char)
        .collect()
}

/// All candidate characters tied at this line's maximum frequency.
pub fn candidate_delimiters(line: &str) -> Vec<char> {
    line_winners(line, &[])
}

fn elect<'a, I>(lines: I, excluded: &[char]) -> Option<char>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut votes = [0usize; TABLE_SIZE];
    for line in lines {
        for candidate in line_winners(line, excluded) {
            votes[candidate as usize] += 1;
        }
    }

    let mut winner = None;
    let mut best = 0usize;
    for (byte, &count) in votes.iter().enumerate() {
        if count > best {
            best = count;
            winner = Some(byte as u8 as char);
        }
    }
    winner
}

/// Infer the primary field delimiter from sampled lines.
///
/// Returns `None` when no candidate character appears in any line; the
/// caller surfaces that as a delimiter-inference failure.
pub fn infer_delimiter<'a, I>(lines: I) -> Option<char>
where
    I: IntoIterator<Item = &'a str>,
{
    let winner = elect(lines, &[]);
    if let Some(delimiter) = winner {
        debug!(delimiter = %delimiter, "inferred primary delimiter");
    }
    winner
}

/// Infer a secondary delimiter with the primary excluded from the
/// election. Used to split `name:type` annotations in header fields.
pub fn infer_secondary_delimiter<'a, I>(lines: I, primary: char) -> Option<char>
where
    I: IntoIterator<Item = &'a str>,
{
    let winner = elect(lines, &[primary]);
    if let Some(delimiter) = winner {
        debug!(delimiter = %delimiter, "inferred secondary delimiter");
    }
    winner
}
