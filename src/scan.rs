//! Character classification and token scanning.
//!
//! [`TokenCursor`] is the single tokenizer used across the pipeline. It
//! walks an immutable string slice and yields tokens separated by runs
//! of delimiter characters, so adjacent delimiters never produce an
//! empty token. Record repair depends on that behavior: preserving an
//! empty field requires inserting a placeholder, not an empty slot.

/// Whether a character can act as a field delimiter.
///
/// Alphanumerics and whitespace carry data; `_`, `+`, `-`, and `.`
/// appear inside identifiers and numeric literals, so none of them may
/// be elected as a delimiter.
pub fn is_delimiter_candidate(c: char) -> bool {
    if !c.is_ascii() || c.is_ascii_alphanumeric() || c.is_ascii_whitespace() {
        return false;
    }
    !matches!(c, '_' | '+' | '-' | '.')
}

/// Cursor over an immutable slice, yielding delimiter-separated tokens.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    source: &'a str,
    delimiters: &'a [char],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str, delimiters: &'a [char]) -> Self {
        Self {
            source,
            delimiters,
            pos: 0,
        }
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }
}

impl<'a> Iterator for TokenCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let source = self.source;
        let rest = &source[self.pos..];
        let mut chars = rest.char_indices();

        // Skip the delimiter run before the next token.
        let start = loop {
            match chars.next() {
                Some((i, c)) if !self.is_delimiter(c) => break i,
                Some(_) => continue,
                None => {
                    self.pos = self.source.len();
                    return None;
                }
            }
        };

        let end = chars
            .find(|&(_, c)| self.is_delimiter(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        self.pos += end;
        Some(&rest[start..end])
    }
}

/// Count occurrences of a single character.
pub fn count_occurrences(s: &str, c: char) -> usize {
    s.chars().filter(|&ch| ch == c).count()
}

/// Number of tokens a cursor over `s` would yield.
pub fn count_fields(s: &str, delimiters: &[char]) -> usize {
    TokenCursor::new(s, delimiters).count()
}
