//! Input normalization.

use smallvec::SmallVec;

/// Words of one command line. Valid commands never exceed three words.
pub type Tokens<'a> = SmallVec<[&'a str; 3]>;

/// Normalize a raw line.
///
/// Every byte that is not an ASCII letter, ASCII digit or ASCII space is
/// dropped (tabs and carriage returns included), and letters are lowercased.
/// Register names are therefore case-insensitive.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split a sanitized line into words.
pub fn tokenize(line: &str) -> Tokens<'_> {
    line.split_ascii_whitespace().collect()
}
