//! Line grammar shared by the parser and the mutation API.

const LINE_TRIM: &[char] = &[' ', '\t', '\r', '\n'];
const PAIR_TRIM: &[char] = &[' ', '\t'];

/// Trim a physical line down to the text the classifiers look at.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(LINE_TRIM)
}

/// `[name]` header. A lone `[` or `]` does not count.
pub fn is_section_line(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('[') && line.ends_with(']')
}

pub fn is_key_value_line(line: &str) -> bool {
    split_key_value(line).is_some()
}

/// Split `key = value` on the first `=`.
///
/// Both halves are trimmed of spaces and tabs and must then be non-empty and
/// free of whitespace.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim_matches(PAIR_TRIM);
    let value = value.trim_matches(PAIR_TRIM);
    if is_bare_token(key) && is_bare_token(value) {
        Some((key, value))
    } else {
        None
    }
}

/// Name carried by a header line: every leading `[` and trailing `]` is
/// stripped, then surrounding spaces.
pub fn section_name(header: &str) -> &str {
    header
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim_matches(' ')
}

/// Whether `name` can be stored as a section name and survive a write/parse
/// cycle unchanged.
pub fn is_valid_section_name(name: &str) -> bool {
    !name.contains(['[', ']', '\n', '\r']) && name.trim_matches(' ') == name
}

fn is_bare_token(s: &str) -> bool {
    !s.is_empty() && !s.contains(char::is_whitespace)
}
