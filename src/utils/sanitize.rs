//! Utilities for sanitizing text taken from audited documents.
//!
//! Finding messages embed raw document values (hrefs, meta names). Before
//! they are printed on a single line, control characters are removed and
//! long values are truncated on character boundaries.

/// Sanitizes a value for single-line display.
///
/// Control characters (0x00-0x1F, 0x7F) are removed, except newline, tab and
/// carriage return which become a space so that words stay separated.
pub fn sanitize_for_display(message: &str) -> String {
    message
        .chars()
        .filter_map(|c| match c {
            '\n' | '\t' | '\r' => Some(' '),
            c if c.is_ascii_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Returns at most the first `max_chars` characters of `value`.
///
/// Never splits a multi-byte character.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
