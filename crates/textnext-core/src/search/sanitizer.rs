//! Wire padding removal.
//!
//! The search service wraps every free-text field in a fixed-width decoration:
//! `PREFIX_LEN` characters in front, `SUFFIX_LEN` characters behind. This is a
//! contract with the server, so the widths are constants rather than heuristics.

/// Characters of padding the server puts before a text field.
pub const PREFIX_LEN: usize = 2;
/// Characters of padding the server puts after a text field.
pub const SUFFIX_LEN: usize = 3;

/// Strips the wire padding from `raw` and trims surrounding whitespace.
///
/// Lengths are counted in chars. Input shorter than `PREFIX_LEN + SUFFIX_LEN`
/// carries no payload and becomes the empty string.
pub fn sanitize(raw: &str) -> String {
    let len = raw.chars().count();
    if len <= PREFIX_LEN + SUFFIX_LEN {
        return String::new();
    }

    raw.chars()
        .skip(PREFIX_LEN)
        .take(len - PREFIX_LEN - SUFFIX_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}
