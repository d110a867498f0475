//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` settings format: comment skipping,
//! inline-comment stripping, key normalisation and key-value splitting.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=`; the key is normalised with [`normalize_key`]
/// - The value has inline comments removed and is trimmed
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = normalize_key(raw_key);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// Lower-case a settings key and fold `.`, `-` and spaces into `_`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Remove an inline comment from a value.
///
/// Inputs:
/// - `s`: Raw value text that may include a trailing comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - A comment starts at ` #` or ` //` (whitespace first) so URLs such as
///   `https://host/path#frag` survive intact.
pub fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(i) = s.find(marker) {
            end = end.min(i);
        }
    }
    s[..end].trim()
}
