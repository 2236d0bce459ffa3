//! core::search
//!
//! Reverse regex search: the index of the last match rather than the
//! first. The standard library answers "where does this pattern first
//! occur"; truncation and similar backward-looking passes need the other
//! end of the string.

use regex::Regex;

/// Find the byte index of the start of the last match of `pattern` in
/// `text`.
///
/// When `from` is given, only `text[..from]` is searched; `from` is
/// clamped down to the nearest char boundary, so any byte offset is
/// accepted. Returns `None` when the pattern never matches.
///
/// # Example
///
/// ```
/// use pagework::core::last_index_of;
/// use regex::Regex;
///
/// let whitespace = Regex::new(r"\s").unwrap();
/// assert_eq!(last_index_of(&whitespace, "a b c", None), Some(3));
/// assert_eq!(last_index_of(&whitespace, "a b c", Some(3)), Some(1));
/// assert_eq!(last_index_of(&whitespace, "abc", None), None);
/// ```
pub fn last_index_of(pattern: &Regex, text: &str, from: Option<usize>) -> Option<usize> {
    let haystack = match from {
        Some(end) if end < text.len() => {
            let mut end = end;
            while end > 0 && !text.is_char_boundary(end) {
                end -= 1;
            }
            &text[..end]
        }
        _ => text,
    };

    pattern.find_iter(haystack).last().map(|m| m.start())
}
