//! core::truncate
//!
//! Word-boundary-safe truncation.
//!
//! Over-length text is cut back to the last whole word inside the budget,
//! then relieved of a trailing `:`, `;`, or `,` so the shortened string
//! reads cleanly. Input that already fits is returned untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use super::search::last_index_of;

/// A single whitespace character, for the backward word-boundary search.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").unwrap());

/// Punctuation unwanted at the end of a truncated string.
const TRAILING_PUNCTUATION: [char; 3] = [':', ';', ','];

/// Truncate `text` to at most `max_chars` characters without cutting a
/// word, optionally appending `suffix` (e.g. `" …"`).
///
/// Text of `max_chars` characters or fewer is returned byte-identical and
/// never suffixed. For longer text, the prefix of `max_chars` characters
/// is cut back to just before its last whitespace, a single trailing `:`,
/// `;`, or `,` is dropped, and the suffix (if any) is appended. The
/// portion before the suffix never exceeds `max_chars` characters.
///
/// When the prefix contains no whitespace at all there is no word boundary
/// to respect; the raw character-limited prefix is kept as-is.
///
/// # Example
///
/// ```
/// use pagework::core::truncate;
///
/// assert_eq!(truncate("The quick brown fox jumps", 13, None), "The quick");
/// assert_eq!(truncate("short", 10, Some(" …")), "short");
/// assert_eq!(truncate("Wait: this is it", 6, None), "Wait");
/// ```
pub fn truncate(text: &str, max_chars: usize, suffix: Option<&str>) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let prefix = &text[..cut];

    // Elide from the last whitespace so we keep whole words. A prefix
    // with no whitespace has no boundary to honor and is kept raw.
    let mut kept = match last_index_of(&WHITESPACE, prefix, None) {
        Some(boundary) => &prefix[..boundary],
        None => prefix,
    };

    if kept.ends_with(TRAILING_PUNCTUATION) {
        kept = &kept[..kept.len() - 1];
    }

    match suffix {
        Some(suffix) => format!("{}{}", kept, suffix),
        None => kept.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(truncate("short", 10, None), "short");
        assert_eq!(truncate("exact fit!", 10, None), "exact fit!");
        // No suffix for input that fits
        assert_eq!(truncate("short", 10, Some("…")), "short");
    }

    #[test]
    fn cuts_at_word_boundary() {
        assert_eq!(truncate("The quick brown fox jumps", 13, None), "The quick");
        assert_eq!(truncate("one two three four", 12, None), "one two");
    }

    #[test]
    fn drops_trailing_punctuation() {
        // Prefix "Wait: " elides to "Wait:", then the colon goes too
        assert_eq!(truncate("Wait: this is it", 6, None), "Wait");
        assert_eq!(truncate("a, b, c, d, e, f", 9, None), "a, b, c");
    }

    #[test]
    fn appends_suffix_only_when_truncated() {
        assert_eq!(
            truncate("The quick brown fox jumps", 13, Some(" …")),
            "The quick …"
        );
    }

    #[test]
    fn no_whitespace_keeps_raw_prefix() {
        assert_eq!(truncate("abcdefghij", 4, None), "abcd");
        assert_eq!(truncate("abcdefghij", 4, Some("…")), "abcd…");
    }

    #[test]
    fn zero_budget_yields_empty() {
        assert_eq!(truncate("anything", 0, None), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Each 'é' is two bytes but one character
        assert_eq!(truncate("ééé ééé ééé", 7, None), "ééé");
        assert_eq!(truncate("ééééé", 5, None), "ééééé");
    }

    #[test]
    fn bound_holds_for_overlength_input() {
        for budget in 0..20 {
            let out = truncate("the quick: brown, fox; jumps over it all", budget, None);
            assert!(out.chars().count() <= budget);
        }
    }
}
