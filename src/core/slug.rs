//! core::slug
//!
//! Diacritic-aware slug generation.
//!
//! # Algorithm
//!
//! Slugification is an eight-step pipeline applied in fixed order:
//!
//! 1. Lowercase the input
//! 2. Replace each whitespace run with a single hyphen
//! 3. Transliterate accented and special characters (see [`TRANSLITERATION`])
//! 4. Replace `&` with `-and-`
//! 5. Remove everything that is not an ASCII word character or hyphen
//! 6. Collapse runs of two or more hyphens
//! 7. Trim leading hyphens
//! 8. Trim trailing hyphens
//!
//! The output contains only lowercase ASCII letters, digits, underscores,
//! and single interior hyphens; it never starts or ends with a hyphen.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters with a transliteration, in table order.
const SPECIAL: &str = "àáâäæãåāăąçćčđďèéêëēėęěğǵḧîïíīįìłḿñńǹňôöòóœøōõṕŕřßśšşșťțûüùúūǘůűųẃẍÿýžźż·/_,:;";

/// Replacement for each character of [`SPECIAL`], by index.
const REPLACEMENT: &str = "aaaaaaaaaacccddeeeeeeeegghiiiiiilmnnnnooooooooprrsssssttuuuuuuuuuwxyyzzz------";

/// Transliteration lookup built once from the two parallel sequences.
///
/// Lookups are by exact character; characters outside the table pass
/// through slugification unchanged until the non-word strip.
static TRANSLITERATION: Lazy<HashMap<char, char>> =
    Lazy::new(|| SPECIAL.chars().zip(REPLACEMENT.chars()).collect());

/// One or more whitespace characters (same class as the regex `\s`).
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One or more characters outside the ASCII word class and `-`.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^[:word:]\-]+").unwrap());

/// Two or more consecutive hyphens.
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"--+").unwrap());

/// Generate a URL-safe slug from free text.
///
/// Empty input (or input consisting only of characters the pipeline
/// removes) yields the empty string. There is no failure path.
///
/// # Example
///
/// ```
/// use pagework::core::slugify;
///
/// assert_eq!(slugify("Café & Bar"), "cafe-and-bar");
/// assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
/// assert_eq!(slugify("Héllo, World!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let transliterated: String = hyphenated
        .chars()
        .map(|c| TRANSLITERATION.get(&c).copied().unwrap_or(c))
        .collect();
    let anded = transliterated.replace('&', "-and-");
    let stripped = NON_WORD.replace_all(&anded, "");
    let collapsed = HYPHEN_RUN.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sequences_have_equal_length() {
        assert_eq!(SPECIAL.chars().count(), REPLACEMENT.chars().count());
        assert_eq!(TRANSLITERATION.len(), SPECIAL.chars().count());
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Chapter 1: Introduction"), "chapter-1-introduction");
    }

    #[test]
    fn slugify_transliterates_diacritics() {
        assert_eq!(slugify("Café & Bar"), "cafe-and-bar");
        assert_eq!(slugify("Håkon's Fælleskøb"), "hakons-falleskob");
        assert_eq!(slugify("ǘber-größe"), "uber-grose");
    }

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn slugify_replaces_ampersand() {
        assert_eq!(slugify("Salt & Pepper & Thyme"), "salt-and-pepper-and-thyme");
        // No surrounding spaces still yields interior hyphens
        assert_eq!(slugify("a&b"), "a-and-b");
    }

    #[test]
    fn slugify_strips_non_word_characters() {
        assert_eq!(slugify("Héllo, World!"), "hello-world");
        assert_eq!(slugify("100% (approx.)"), "100-approx");
        // Underscores survive; the table maps '_' to '-' first
        assert_eq!(slugify("snake_case"), "snake-case");
    }

    #[test]
    fn slugify_table_hyphens_participate_in_collapsing() {
        // '·', '/', ',' all map to '-' and then collapse with neighbors
        assert_eq!(slugify("a·/b"), "a-b");
        assert_eq!(slugify("one, two"), "one-two");
    }

    #[test]
    fn slugify_trims_edge_hyphens() {
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn slugify_empty_and_removed_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn slugify_is_idempotent_on_examples() {
        for input in ["Café & Bar", "Héllo, World!", "  a  b  ", "100%"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }
}
