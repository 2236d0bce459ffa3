//! core::query
//!
//! Decoded query-parameter extraction.
//!
//! Extraction is pure over an already-parsed [`Url`]. Reading the current
//! page address is a platform concern and stays behind
//! [`LocationSource`](crate::page::LocationSource); the convenience
//! wrapper [`param_from_location`] composes the two.

use thiserror::Error;
use url::Url;

use crate::page::LocationSource;

/// Errors from query-parameter lookups against a location source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The current address could not be parsed as a URL.
    #[error("invalid location URL: {0}")]
    InvalidLocation(#[from] url::ParseError),
}

/// Get the decoded value of the first query parameter named `name`.
///
/// Percent-escapes and `+` are decoded per form encoding. A parameter
/// present without a value yields `Some("")`; an absent parameter yields
/// `None` - the two cases stay distinguishable.
///
/// # Example
///
/// ```
/// use pagework::core::query_param;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/read?lang=en&q=caf%C3%A9+au+lait&flag").unwrap();
/// assert_eq!(query_param(&url, "lang"), Some("en".to_string()));
/// assert_eq!(query_param(&url, "q"), Some("café au lait".to_string()));
/// assert_eq!(query_param(&url, "flag"), Some("".to_string()));
/// assert_eq!(query_param(&url, "missing"), None);
/// ```
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Look up a query parameter on the current address.
///
/// # Errors
///
/// Returns [`QueryError::InvalidLocation`] when the address reported by
/// `location` is not a parseable URL.
pub fn param_from_location(
    location: &impl LocationSource,
    name: &str,
) -> Result<Option<String>, QueryError> {
    let url = Url::parse(&location.current())?;
    Ok(query_param(&url, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::FixedLocation;

    fn parsed(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn finds_simple_parameter() {
        let url = parsed("https://example.com/?lang=fr");
        assert_eq!(query_param(&url, "lang"), Some("fr".into()));
    }

    #[test]
    fn decodes_escapes_and_plus() {
        let url = parsed("https://example.com/?q=one+two%20three");
        assert_eq!(query_param(&url, "q"), Some("one two three".into()));
    }

    #[test]
    fn absent_and_empty_are_distinct() {
        let url = parsed("https://example.com/?flag&set=");
        assert_eq!(query_param(&url, "flag"), Some(String::new()));
        assert_eq!(query_param(&url, "set"), Some(String::new()));
        assert_eq!(query_param(&url, "other"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let url = parsed("https://example.com/?a=1&a=2");
        assert_eq!(query_param(&url, "a"), Some("1".into()));
    }

    #[test]
    fn fragment_is_not_part_of_the_value() {
        let url = parsed("https://example.com/?lang=en#section");
        assert_eq!(query_param(&url, "lang"), Some("en".into()));
    }

    #[test]
    fn reads_from_location_source() {
        let location = FixedLocation::new("https://example.com/page?edition=2");
        assert_eq!(
            param_from_location(&location, "edition").unwrap(),
            Some("2".into())
        );
        assert_eq!(param_from_location(&location, "lang").unwrap(), None);
    }

    #[test]
    fn unparseable_location_is_an_error() {
        let location = FixedLocation::new("not a url");
        assert!(matches!(
            param_from_location(&location, "lang"),
            Err(QueryError::InvalidLocation(_))
        ));
    }
}
