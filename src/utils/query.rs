//! Query string and path helpers

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use url::Url;

/// Value of the first query parameter named `name`, percent-decoded
///
/// `?list=` yields `Some("")`. A bare `?list` has no value and yields `None`,
/// even when a later `list=...` follows, since only the first match counts.
/// `+` is kept as is.
pub fn query_item(url: &Url, name: &str) -> Option<String> {
    url.query()?
        .split('&')
        .find_map(|pair| {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (pair, None),
            };
            (percent_decode(key) == name).then(|| value.map(|v| percent_decode(v).into_owned()))
        })
        .flatten()
}

/// Percent-decode a path segment or query component
pub fn percent_decode(component: &str) -> Cow<'_, str> {
    percent_decode_str(component).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let url = parse("https://example.com/?v=first&v=second");
        assert_eq!(query_item(&url, "v").as_deref(), Some("first"));
    }

    #[test]
    fn test_percent_decoding() {
        let url = parse("https://example.com/?list=PL%2Dabc+def&%74=5");
        assert_eq!(query_item(&url, "list").as_deref(), Some("PL-abc+def"));
        assert_eq!(query_item(&url, "t").as_deref(), Some("5"));
    }

    #[test]
    fn test_missing_and_empty() {
        let url = parse("https://example.com/?list&v=&t=5");
        assert_eq!(query_item(&url, "list"), None);
        assert_eq!(query_item(&url, "v").as_deref(), Some(""));
        assert_eq!(query_item(&url, "missing"), None);
        assert_eq!(query_item(&url, "t").as_deref(), Some("5"));
    }

    #[test]
    fn test_valueless_first_match_shadows_later() {
        let url = parse("https://example.com/?list&list=PL1");
        assert_eq!(query_item(&url, "list"), None);
    }

    #[test]
    fn test_no_query() {
        let url = parse("https://example.com/watch");
        assert_eq!(query_item(&url, "v"), None);
    }

    #[test]
    fn test_percent_decode_segment() {
        assert_eq!(percent_decode("abc%2D123"), "abc-123");
        assert_eq!(percent_decode("abc%20123"), "abc 123");
        assert_eq!(percent_decode("plain"), "plain");
    }
}
