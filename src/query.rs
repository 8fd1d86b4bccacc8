//! Listings API query construction
//!
//! Builds the search URL from a fixed parameter set plus one caller-supplied
//! key/value pair.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Default listings API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.nestoria.co.uk/api";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` gets escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds query URLs against a single API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    base: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl QueryBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }

    /// Build the URL for `key=value` on the given results page.
    ///
    /// The override takes the position of a fixed parameter with the same
    /// name, otherwise it is appended last. Keys are emitted as-is.
    pub fn url_for(&self, key: &str, value: &str, page: u32) -> String {
        let mut params: Vec<(&str, String)> = vec![
            ("country", "uk".to_string()),
            ("pretty", "1".to_string()),
            ("encoding", "json".to_string()),
            ("listing_type", "buy".to_string()),
            ("action", "search_listings".to_string()),
            ("page", page.to_string()),
        ];

        match params.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => slot.1 = value.to_string(),
            None => params.push((key, value.to_string())),
        }

        let querystring = params
            .iter()
            .map(|(name, value)| format!("{}={}", name, utf8_percent_encode(value, COMPONENT)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.base, querystring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_for_query_and_page(key: &str, value: &str, page: u32) -> String {
        QueryBuilder::default().url_for(key, value, page)
    }

    fn pairs(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').expect("url has a query");
        query
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').expect("pair has '='");
                (k.to_string(), v.to_string())
            })
            .collect()
    }

    fn count(pairs: &[(String, String)], key: &str) -> usize {
        pairs.iter().filter(|(k, _)| k == key).count()
    }

    #[test]
    fn test_place_name_query() {
        let url = url_for_query_and_page("place_name", "london", 1);
        assert_eq!(
            url,
            "https://api.nestoria.co.uk/api?country=uk&pretty=1&encoding=json\
             &listing_type=buy&action=search_listings&page=1&place_name=london"
        );
    }

    #[test]
    fn test_value_is_percent_encoded() {
        let url = url_for_query_and_page("place_name", "St Albans & Harpenden/é", 1);
        let pairs = pairs(&url);
        assert_eq!(count(&pairs, "place_name"), 1);
        let (_, value) = pairs.iter().find(|(k, _)| k == "place_name").unwrap();
        assert_eq!(value, "St%20Albans%20%26%20Harpenden%2F%C3%A9");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        let url = url_for_query_and_page("place_name", "a-b_c.d!e~f*g'h(i)", 1);
        assert!(url.ends_with("&place_name=a-b_c.d!e~f*g'h(i)"));
    }

    #[test]
    fn test_fixed_parameters_appear_once() {
        for (key, value, page) in [
            ("place_name", "leeds", 1),
            ("centre_point", "51.68,-1.2", 3),
            ("", "", 0),
            ("x y", "=&?", 42),
        ] {
            let url = url_for_query_and_page(key, value, page);
            let pairs = pairs(&url);
            for fixed in ["country", "pretty", "encoding", "listing_type", "action", "page"] {
                assert_eq!(count(&pairs, fixed), 1, "{fixed} in {url}");
            }
            assert_eq!(count(&pairs, key), 1);
            assert_eq!(pairs.len(), 7);
            let (_, page_value) = pairs.iter().find(|(k, _)| k == "page").unwrap();
            assert_eq!(page_value, &page.to_string());
        }
    }

    #[test]
    fn test_override_replaces_fixed_parameter_in_place() {
        let url = url_for_query_and_page("listing_type", "rent", 2);
        let pairs = pairs(&url);
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[3], ("listing_type".to_string(), "rent".to_string()));
    }

    #[test]
    fn test_custom_base() {
        let builder = QueryBuilder::new("http://127.0.0.1:9000/api");
        assert!(builder
            .url_for("place_name", "york", 1)
            .starts_with("http://127.0.0.1:9000/api?country=uk&"));
    }
}
