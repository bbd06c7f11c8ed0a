//! Header source parsing.
//!
//! The `-headers` flag carries every header in one string:
//! `Name: Value` pairs separated by `;`.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{HEADER_NAME_SEPARATOR, HEADER_PAIR_SEPARATOR};
use crate::error_handling::RequestError;

/// Header names mapped to values, as parsed from the header source.
pub type ParsedHeaders = BTreeMap<String, String>;

/// Parses a header source string into a map.
///
/// Each `;`-separated pair is split on its first `:`. Pairs without a `:` are
/// dropped silently. Leading spaces are trimmed from values; names are kept
/// verbatim. When a name repeats, the last pair wins.
///
/// # Examples
///
/// ```
/// use flagreq::request::parse_headers;
///
/// let headers = parse_headers("Content-Type:application/json;Auth: bar");
/// assert_eq!(headers.len(), 2);
/// assert_eq!(headers["Content-Type"], "application/json");
/// assert_eq!(headers["Auth"], "bar");
/// ```
pub fn parse_headers(source: &str) -> ParsedHeaders {
    let mut headers = ParsedHeaders::new();
    if source.is_empty() {
        return headers;
    }
    for pair in source.split(HEADER_PAIR_SEPARATOR) {
        if let Some((name, value)) = pair.split_once(HEADER_NAME_SEPARATOR) {
            headers.insert(name.to_string(), value.trim_start_matches(' ').to_string());
        }
    }
    headers
}

/// Converts parsed headers into a `reqwest` header map.
///
/// # Errors
///
/// Returns `RequestError::Build` if a name is not a valid HTTP token or a
/// value contains forbidden bytes.
pub fn to_header_map(headers: &ParsedHeaders) -> Result<HeaderMap, RequestError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RequestError::Build(format!("invalid header name {name:?}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| RequestError::Build(format!("invalid value for header {name}: {e}")))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
