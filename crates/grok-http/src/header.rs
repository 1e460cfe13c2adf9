//! HTTP header keys and mappings.
//!
//! See RFC 9110 section 5 for header field naming.

use std::collections::BTreeMap;

use serde_json::Value;

/// A header key (field name). Compared case-insensitively.
pub type HeaderKey = String;

/// A header value.
pub type HeaderValue = String;

/// A mapping of header keys to values.
pub type HeaderMapping = BTreeMap<HeaderKey, HeaderValue>;

/// Normalise a header key to lowercase.
pub fn normalise_header_key(key: &str) -> HeaderKey {
    key.to_lowercase()
}

/// Normalise every key in `headers` to lowercase.
///
/// When two keys differ only in case, the one that sorts last wins.
pub fn normalise_header_mapping(headers: &HeaderMapping) -> HeaderMapping {
    headers
        .iter()
        .map(|(key, value)| (normalise_header_key(key), value.clone()))
        .collect()
}

/// Interpret an untyped value as a header mapping.
///
/// Objects yield their string-valued entries. Anything else yields an empty
/// mapping, so the result can always be merged with other headers.
pub fn ensure_header_mapping(value: &Value) -> HeaderMapping {
    match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
            .collect(),
        _ => HeaderMapping::new(),
    }
}
