//! Test fixtures.
//!
//! Common source mappings for tests.

use serde_json::{json, Map, Value};

/// A source with no entries.
pub fn empty() -> Map<String, Value> {
    Map::new()
}

/// `{ "name": "jane", "age": 25 }`.
pub fn person() -> Map<String, Value> {
    object(json!({
        "name": "jane",
        "age": 25,
    }))
}

/// A source whose values are all present but falsy: `null`, `0`, `false`, `""`.
pub fn falsy() -> Map<String, Value> {
    object(json!({
        "null": null,
        "zero": 0,
        "false": false,
        "empty": "",
    }))
}

/// Validator accepting non-empty strings and any non-string value.
pub fn non_empty_string(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
