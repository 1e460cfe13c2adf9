//! Error types for Grok Core.
//!
//! Accessor failures carry the offending key names as a list, even when a
//! single key triggered them, so callers can match on the kind and inspect
//! [`AccessError::keys`] without parsing messages.

use serde::Serialize;
use thiserror::Error;

/// Raised when a required key has no value in the source mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", missing_message(.keys))]
pub struct ObjectKeyMissingError {
    keys: Vec<String>,
}

impl ObjectKeyMissingError {
    /// Identifying name of this error kind.
    pub const NAME: &'static str = "ObjectKeyMissingError";

    /// Create an error for the given missing keys.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an error for a single missing key.
    pub fn single(key: impl Into<String>) -> Self {
        Self {
            keys: vec![key.into()],
        }
    }

    /// The missing keys, in the order they were reported.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl From<&str> for ObjectKeyMissingError {
    fn from(key: &str) -> Self {
        Self::single(key)
    }
}

/// Raised when a required key has a value that the validator rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", not_valid_message(.keys))]
pub struct KeyValueNotValidError {
    keys: Vec<String>,
}

impl KeyValueNotValidError {
    /// Identifying name of this error kind.
    pub const NAME: &'static str = "KeyValueNotValidError";

    /// Create an error for the given keys whose values are not valid.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an error for a single key.
    pub fn single(key: impl Into<String>) -> Self {
        Self {
            keys: vec![key.into()],
        }
    }

    /// The rejected keys, in the order they were reported.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl From<&str> for KeyValueNotValidError {
    fn from(key: &str) -> Self {
        Self::single(key)
    }
}

fn missing_message(keys: &[String]) -> String {
    match keys {
        [key] => format!("Missing key [{}] in the source object", key),
        _ => format!("Missing keys [{}] in source object", keys.join(", ")),
    }
}

fn not_valid_message(keys: &[String]) -> String {
    match keys {
        [key] => format!("The value for key [{}] is not valid", key),
        _ => format!("The value for keys [{}] is not valid", keys.join(", ")),
    }
}

/// Errors raised by an enforced accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// One or more required keys have no value.
    #[error(transparent)]
    Missing(#[from] ObjectKeyMissingError),

    /// One or more required keys have a value the validator rejected.
    #[error(transparent)]
    NotValid(#[from] KeyValueNotValidError),
}

impl AccessError {
    /// The keys that caused this error.
    pub fn keys(&self) -> &[String] {
        match self {
            AccessError::Missing(e) => e.keys(),
            AccessError::NotValid(e) => e.keys(),
        }
    }

    /// The identifying name of the underlying error kind.
    pub fn name(&self) -> &'static str {
        match self {
            AccessError::Missing(e) => e.name(),
            AccessError::NotValid(e) => e.name(),
        }
    }
}

/// Result type for accessor operations.
pub type Result<T> = std::result::Result<T, AccessError>;

const NEVER_REACH_MESSAGE: &str = "A never reach assertion was executed";

/// Raised when code that must be unreachable was executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NeverReachAssertionError {
    message: String,
}

impl NeverReachAssertionError {
    /// Identifying name of this error kind.
    pub const NAME: &'static str = "NeverReachAssertionError";

    /// Create the error without a value.
    pub fn new() -> Self {
        Self {
            message: NEVER_REACH_MESSAGE.to_string(),
        }
    }

    /// Create the error mentioning the given value, JSON encoded.
    ///
    /// Falls back to the plain message if the value cannot be encoded.
    pub fn with_value<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => Self {
                message: format!("{} with given value: {}", NEVER_REACH_MESSAGE, json),
            },
            Err(_) => Self::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl Default for NeverReachAssertionError {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_single_key() {
        let error = ObjectKeyMissingError::single("foobar");

        assert_eq!(error.name(), "ObjectKeyMissingError");
        assert_eq!(error.to_string(), "Missing key [foobar] in the source object");
        assert_eq!(error.keys(), ["foobar"]);
    }

    #[test]
    fn test_missing_single_key_from_list() {
        let error = ObjectKeyMissingError::new(["x"]);
        assert_eq!(error.to_string(), "Missing key [x] in the source object");
        assert_eq!(error, ObjectKeyMissingError::from("x"));
    }

    #[test]
    fn test_missing_multiple_keys() {
        let error = ObjectKeyMissingError::new(["foobar", "another", "something"]);

        assert_eq!(
            error.to_string(),
            "Missing keys [foobar, another, something] in source object"
        );
        assert_eq!(error.keys(), ["foobar", "another", "something"]);
    }

    #[test]
    fn test_not_valid_single_key() {
        let error = KeyValueNotValidError::single("foobar");

        assert_eq!(error.name(), "KeyValueNotValidError");
        assert_eq!(error.to_string(), "The value for key [foobar] is not valid");
        assert_eq!(error.keys(), ["foobar"]);
    }

    #[test]
    fn test_not_valid_multiple_keys() {
        let error = KeyValueNotValidError::new(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(error.to_string(), "The value for keys [x, y] is not valid");
    }

    #[test]
    fn test_access_error_delegates() {
        let error: AccessError = ObjectKeyMissingError::new(["a", "b"]).into();
        assert_eq!(error.name(), ObjectKeyMissingError::NAME);
        assert_eq!(error.keys(), ["a", "b"]);
        assert_eq!(error.to_string(), "Missing keys [a, b] in source object");

        let error: AccessError = KeyValueNotValidError::single("c").into();
        assert_eq!(error.name(), KeyValueNotValidError::NAME);
        assert_eq!(error.keys(), ["c"]);
    }

    #[test]
    fn test_never_reach_without_value() {
        let error = NeverReachAssertionError::new();
        assert_eq!(error.to_string(), "A never reach assertion was executed");
        assert_eq!(error.name(), "NeverReachAssertionError");
    }

    #[test]
    fn test_never_reach_with_value() {
        let error = NeverReachAssertionError::with_value(&serde_json::json!({ "kind": "x" }));
        assert_eq!(
            error.to_string(),
            r#"A never reach assertion was executed with given value: {"kind":"x"}"#
        );

        let error = NeverReachAssertionError::with_value("unexpected");
        assert_eq!(
            error.to_string(),
            r#"A never reach assertion was executed with given value: "unexpected""#
        );
    }
}
