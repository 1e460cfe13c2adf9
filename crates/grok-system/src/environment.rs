//! Environment variables.

use std::collections::HashMap;

use grok_core::Source;

/// A snapshot of environment variables.
///
/// Variables whose name or value is not valid unicode are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the environment of the current process.
    pub fn capture() -> Self {
        let vars: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        tracing::debug!(count = vars.len(), "captured environment");
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The normalised value of `key`: trimmed, with blank values treated as absent.
    pub fn normalised(&self, key: &str) -> Option<&str> {
        normalise(self.vars.get(key).map(String::as_str))
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Source for Environment {
    type Value = String;

    fn value(&self, key: &str) -> Option<&String> {
        self.vars.get(key)
    }
}

/// Strip surrounding whitespace from a value.
pub fn cleanse(value: &str) -> &str {
    value.trim()
}

/// Normalise an environment value: absent and blank values become `None`.
pub fn normalise(value: Option<&str>) -> Option<&str> {
    value.map(cleanse).filter(|v| !v.is_empty())
}

/// Validator accepting values that are not blank.
///
/// Takes `&String` so it can be passed to [`grok_core::validator`] for an
/// [`Environment`] source.
#[allow(clippy::ptr_arg)]
pub fn ensure(value: &String) -> bool {
    ensure_str(value)
}

/// Validator accepting values that are not blank.
pub fn ensure_str(value: &str) -> bool {
    normalise(Some(value)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grok_core::{okvr, validator, AccessError, Enforcement};
    use proptest::prelude::*;

    #[test]
    fn test_cleanse() {
        assert_eq!(cleanse("another planet"), "another planet");
        assert_eq!(cleanse(" hello world "), "hello world");
    }

    #[test]
    fn test_normalise() {
        assert_eq!(normalise(None), None);
        assert_eq!(normalise(Some("")), None);
        assert_eq!(normalise(Some("  ")), None);
        assert_eq!(normalise(Some("something")), Some("something"));
    }

    #[test]
    fn test_ensure() {
        assert!(!ensure_str(""));
        assert!(!ensure_str("   "));
        assert!(ensure_str("another"));
        assert!(ensure(&"value".to_string()));
    }

    #[test]
    fn test_environment_source() {
        let env = Environment::from_iter([("HOME", "/root"), ("EMPTY", "")]);

        assert_eq!(env.len(), 2);
        assert_eq!(env.value("HOME").map(String::as_str), Some("/root"));
        assert_eq!(env.value("EMPTY").map(String::as_str), Some(""));
        assert_eq!(env.normalised("EMPTY"), None);
        assert_eq!(env.value("MISSING"), None);
    }

    #[test]
    fn test_environment_with_enforced_accessor() {
        let env = Environment::from_iter([("HOST", "localhost"), ("PORT", " ")]);

        let err = okvr(&env, Enforcement::keys(["HOST", "PORT", "USER"]), Some(validator(ensure)))
            .unwrap_err();
        assert!(matches!(err, AccessError::Missing(_)));
        assert_eq!(err.keys(), ["USER"]);

        let err = okvr(&env, Enforcement::keys(["HOST", "PORT"]), Some(validator(ensure)))
            .unwrap_err();
        assert!(matches!(err, AccessError::NotValid(_)));
        assert_eq!(err.keys(), ["PORT"]);

        let accessor = okvr(&env, Enforcement::keys(["HOST"]), Some(validator(ensure))).unwrap();
        assert_eq!(accessor.get("HOST").unwrap().map(String::as_str), Some("localhost"));
    }

    #[test]
    fn test_capture_reads_process_environment() {
        let env = Environment::capture();
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(env.value("PATH"), Some(&path));
        }
    }

    proptest! {
        #[test]
        fn test_ensure_matches_trimmed_emptiness(value in "[ \t]{0,3}[a-z]{0,4}[ \t]{0,3}") {
            prop_assert_eq!(ensure_str(&value), !value.trim().is_empty());
        }
    }
}
