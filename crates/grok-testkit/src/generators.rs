//! Proptest generators for property-based testing.
//!
//! Keys present in generated sources start with `p_`; keys guaranteed to be
//! absent start with `a_`, so the two never collide.

use proptest::prelude::*;
use serde_json::{Map, Value};

use grok_core::Enforcement;

/// Generate a key that may be present in a source.
pub fn present_key() -> impl Strategy<Value = String> {
    "p_[a-z0-9]{1,8}".prop_map(String::from)
}

/// Generate a key that is never present in a generated source.
pub fn absent_key() -> impl Strategy<Value = String> {
    "a_[a-z0-9]{1,8}".prop_map(String::from)
}

/// Generate a JSON value, including the falsy ones.
pub fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::String),
    ]
}

/// Generate a source mapping with up to `max_len` entries.
pub fn source(max_len: usize) -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(present_key(), value(), 0..=max_len)
        .prop_map(|entries| entries.into_iter().collect::<Map<String, Value>>())
}

/// Generate an enforcement mode over the given keys.
pub fn enforcement(keys: Vec<String>) -> impl Strategy<Value = Enforcement> {
    prop_oneof![
        Just(Enforcement::Global),
        Just(keys).prop_shuffle().prop_map(Enforcement::Keys),
    ]
}

/// A source mapping plus keys known to be absent from it.
#[derive(Debug, Clone)]
pub struct SourceParams {
    pub source: Map<String, Value>,
    pub absent: Vec<String>,
}

impl Arbitrary for SourceParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (source(8), prop::collection::btree_set(absent_key(), 1..4))
            .prop_map(|(source, absent)| SourceParams {
                source,
                absent: absent.into_iter().collect(),
            })
            .boxed()
    }
}

/// A source mapping and an explicit key list mixing present and absent keys.
#[derive(Debug, Clone)]
pub struct EnforcementParams {
    pub source: Map<String, Value>,
    pub absent: Vec<String>,
    /// Every present and absent key, shuffled.
    pub enforced: Vec<String>,
}

impl EnforcementParams {
    /// The enforced keys that are absent, in enforcement order.
    pub fn missing(&self) -> Vec<String> {
        self.enforced
            .iter()
            .filter(|key| self.absent.contains(key))
            .cloned()
            .collect()
    }
}

impl Arbitrary for EnforcementParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (source(6), prop::collection::btree_set(absent_key(), 0..4))
            .prop_flat_map(|(source, absent)| {
                let absent: Vec<String> = absent.into_iter().collect();
                let keys: Vec<String> = source.keys().cloned().chain(absent.clone()).collect();
                (Just(source), Just(absent), Just(keys).prop_shuffle())
            })
            .prop_map(|(source, absent, enforced)| EnforcementParams {
                source,
                absent,
                enforced,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grok_core::{okv, okvr, AccessError};

    proptest! {
        #[test]
        fn test_present_keys_are_returned(params: SourceParams) {
            let accessor = okv(&params.source);
            for (key, value) in &params.source {
                prop_assert_eq!(accessor.get(key), Some(value));
            }
        }

        #[test]
        fn test_absent_keys_use_fallback(params: SourceParams, fallback in value()) {
            let accessor = okv(&params.source);
            for key in &params.absent {
                prop_assert_eq!(accessor.get(key), None);
                prop_assert_eq!(accessor.get_or(key, &fallback), &fallback);
            }
        }

        #[test]
        fn test_missing_keys_reported_in_order(params: EnforcementParams) {
            let result = okvr(&params.source, Enforcement::Keys(params.enforced.clone()), None);
            let missing = params.missing();

            if missing.is_empty() {
                prop_assert!(result.is_ok());
            } else {
                match result {
                    Err(AccessError::Missing(err)) => {
                        prop_assert_eq!(err.keys(), missing.as_slice());
                    }
                    other => {
                        prop_assert!(false, "expected missing keys, got {:?}", other);
                    }
                }
            }
        }

        #[test]
        fn test_generated_enforcement_is_well_formed(
            mode in enforcement(vec!["a".to_string(), "b".to_string()]),
        ) {
            match mode {
                Enforcement::Global => {}
                Enforcement::Keys(mut keys) => {
                    keys.sort();
                    prop_assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
                }
            }
        }
    }
}
