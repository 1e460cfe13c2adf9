//! Source mappings that accessors read from.
//!
//! A [`Source`] answers one question: what value, if any, is stored under a
//! string key. `None` is the absent marker. Values such as JSON `null`, `0`,
//! `false` or an empty string are present values.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A read-only mapping from string keys to values.
pub trait Source {
    /// The value type stored in the mapping.
    type Value;

    /// Look up the value for `key`, returning `None` when it is absent.
    fn value(&self, key: &str) -> Option<&Self::Value>;
}

impl<T: Source + ?Sized> Source for &T {
    type Value = T::Value;

    fn value(&self, key: &str) -> Option<&Self::Value> {
        (**self).value(key)
    }
}

impl<K, V, S> Source for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Value = V;

    fn value(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> Source for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    fn value(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl Source for serde_json::Map<String, serde_json::Value> {
    type Value = serde_json::Value;

    fn value(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key)
    }
}

/// Adapts a mapping of optional values so that an entry holding `None` is
/// treated the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sparse<M>(pub M);

impl<M> Sparse<M> {
    pub fn new(inner: M) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M, V> Source for Sparse<M>
where
    M: Source<Value = Option<V>>,
{
    type Value = V;

    fn value(&self, key: &str) -> Option<&V> {
        self.0.value(key).and_then(Option::as_ref)
    }
}
