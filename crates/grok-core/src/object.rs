//! Key-value accessors over a [`Source`] mapping.
//!
//! [`okv`] reads values with an optional fallback and never fails.
//! [`okvr`] adds enforcement: with [`Enforcement::Keys`] the listed keys are
//! checked once, up front, and every problem is reported together; with
//! [`Enforcement::Global`] every key requested through the accessor is
//! checked at the point of access.
//!
//! ```rust
//! use std::collections::HashMap;
//! use grok_core::{okvr, validator, Enforcement};
//!
//! let source = HashMap::from([("name", "jane")]);
//! let accessor = okvr(
//!     &source,
//!     Enforcement::keys(["name"]),
//!     Some(validator(|v: &&str| !v.is_empty())),
//! )
//! .unwrap();
//!
//! assert_eq!(accessor.get("name").unwrap(), Some(&"jane"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, KeyValueNotValidError, ObjectKeyMissingError, Result};
use crate::source::Source;

/// Which keys an enforced accessor requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
    /// Every key requested through the accessor is required, checked per access.
    #[default]
    Global,
    /// Only the listed keys are required, checked when the accessor is built.
    ///
    /// An empty list requires nothing.
    Keys(Vec<String>),
}

impl Enforcement {
    /// Enforce only the given keys.
    pub fn keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Enforcement::Keys(keys.into_iter().map(Into::into).collect())
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Enforcement::Global)
    }

    /// Whether `key` is subject to enforcement.
    pub fn covers(&self, key: &str) -> bool {
        match self {
            Enforcement::Global => true,
            Enforcement::Keys(keys) => keys.iter().any(|k| k == key),
        }
    }
}

/// A predicate deciding whether a present value is acceptable.
pub type Validator<'a, V> = Box<dyn Fn(&V) -> bool + Send + Sync + 'a>;

/// Box a closure as a [`Validator`].
pub fn validator<'a, V, F>(f: F) -> Validator<'a, V>
where
    F: Fn(&V) -> bool + Send + Sync + 'a,
{
    Box::new(f)
}

/// Create an accessor over `source` that performs no enforcement.
pub fn okv<M>(source: &M) -> Accessor<'_, M>
where
    M: Source + ?Sized,
{
    Accessor { source }
}

/// Create an enforced accessor over `source`.
///
/// With [`Enforcement::Keys`] the listed keys are checked immediately: all
/// absent keys are reported in one [`ObjectKeyMissingError`], and only when
/// none are absent are the values run through `validator`, with all rejected
/// keys reported in one [`KeyValueNotValidError`].
pub fn okvr<'a, M>(
    source: &'a M,
    enforcement: Enforcement,
    validator: Option<Validator<'a, M::Value>>,
) -> Result<EnforcedAccessor<'a, M>>
where
    M: Source + ?Sized,
{
    if let Enforcement::Keys(keys) = &enforcement {
        check_keys(source, keys, validator.as_deref())?;
    }

    Ok(EnforcedAccessor {
        source,
        enforcement,
        validator,
    })
}

fn check_keys<M>(
    source: &M,
    keys: &[String],
    validator: Option<&(dyn Fn(&M::Value) -> bool + Send + Sync + '_)>,
) -> Result<()>
where
    M: Source + ?Sized,
{
    let missing: Vec<&String> = keys
        .iter()
        .filter(|key| source.value(key).is_none())
        .collect();

    if !missing.is_empty() {
        tracing::debug!(keys = ?missing, "required keys missing from source");
        return Err(ObjectKeyMissingError::new(missing.into_iter().cloned()).into());
    }

    let Some(validator) = validator else {
        return Ok(());
    };

    let invalid: Vec<&String> = keys
        .iter()
        .filter(|key| source.value(key).is_some_and(|value| !validator(value)))
        .collect();

    if !invalid.is_empty() {
        tracing::debug!(keys = ?invalid, "required keys failed validation");
        return Err(KeyValueNotValidError::new(invalid.into_iter().cloned()).into());
    }

    Ok(())
}

/// Reads values from a source mapping. Created by [`okv`].
pub struct Accessor<'a, M: ?Sized> {
    source: &'a M,
}

impl<'a, M> Accessor<'a, M>
where
    M: Source + ?Sized,
{
    /// Start building an enforced accessor over `source`.
    pub fn builder(source: &'a M) -> AccessorBuilder<'a, M> {
        AccessorBuilder::new(source)
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&'a M::Value> {
        self.source.value(key)
    }

    /// The value stored under `key`, or `fallback` when it is absent.
    pub fn get_or<'r>(&self, key: &str, fallback: &'r M::Value) -> &'r M::Value
    where
        'a: 'r,
    {
        self.source.value(key).unwrap_or(fallback)
    }
}

impl<M: ?Sized> Clone for Accessor<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for Accessor<'_, M> {}

impl<M: ?Sized> fmt::Debug for Accessor<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").finish_non_exhaustive()
    }
}

/// Reads values from a source mapping, enforcing presence and validity.
/// Created by [`okvr`] or [`AccessorBuilder::build`].
pub struct EnforcedAccessor<'a, M: Source + ?Sized> {
    source: &'a M,
    enforcement: Enforcement,
    validator: Option<Validator<'a, M::Value>>,
}

impl<'a, M> EnforcedAccessor<'a, M>
where
    M: Source + ?Sized,
{
    pub fn enforcement(&self) -> &Enforcement {
        &self.enforcement
    }

    /// The value stored under `key`.
    ///
    /// Under [`Enforcement::Global`] an absent value is an error. An enforced
    /// key whose value is rejected by the validator is an error.
    pub fn get(&self, key: &str) -> Result<Option<&'a M::Value>> {
        self.resolve(key, None)
    }

    /// The value stored under `key`, or `fallback` when it is absent.
    ///
    /// For enforced keys the fallback is validated like a stored value.
    pub fn get_or<'r>(&self, key: &str, fallback: &'r M::Value) -> Result<&'r M::Value>
    where
        'a: 'r,
    {
        match self.resolve(key, Some(fallback))? {
            Some(value) => Ok(value),
            None => Ok(fallback),
        }
    }

    fn resolve<'r>(
        &self,
        key: &str,
        fallback: Option<&'r M::Value>,
    ) -> Result<Option<&'r M::Value>>
    where
        'a: 'r,
    {
        let value = self.source.value(key).or(fallback);
        let global = self.enforcement.is_global();

        if global && value.is_none() {
            tracing::trace!(key, "required key missing from source");
            return Err(ObjectKeyMissingError::single(key).into());
        }

        if let (Some(validator), Some(v)) = (&self.validator, value) {
            if self.enforcement.covers(key) && !validator(v) {
                tracing::trace!(key, "required key failed validation");
                return Err(KeyValueNotValidError::single(key).into());
            }
        }

        Ok(value)
    }
}

impl<M> fmt::Debug for EnforcedAccessor<'_, M>
where
    M: Source + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnforcedAccessor")
            .field("enforcement", &self.enforcement)
            .field("validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`EnforcedAccessor`].
///
/// Defaults to [`Enforcement::Global`] with no validator.
pub struct AccessorBuilder<'a, M: Source + ?Sized> {
    source: &'a M,
    enforcement: Enforcement,
    validator: Option<Validator<'a, M::Value>>,
}

impl<'a, M> AccessorBuilder<'a, M>
where
    M: Source + ?Sized,
{
    pub fn new(source: &'a M) -> Self {
        Self {
            source,
            enforcement: Enforcement::Global,
            validator: None,
        }
    }

    /// Require only the given keys.
    pub fn enforce<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.enforcement = Enforcement::keys(keys);
        self
    }

    /// Set the enforcement mode.
    pub fn enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }

    /// Validate enforced values with `f`.
    pub fn validate<F>(mut self, f: F) -> Self
    where
        F: Fn(&M::Value) -> bool + Send + Sync + 'a,
    {
        self.validator = Some(validator(f));
        self
    }

    /// Run the eager checks and return the accessor.
    pub fn build(self) -> std::result::Result<EnforcedAccessor<'a, M>, AccessError> {
        okvr(self.source, self.enforcement, self.validator)
    }
}
