//! # Grok Core
//!
//! Key-value accessors with enforcement, and the error taxonomy they raise.
//!
//! This crate does no I/O and holds no state. An accessor borrows a source
//! mapping and reads from it; it never mutates it.
//!
//! ## Key Types
//!
//! - [`Source`] - A read-only mapping from string keys to values
//! - [`Accessor`] - Reads values with an optional fallback ([`okv`])
//! - [`EnforcedAccessor`] - Reads values and enforces presence and validity ([`okvr`])
//! - [`Enforcement`] - Which keys an enforced accessor requires
//! - [`AccessError`] - Either [`ObjectKeyMissingError`] or [`KeyValueNotValidError`]
//!
//! ## Enforcement
//!
//! [`Enforcement::Keys`] is checked once, when the accessor is created, and
//! reports every offending key at once. Missing keys are reported before, and
//! instead of, invalid values. [`Enforcement::Global`] is checked on every
//! access, for whichever key is requested.

pub mod assert;
pub mod error;
pub mod object;
pub mod source;

pub use assert::never;
pub use error::{
    AccessError, KeyValueNotValidError, NeverReachAssertionError, ObjectKeyMissingError, Result,
};
pub use object::{
    okv, okvr, validator, Accessor, AccessorBuilder, EnforcedAccessor, Enforcement, Validator,
};
pub use source::{Source, Sparse};
