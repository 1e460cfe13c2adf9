//! # Grok
//!
//! Small utilities for reading values out of key-value mappings safely.
//!
//! ## Overview
//!
//! - **Accessors**: [`okv`] reads values with a fallback; [`okvr`] also
//!   enforces that keys are present and that their values pass a validator
//! - **HTTP**: header key, header mapping and method normalisation
//! - **System**: environment variables as a source, and the [`ensure`] validator
//!
//! ## Usage
//!
//! ```rust
//! use grok::{okvr, validator, Enforcement, GrokError};
//! use grok::system::{ensure, Environment};
//! use grok::http::normalise_method;
//!
//! fn configure(env: &Environment) -> grok::Result<()> {
//!     let vars = okvr(env, Enforcement::keys(["METHOD"]), Some(validator(ensure)))?;
//!
//!     let method = vars.get("METHOD")?.map(String::as_str).unwrap_or("GET");
//!     let method = normalise_method(method)?;
//!     assert_eq!(method.as_str(), "POST");
//!     Ok(())
//! }
//!
//! let env = Environment::from_iter([("METHOD", "post")]);
//! configure(&env).unwrap();
//!
//! let env = Environment::from_iter([("OTHER", "1")]);
//! assert!(matches!(configure(&env), Err(GrokError::Access(_))));
//! ```
//!
//! ## Re-exports
//!
//! - `grok::core` - Accessors, sources and errors
//! - `grok::http` - HTTP normalisation
//! - `grok::system` - Environment variables

pub mod error;

// Re-export component crates
pub use grok_core as core;
pub use grok_http as http;
pub use grok_system as system;

pub use error::{GrokError, Result};

// Re-export commonly used core types
pub use grok_core::{
    never, okv, okvr, validator, AccessError, Accessor, AccessorBuilder, EnforcedAccessor,
    Enforcement, KeyValueNotValidError, NeverReachAssertionError, ObjectKeyMissingError, Source,
    Sparse, Validator,
};
pub use grok_system::ensure;
