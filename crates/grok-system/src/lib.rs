//! # Grok System
//!
//! Environment variables as a [`grok_core::Source`], plus [`ensure`], a
//! validator that rejects blank values.
//!
//! ```rust
//! use grok_core::{okvr, validator, Enforcement};
//! use grok_system::{ensure, Environment};
//!
//! let env = Environment::from_iter([("API_URL", "https://example.com"), ("API_KEY", "  ")]);
//!
//! let err = okvr(&env, Enforcement::keys(["API_URL", "API_KEY"]), Some(validator(ensure)))
//!     .unwrap_err();
//! assert_eq!(err.keys(), ["API_KEY"]);
//! ```

pub mod environment;

pub use environment::{cleanse, ensure, ensure_str, normalise, Environment};
