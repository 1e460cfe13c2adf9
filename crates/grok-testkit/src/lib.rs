//! # Grok Testkit
//!
//! Testing utilities for Grok.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Source mappings used across the test suites
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use grok_core::okv;
//! use grok_testkit::generators::SourceParams;
//!
//! proptest! {
//!     #[test]
//!     fn present_keys_are_returned(params: SourceParams) {
//!         for (key, value) in &params.source {
//!             prop_assert_eq!(okv(&params.source).get(key), Some(value));
//!         }
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use grok_testkit::fixtures;
//!
//! let source = fixtures::person();
//! assert_eq!(source["name"], "jane");
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{empty, falsy, person};
pub use generators::{SourceParams, EnforcementParams};
