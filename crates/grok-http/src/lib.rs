//! # Grok HTTP
//!
//! Normalisation for HTTP header keys, header mappings and methods.
//!
//! Header keys are case-insensitive, so normalised keys are lowercase.
//! Methods are normalised to their uppercase names.
//!
//! A [`HeaderMapping`] is a [`grok_core::Source`], so enforced accessors can
//! read from it directly:
//!
//! ```rust
//! use grok_core::{okvr, Enforcement};
//! use grok_http::{normalise_header_mapping, HeaderMapping};
//!
//! let headers = HeaderMapping::from([("Content-Type".to_string(), "text/plain".to_string())]);
//! let headers = normalise_header_mapping(&headers);
//!
//! let accessor = okvr(&headers, Enforcement::keys(["content-type"]), None).unwrap();
//! assert_eq!(accessor.get("content-type").unwrap().map(String::as_str), Some("text/plain"));
//! ```

pub mod error;
pub mod header;
pub mod method;

pub use error::{HttpError, Result};
pub use header::{
    ensure_header_mapping, normalise_header_key, normalise_header_mapping, HeaderKey,
    HeaderMapping, HeaderValue,
};
pub use method::{normalise_method, HttpMethod};
