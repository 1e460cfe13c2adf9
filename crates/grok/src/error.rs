//! Error types for Grok.

use grok_core::{AccessError, KeyValueNotValidError, ObjectKeyMissingError};
use grok_http::HttpError;
use thiserror::Error;

/// Errors raised by any Grok component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrokError {
    /// Accessor enforcement error.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// HTTP normalisation error.
    #[error("http error: {0}")]
    Http(#[from] HttpError),
}

impl From<ObjectKeyMissingError> for GrokError {
    fn from(e: ObjectKeyMissingError) -> Self {
        GrokError::Access(e.into())
    }
}

impl From<KeyValueNotValidError> for GrokError {
    fn from(e: KeyValueNotValidError) -> Self {
        GrokError::Access(e.into())
    }
}

/// Result type for Grok operations.
pub type Result<T> = std::result::Result<T, GrokError>;
