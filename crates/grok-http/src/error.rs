//! Error types for the HTTP module.

use thiserror::Error;

/// Errors that can occur while normalising HTTP values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The method name is not one of the supported methods.
    #[error("unknown http method: {0}")]
    UnknownMethod(String),
}

/// Result type for HTTP operations.
pub type Result<T> = std::result::Result<T, HttpError>;
