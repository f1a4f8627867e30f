//! Error type for authenticated API calls.
//!
//! ERROR HANDLING
//! ==============
//! `MissingToken` and `Unauthorized` are raised after the redirect to the
//! sign-in page has already been issued, so callers only need to stop their
//! flow. Everything else is left for the caller to interpret.

use thiserror::Error;

/// Failure modes of the request helper and endpoint wrappers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("No token")]
    MissingToken,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("request failed: {0}")]
    Status(u16),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
