//! Errors from resolving a page of Pokémon.

use thiserror::Error;

use crate::traits::HttpError;

/// Alert text for an unknown Pokémon.
pub const MSG_NOT_FOUND: &str = "Pokemon not found";

/// Alert text for every other failure.
pub const MSG_REQUEST_FAILED: &str = "An error occurred with the request";

/// A page or search load failed.
///
/// Any one of these aborts the whole load; partial results are dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered 404
    #[error("not found: {url}")]
    NotFound { url: String },

    /// The server answered with another non-2xx status
    #[error("request to {url} failed with HTTP {status}")]
    RequestFailed { url: String, status: u16 },

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// The body was not the JSON shape we expected
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

impl FetchError {
    /// Classify a non-success HTTP status.
    pub fn from_status(url: &str, status: u16) -> Self {
        if status == 404 {
            FetchError::NotFound {
                url: url.to_string(),
            }
        } else {
            FetchError::RequestFailed {
                url: url.to_string(),
                status,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// Human-readable message for the alert dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => MSG_NOT_FOUND,
            _ => MSG_REQUEST_FAILED,
        }
    }
}
