//! Errors raised while retrieving a content document.

use thiserror::Error;

use super::network::NetworkError;

/// Failure to produce a parsed payload for a content request.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Transport failure or non-success status.
    #[error("{0}")]
    Network(NetworkError),

    /// The response body was not valid JSON.
    #[error("Invalid JSON in '{url}': {message}")]
    Parse { url: String, message: String },

    /// The category cannot be used to build a resource path.
    #[error("Invalid category '{category}'")]
    InvalidCategory { category: String },
}

impl FetchError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network(err) => err.error_code(),
            FetchError::Parse { .. } => "E_FETCH_PARSE",
            FetchError::InvalidCategory { .. } => "E_FETCH_CATEGORY",
        }
    }
}

impl From<NetworkError> for FetchError {
    fn from(err: NetworkError) -> Self {
        FetchError::Network(err)
    }
}
