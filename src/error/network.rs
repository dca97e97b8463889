//! Network-related error types.
//!
//! This module defines errors that occur while retrieving content documents,
//! from transport failures up to non-success HTTP statuses.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        url: String,
    },

    /// HTTP status error (non-2xx response).
    HttpStatus {
        status: u16,
        url: String,
    },

    /// The resource URL could not be used.
    InvalidUrl {
        url: String,
    },

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Classify an error from the HTTP seam for the given request URL.
    pub fn from_http_error(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, url } => {
                write!(f, "HTTP {} while fetching '{}'", status, url)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}
