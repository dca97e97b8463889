//! The transport seam.
//!
//! A render cycle issues exactly one GET for a static JSON document, so the
//! seam is a single method taking a URL. The controller runs against
//! [`MockHttpClient`](crate::adapters::MockHttpClient) in unit tests and
//! against reqwest everywhere else.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Issues the GET behind every render cycle.
///
/// A non-2xx status is a [`Response`], not an [`HttpError`]; the fetcher
/// decides what a status means.
///
/// ```ignore
/// use lessonview::traits::HttpClient;
///
/// async fn status_of<C: HttpClient>(client: &C) -> Option<u16> {
///     let response = client.get("http://localhost:8080/data/html/keywords.json").await.ok()?;
///     Some(response.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<Response, HttpError>;
}
