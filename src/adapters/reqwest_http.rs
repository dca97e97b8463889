//! [`HttpClient`] over reqwest.

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpError, Response};

/// Production transport. Cloning shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn classify(err: reqwest::Error) -> HttpError {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else {
            HttpError::Other(message)
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        let response = self.client.get(url).send().await.map_err(Self::classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::classify)?;
        Ok(Response::new(status, body))
    }
}
