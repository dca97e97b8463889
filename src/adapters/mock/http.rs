//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, optionally after a delay.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// A response with the given status and JSON body.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }

    /// A response with the given status and raw body.
    pub fn raw(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use lessonview::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:8080/data/html/keywords.json",
///     MockResponse::json(200, &serde_json::json!({"keywords": []})),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Artificial latency by URL
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL. The URL is matched exactly.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Delay the response for a specific URL.
    pub fn set_delay(&self, url: &str, delay: Duration) {
        let mut delays = self.delays.lock().unwrap();
        delays.insert(url.to_string(), delay);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record_request(&self, method: &str, url: &str) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
        });
    }

    fn delay_for(&self, url: &str) -> Option<Duration> {
        self.delays.lock().unwrap().get(url).copied()
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        self.responses.lock().unwrap().get(url).cloned()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.record_request("GET", url);

        if let Some(delay) = self.delay_for(url) {
            tokio::time::sleep(delay).await;
        }

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            // Unknown resources behave like a static file server would.
            None => Ok(Response::new(404, "Not Found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_mock_http_client_new() {
        let client = MockHttpClient::new();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/data/html/keywords.json",
            MockResponse::raw(200, "{}"),
        );

        let response = client
            .get("http://test/data/html/keywords.json")
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("{}"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "http://test/data/html/keywords.json");
    }

    #[tokio::test]
    async fn test_get_with_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("http://test/down").await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_get_unconfigured_url_is_not_found() {
        let client = MockHttpClient::new();
        let response = client
            .get("http://test/missing")
            .await
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_delayed_response() {
        let client = MockHttpClient::new();
        client.set_response("http://test/slow", MockResponse::raw(200, "[]"));
        client.set_delay("http://test/slow", Duration::from_millis(20));

        let started = std::time::Instant::now();
        let response = client.get("http://test/slow").await.unwrap();
        assert_eq!(response.status, 200);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
