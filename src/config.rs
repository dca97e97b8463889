//! Viewer configuration.

use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::dom::{CONTENT_REGION_ID, TITLE_REGION_ID};
use crate::error::NetworkError;

/// Default server the content documents are served from.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default directory, relative to the server root, holding the documents.
pub const DEFAULT_DATA_ROOT: &str = "data";

/// Configuration for the content viewer.
///
/// Use the builder methods to customize.
///
/// # Example
///
/// ```
/// use lessonview::config::ViewerConfig;
/// use std::time::Duration;
///
/// let config = ViewerConfig::new()
///     .with_base_url("https://learn.example.com/")
///     .with_request_timeout(Duration::from_secs(10));
/// assert_eq!(config.base_url, "https://learn.example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Server root, without a trailing slash
    pub base_url: String,
    /// Directory of the per-category documents (default: "data")
    pub data_root: String,
    /// Id of the title region (default: "content-title")
    pub title_region_id: String,
    /// Id of the content region (default: "content")
    pub content_region_id: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_root: DEFAULT_DATA_ROOT.to_string(),
            title_region_id: TITLE_REGION_ID.to_string(),
            content_region_id: CONTENT_REGION_ID.to_string(),
            request_timeout: None,
        }
    }
}

impl ViewerConfig {
    /// Create a new ViewerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server root. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the data directory.
    pub fn with_data_root(mut self, root: impl Into<String>) -> Self {
        self.data_root = root.into();
        self
    }

    /// Set the title region id.
    pub fn with_title_region_id(mut self, id: impl Into<String>) -> Self {
        self.title_region_id = id.into();
        self
    }

    /// Set the content region id.
    pub fn with_content_region_id(mut self, id: impl Into<String>) -> Self {
        self.content_region_id = id.into();
        self
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the production HTTP client honouring this configuration.
    pub fn http_client(&self) -> Result<ReqwestHttpClient, NetworkError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| NetworkError::Other {
            message: format!("Failed to build HTTP client: {}", e),
        })?;
        Ok(ReqwestHttpClient::with_client(client))
    }
}
