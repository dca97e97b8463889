//! Content retrieval.
//!
//! Turns a [`ContentRequest`] into a parsed JSON payload with a single GET.

use serde_json::Value;

use crate::config::ViewerConfig;
use crate::dom::{Element, Node, Region};
use crate::error::{FetchError, NetworkError};
use crate::models::ContentRequest;
use crate::traits::HttpClient;

/// Inline style of error messages written into the content region.
pub const ERROR_STYLE: &str = "color: red;";

/// Fetches content documents from `{base_url}/{data_root}/{category}/{type}.json`.
#[derive(Debug, Clone)]
pub struct ContentFetcher<C> {
    client: C,
    base_url: String,
    data_root: String,
}

impl<C: HttpClient> ContentFetcher<C> {
    /// Create a fetcher using the base URL and data root of `config`.
    pub fn new(client: C, config: &ViewerConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            data_root: config.data_root.clone(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Absolute URL of the document for `request`.
    pub fn url_for(&self, request: &ContentRequest) -> String {
        format!("{}/{}", self.base_url, request.resource_path(&self.data_root))
    }

    /// Retrieve and parse the document for `request`.
    pub async fn fetch(&self, request: &ContentRequest) -> Result<Value, FetchError> {
        let url = self.url_for(request);
        tracing::debug!(
            "Fetching {} content for {} from {}",
            request.content_type,
            request.category,
            url
        );

        let response = self
            .client
            .get(&url)
            .await
            .map_err(|e| NetworkError::from_http_error(e, &url))?;

        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                url,
            }
            .into());
        }

        response.json::<Value>().map_err(|e| FetchError::Parse {
            url,
            message: e.to_string(),
        })
    }

    /// Log `err` and replace `content` with an inline message naming the
    /// type and category of `request`.
    pub fn report_failure(&self, request: &ContentRequest, err: &FetchError, content: &Region) {
        tracing::error!(code = err.error_code(), "Error fetching content: {}", err);
        content.replace(vec![load_error_message(
            request.category.as_str(),
            request.content_type.as_str(),
        )]);
    }
}

/// The inline message shown when content for `(category, content_type)`
/// cannot be loaded.
pub fn load_error_message(category: &str, content_type: &str) -> Node {
    Element::new("p")
        .with_attr("style", ERROR_STYLE)
        .with_text(format!(
            "Error loading {} content for {}. Please try again later.",
            content_type, category
        ))
        .into()
}
