//! Render cycle orchestration.
//!
//! A render cycle runs: loading placeholder → fetch → title + rendered
//! content, or an inline error. Cycles may overlap (a second click before the
//! first response arrives). Each cycle takes a generation number when it
//! starts and only commits its result if no newer cycle has started since,
//! so a slow stale response can never replace fresher content.

use std::sync::{Mutex, MutexGuard};

use crate::config::ViewerConfig;
use crate::dom::{Node, Page, Region};
use crate::error::{FetchError, RenderError};
use crate::fetcher::{load_error_message, ContentFetcher};
use crate::models::{ContentRequest, ContentType};
use crate::render::render_payload;
use crate::traits::HttpClient;

/// Placeholder shown while a document is being fetched.
pub const LOADING_TEXT: &str = "Loading...";

/// How a render cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// Content was rendered; `nodes` were appended to the content region.
    Rendered { nodes: usize },
    /// The document could not be loaded; an inline error is shown.
    Failed,
    /// A newer cycle started while this one was waiting; nothing was written.
    Superseded,
    /// The title or content region is missing; nothing was written.
    MissingRegion,
    /// The content type string is not one the viewer knows; nothing was written.
    UnknownType,
}

/// Owns the display regions and drives render cycles against them.
pub struct ViewController<C> {
    fetcher: ContentFetcher<C>,
    page: Page,
    title_region_id: String,
    content_region_id: String,
    /// Generation of the most recently started cycle.
    latest: Mutex<u64>,
}

impl<C: HttpClient> ViewController<C> {
    /// Create a controller writing into the regions of `page` named by `config`.
    pub fn new(client: C, page: Page, config: &ViewerConfig) -> Self {
        Self {
            fetcher: ContentFetcher::new(client, config),
            page,
            title_region_id: config.title_region_id.clone(),
            content_region_id: config.content_region_id.clone(),
            latest: Mutex::new(0),
        }
    }

    pub fn fetcher(&self) -> &ContentFetcher<C> {
        &self.fetcher
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Generation of the most recently started cycle (0 before the first).
    pub fn generation(&self) -> u64 {
        *self.lock_latest()
    }

    fn lock_latest(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Look up both regions, logging the first one that is missing.
    fn regions(&self) -> Option<(Region, Region)> {
        let lookup = |id: &str| {
            let region = self.page.region(id);
            if region.is_none() {
                let err = RenderError::MissingUiElement { id: id.to_string() };
                tracing::error!(code = err.error_code(), "{}", err);
            }
            region
        };
        let content = lookup(&self.content_region_id)?;
        let title = lookup(&self.title_region_id)?;
        Some((title, content))
    }

    /// Show `content_type` material for `category`, with the type given as
    /// a string as it arrives from UI wiring.
    pub async fn display_str(&self, category: &str, content_type: &str) -> DisplayOutcome {
        let Some((title, content)) = self.regions() else {
            return DisplayOutcome::MissingRegion;
        };
        match content_type.parse::<ContentType>() {
            Ok(content_type) => {
                self.display_in(category, content_type, &title, &content).await
            }
            Err(err) => {
                tracing::error!(code = err.error_code(), "{}", err);
                DisplayOutcome::UnknownType
            }
        }
    }

    /// Show `content_type` material for `category`.
    pub async fn display_content(
        &self,
        category: &str,
        content_type: ContentType,
    ) -> DisplayOutcome {
        let Some((title, content)) = self.regions() else {
            return DisplayOutcome::MissingRegion;
        };
        self.display_in(category, content_type, &title, &content).await
    }

    /// Show the material described by an already validated request.
    pub async fn display(&self, request: &ContentRequest) -> DisplayOutcome {
        let Some((title, content)) = self.regions() else {
            return DisplayOutcome::MissingRegion;
        };
        self.run_cycle(request, &title, &content).await
    }

    async fn display_in(
        &self,
        category: &str,
        content_type: ContentType,
        title: &Region,
        content: &Region,
    ) -> DisplayOutcome {
        match ContentRequest::new(category, content_type) {
            Ok(request) => self.run_cycle(&request, title, content).await,
            Err(err) => {
                self.begin(title, content);
                tracing::error!(code = err.error_code(), "{}", err);
                content.replace(vec![load_error_message(category, content_type.as_str())]);
                DisplayOutcome::Failed
            }
        }
    }

    /// Start a cycle: take a new generation and show the loading state.
    fn begin(&self, title: &Region, content: &Region) -> u64 {
        let mut latest = self.lock_latest();
        *latest += 1;
        content.replace(vec![Node::text_element("p", LOADING_TEXT)]);
        title.clear();
        *latest
    }

    async fn run_cycle(
        &self,
        request: &ContentRequest,
        title: &Region,
        content: &Region,
    ) -> DisplayOutcome {
        let generation = self.begin(title, content);
        tracing::debug!(
            generation,
            "Loading {} for {}",
            request.content_type,
            request.category
        );

        let result = self.fetcher.fetch(request).await;

        // Checking and writing under the same lock keeps a newer cycle from
        // starting between the two.
        let latest = self.lock_latest();
        if *latest != generation {
            tracing::debug!(
                generation,
                latest = *latest,
                "Discarding stale {} response for {}",
                request.content_type,
                request.category
            );
            return DisplayOutcome::Superseded;
        }

        self.commit(request, result, title, content)
    }

    fn commit(
        &self,
        request: &ContentRequest,
        result: Result<serde_json::Value, FetchError>,
        title: &Region,
        content: &Region,
    ) -> DisplayOutcome {
        match result {
            Ok(payload) => {
                content.clear();
                title.replace(vec![Node::text_element("h2", request.title())]);
                let nodes = render_payload(request.content_type, &payload, content);
                tracing::info!(
                    nodes,
                    "Rendered {} for {}",
                    request.content_type,
                    request.category
                );
                DisplayOutcome::Rendered { nodes }
            }
            Err(err) => {
                self.fetcher.report_failure(request, &err, content);
                DisplayOutcome::Failed
            }
        }
    }
}
