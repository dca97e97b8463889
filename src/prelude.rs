//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lessonview::prelude::*;
//! ```

// Orchestration
pub use crate::controller::{DisplayOutcome, ViewController};
pub use crate::fetcher::ContentFetcher;

// Configuration
pub use crate::config::ViewerConfig;

// Display model
pub use crate::dom::{Node, Page, Region};

// Content model
pub use crate::models::{Category, ContentRequest, ContentType};

// Rendering
pub use crate::render::{render_payload, ContentRenderer};

// Errors
pub use crate::error::{FetchError, NetworkError, RenderError};

// HTTP
pub use crate::adapters::ReqwestHttpClient;
pub use crate::traits::HttpClient;
