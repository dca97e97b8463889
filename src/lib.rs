//! Lessonview - an educational content viewer
//!
//! Fetches per-category JSON documents (keyword glossaries, lecture decks,
//! question lists) and renders them into display regions as structured HTML.
//!
//! ```text
//! UI wiring → ViewController → ContentFetcher → render::{keywords, lectures, questions} → Region
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lessonview::prelude::*;
//!
//! # async fn run() -> Result<(), lessonview::error::NetworkError> {
//! let config = ViewerConfig::new().with_base_url("http://localhost:8080");
//! let page = Page::standard();
//! let controller = ViewController::new(config.http_client()?, page.clone(), &config);
//!
//! controller.display_content("html", ContentType::Keywords).await;
//! println!("{}", page.region("content").map(|r| r.to_html()).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod render;
pub mod traits;
