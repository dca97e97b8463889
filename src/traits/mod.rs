//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used by the content fetcher

pub mod http;

pub use http::{HttpClient, HttpError, Response};
