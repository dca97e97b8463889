//! Mock implementations for testing.
//!
//! Lets the controller and fetcher run without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
