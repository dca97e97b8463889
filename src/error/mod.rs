//! Error handling for the viewer.
//!
//! - **Network errors**: transport failures and non-success statuses
//! - **Fetch errors**: everything that prevents a parsed payload
//! - **Render errors**: malformed payloads, missing regions, unknown types
//!
//! The viewer itself never lets these escape a render cycle; they are logged
//! and surfaced as an inline message. The types are public so that embedding
//! code can use the lower-level APIs directly.

mod fetch;
mod network;
mod render;

pub use fetch::FetchError;
pub use network::NetworkError;
pub use render::RenderError;
