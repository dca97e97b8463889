//! Payload renderers.
//!
//! Each content type has one renderer turning its payload into an ordered
//! list of display nodes. Dispatch is a closed match over [`ContentType`], so
//! adding a type without a renderer does not compile.
//!
//! All renderers follow the same policy for bad data:
//! - top-level collection missing or not an array: `MalformedPayload`,
//!   logged by [`render_payload`], nothing appended
//! - a single entry (or nested item) missing a required field: logged and
//!   skipped, the rest still renders

mod keywords;
mod lectures;
mod questions;

pub use keywords::KeywordsRenderer;
pub use lectures::LecturesRenderer;
pub use questions::QuestionsRenderer;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dom::{Node, Region};
use crate::error::RenderError;
use crate::models::{payload, ContentType};

/// Converts a payload of one content type into display nodes.
pub trait ContentRenderer: Send + Sync {
    /// The content type this renderer handles.
    fn content_type(&self) -> ContentType;

    /// Build the nodes for `payload` without touching any region.
    fn render_nodes(&self, payload: &Value) -> Result<Vec<Node>, RenderError>;
}

impl ContentType {
    /// The renderer for this content type.
    pub fn renderer(&self) -> &'static dyn ContentRenderer {
        match self {
            ContentType::Keywords => &KeywordsRenderer,
            ContentType::Lectures => &LecturesRenderer,
            ContentType::Questions => &QuestionsRenderer,
        }
    }
}

/// Render `payload` as `content_type` and append the nodes to `target`.
///
/// Returns the number of nodes appended. A malformed payload is logged and
/// appends nothing.
pub fn render_payload(content_type: ContentType, payload: &Value, target: &Region) -> usize {
    match content_type.renderer().render_nodes(payload) {
        Ok(nodes) => {
            let count = nodes.len();
            target.extend(nodes);
            count
        }
        Err(err) => {
            tracing::error!(code = err.error_code(), "Cannot render {}: {}", content_type, err);
            0
        }
    }
}

/// The heading that opens every entry.
pub(crate) fn heading(text: impl Into<String>) -> Node {
    Node::text_element("h3", text)
}

pub(crate) fn paragraph(text: impl Into<String>) -> Node {
    Node::text_element("p", text)
}

/// Decode the entries of the top-level collection, skipping malformed ones.
pub(crate) fn entries<T: DeserializeOwned>(
    payload: &Value,
    content_type: ContentType,
) -> Result<Vec<T>, RenderError> {
    let raw = payload::collection(payload, content_type)?;
    Ok(raw
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| decode_or_skip(entry, content_type.as_str(), index))
        .collect())
}

/// Decode one entry, logging and returning `None` if it is malformed.
pub(crate) fn decode_or_skip<T: DeserializeOwned>(
    entry: &Value,
    context: &str,
    index: usize,
) -> Option<T> {
    match payload::decode_entry(entry) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Skipping malformed {} entry #{}: {}", context, index, err);
            None
        }
    }
}
