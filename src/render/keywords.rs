//! Keyword glossary rendering.

use serde_json::Value;

use super::{entries, heading, paragraph, ContentRenderer};
use crate::dom::Node;
use crate::error::RenderError;
use crate::models::{ContentType, Keyword};

/// Renders `{keywords: [{title, english?, content}]}`.
///
/// Per keyword: a heading, an "In English" paragraph when a translation is
/// present, then the content paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordsRenderer;

impl ContentRenderer for KeywordsRenderer {
    fn content_type(&self) -> ContentType {
        ContentType::Keywords
    }

    fn render_nodes(&self, payload: &Value) -> Result<Vec<Node>, RenderError> {
        let keywords: Vec<Keyword> = entries(payload, ContentType::Keywords)?;
        let mut nodes = Vec::with_capacity(keywords.len() * 3);

        for keyword in keywords {
            nodes.push(heading(keyword.title.as_str()));
            if let Some(english) = keyword.english() {
                nodes.push(paragraph(format!("In English: {}", english)));
            }
            nodes.push(paragraph(keyword.content));
        }

        Ok(nodes)
    }
}
