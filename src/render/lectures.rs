//! Lecture deck rendering.

use serde_json::Value;

use super::{entries, heading, paragraph, ContentRenderer};
use crate::dom::{Element, Node};
use crate::error::RenderError;
use crate::models::{ContentType, Lecture, LectureItem};

/// Renders `{lectures: [{title, content: [item]}]}`.
///
/// | item type | nodes                                   |
/// |-----------|-----------------------------------------|
/// | text      | `<p>`                                   |
/// | image     | `<img src alt>` then a caption `<p>`    |
/// | code      | `<pre>`                                 |
/// | quote     | `<blockquote>` with optional `<footer>` |
/// | other     | nothing                                 |
#[derive(Debug, Clone, Copy, Default)]
pub struct LecturesRenderer;

impl ContentRenderer for LecturesRenderer {
    fn content_type(&self) -> ContentType {
        ContentType::Lectures
    }

    fn render_nodes(&self, payload: &Value) -> Result<Vec<Node>, RenderError> {
        let lectures: Vec<Lecture> = entries(payload, ContentType::Lectures)?;
        let mut nodes = Vec::new();

        for lecture in lectures {
            nodes.push(heading(lecture.title.as_str()));
            for (index, raw) in lecture.content.iter().enumerate() {
                match LectureItem::from_value(raw) {
                    Ok(item) => push_item(&mut nodes, item),
                    Err(err) => {
                        tracing::warn!("Skipping malformed lecture item #{}: {}", index, err)
                    }
                }
            }
        }

        Ok(nodes)
    }
}

fn push_item(nodes: &mut Vec<Node>, item: LectureItem) {
    match item {
        LectureItem::Text { data } => nodes.push(paragraph(data)),
        LectureItem::Image { data, caption } => {
            let caption = caption.unwrap_or_default();
            nodes.push(
                Element::new("img")
                    .with_attr("src", data)
                    .with_attr("alt", caption.as_str())
                    .into(),
            );
            nodes.push(paragraph(caption));
        }
        LectureItem::Code { data } => nodes.push(Node::text_element("pre", data)),
        LectureItem::Quote { data, attribute } => {
            let mut quote = Element::new("blockquote").with_text(data);
            if let Some(author) = attribute.filter(|author| !author.is_empty()) {
                quote = quote.with_child(Node::text_element("footer", author));
            }
            nodes.push(quote.into());
        }
        LectureItem::Unrecognized => {}
    }
}
