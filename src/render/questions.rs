//! Question list rendering.

use serde_json::Value;

use super::{decode_or_skip, entries, heading, paragraph, ContentRenderer};
use crate::dom::Node;
use crate::error::RenderError;
use crate::models::{Answer, ContentType, Question};

/// Renders `{questions: [{question, answers: [{answer}]}]}`.
///
/// Per question: a heading followed by one paragraph per answer, in order.
/// A question without an `answers` array is skipped entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionsRenderer;

impl ContentRenderer for QuestionsRenderer {
    fn content_type(&self) -> ContentType {
        ContentType::Questions
    }

    fn render_nodes(&self, payload: &Value) -> Result<Vec<Node>, RenderError> {
        let questions: Vec<Question> = entries(payload, ContentType::Questions)?;
        let mut nodes = Vec::new();

        for question in questions {
            nodes.push(heading(question.question.as_str()));
            for (index, raw) in question.answers.iter().enumerate() {
                if let Some(answer) = decode_or_skip::<Answer>(raw, "answer", index) {
                    nodes.push(paragraph(answer.answer));
                }
            }
        }

        Ok(nodes)
    }
}
