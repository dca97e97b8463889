//! Content data model: what is requested and what comes back.

mod content_type;
pub mod payload;
mod request;
mod text_utils;

pub use content_type::ContentType;
pub use payload::{Answer, Keyword, Lecture, LectureItem, Question};
pub use request::{Category, ContentRequest};
pub use text_utils::{capitalize_first, is_valid_category};
