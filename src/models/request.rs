use std::fmt;

use super::content_type::ContentType;
use super::text_utils::{capitalize_first, is_valid_category};
use crate::error::FetchError;

/// A subject grouping such as `html`, `css` or `js`.
///
/// The set is open; any name that is a safe single path segment is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Validate and wrap a category name.
    pub fn new(name: impl Into<String>) -> Result<Self, FetchError> {
        let name = name.into();
        if is_valid_category(&name) {
            Ok(Self(name))
        } else {
            Err(FetchError::InvalidCategory { category: name })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One user action: show `content_type` material for `category`.
///
/// Created per click and discarded once the render cycle ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub category: Category,
    pub content_type: ContentType,
}

impl ContentRequest {
    /// Build a request, validating the category name.
    pub fn new(category: &str, content_type: ContentType) -> Result<Self, FetchError> {
        Ok(Self {
            category: Category::new(category)?,
            content_type,
        })
    }

    /// Path of the JSON document relative to the server root,
    /// e.g. `data/html/keywords.json`.
    pub fn resource_path(&self, data_root: &str) -> String {
        let root = data_root.trim_matches('/');
        let file = format!(
            "{}/{}.json",
            urlencoding::encode(self.category.as_str()),
            self.content_type.as_str()
        );
        if root.is_empty() {
            file
        } else {
            format!("{}/{}", root, file)
        }
    }

    /// Heading text shown in the title region, e.g. `Html - Keywords`.
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            capitalize_first(self.category.as_str()),
            capitalize_first(self.content_type.as_str())
        )
    }
}
