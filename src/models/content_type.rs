use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// The kind of material requested; selects both the resource and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Keywords,
    Lectures,
    Questions,
}

impl ContentType {
    /// Every content type, in the order the sub-action buttons show them.
    pub const ALL: [ContentType; 3] = [
        ContentType::Keywords,
        ContentType::Lectures,
        ContentType::Questions,
    ];

    /// Lowercase name, used in resource paths and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Keywords => "keywords",
            ContentType::Lectures => "lectures",
            ContentType::Questions => "questions",
        }
    }

    /// Name of the top-level array inside a payload of this type.
    ///
    /// Always the plural type name.
    pub fn collection_field(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keywords" => Ok(ContentType::Keywords),
            "lectures" => Ok(ContentType::Lectures),
            "questions" => Ok(ContentType::Questions),
            _ => Err(RenderError::UnknownContentType {
                value: s.to_string(),
            }),
        }
    }
}
