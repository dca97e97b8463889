//! Errors raised while turning a payload into display nodes.

use thiserror::Error;

/// Rendering and page-lookup failures.
///
/// None of these are fatal: the viewer logs them and leaves the page in a
/// consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The top-level collection is missing or is not an array.
    #[error("Malformed payload: '{field}' is {found}, expected an array")]
    MalformedPayload { field: String, found: String },

    /// A display region expected on the page does not exist.
    #[error("Display region '{id}' not found on the page")]
    MissingUiElement { id: String },

    /// The requested content type has no renderer.
    #[error("Unknown content type '{value}'")]
    UnknownContentType { value: String },
}

impl RenderError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RenderError::MalformedPayload { .. } => "E_RENDER_MALFORMED",
            RenderError::MissingUiElement { .. } => "E_RENDER_MISSING_REGION",
            RenderError::UnknownContentType { .. } => "E_RENDER_UNKNOWN_TYPE",
        }
    }
}
