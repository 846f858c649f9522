//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A style value that cannot be expressed in the generated module.
    #[error("Invalid value for '{property}' on '{selector}': {message}")]
    InvalidValue {
        selector: String,
        property: String,
        message: String,
    },

    /// Failure reported by a block serializer.
    #[error("Serializer error: {0}")]
    Serializer(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodegenError {
    /// Create an invalid value error.
    pub fn invalid_value(
        selector: impl Into<String>,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            selector: selector.into(),
            property: property.into(),
            message: message.into(),
        }
    }
}
