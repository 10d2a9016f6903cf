//! Error types for doc-codegen

use thiserror::Error;

use crate::template::TemplateKey;

/// Result type alias for doc-codegen operations
pub type Result<T> = std::result::Result<T, DocGenError>;

/// Errors that can occur during comment generation
///
/// A refused element is not an error: the generator returns `Ok(None)` for
/// elements the configuration filters out. Every variant here is local to a
/// single element; batch generation isolates failures per element.
#[derive(Error, Debug)]
pub enum DocGenError {
    #[error("no template registered for '{0}'")]
    MissingTemplate(TemplateKey),

    #[error("failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("invalid template '{name}': {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("malformed element descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for DocGenError {
    fn from(err: config::ConfigError) -> Self {
        DocGenError::ConfigError(err.to_string())
    }
}
