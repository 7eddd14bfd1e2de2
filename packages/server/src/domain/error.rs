//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// MessageBody validation error
    #[error("MessageBody cannot be empty")]
    MessageBodyEmpty,
}

/// Errors raised while loading the model artifact at startup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelLoadError {
    /// Artifact file does not exist
    #[error("model file '{0}' was not found")]
    NotFound(String),

    /// Artifact file exists but has no content
    #[error("model file '{0}' is empty")]
    Empty(String),

    /// Any other I/O failure while reading the artifact
    #[error("failed to read model file '{path}': {message}")]
    Io { path: String, message: String },
}
