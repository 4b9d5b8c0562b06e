//! All error types for the vlang crate.
//!
//! These are returned from fallible operations (configuration, parsing, validation, I/O).
//! Per-key translation problems are not errors: they surface as
//! [`crate::diagnostic::Diagnostic`] sentinel strings instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid range `{0}`")]
    InvalidRange(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("filter `{0}` is not available")]
    UnknownFilter(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn configuration_error(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
