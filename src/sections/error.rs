//! Error types for the layers around the parser
//!
//! The parser itself has no error type: every input is a valid document. Errors only come
//! from decoding responses, rendering, loading configuration and file I/O.

use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Error decoding an analysis response or raw model output.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Invalid input kind: {0}")]
    InvalidInputKind(String),
}
