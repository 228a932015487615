//! Error types for document import and persistence.
//!
//! Provides unified error handling for parsing, validating, and storing
//! map documents.

use thiserror::Error;

/// Errors that can occur while loading or saving a map document
#[derive(Error, Debug)]
pub enum MapFileError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document is missing a required top-level key
    #[error("Missing required key: {0}")]
    MissingKey(&'static str),

    /// Document parsed but the content is not a valid map
    #[error("Invalid document: {0}")]
    InvalidData(String),
}

/// Result type alias for document operations
pub type MapFileResult<T> = Result<T, MapFileError>;
