//! Scrollbar error types

use thiserror::Error;

/// Errors produced while reading scrollbar options
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The input is not valid JSON
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed, but is not an object (or null)
    #[error("options must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Result type for options parsing
pub type Result<T> = std::result::Result<T, OptionsError>;
