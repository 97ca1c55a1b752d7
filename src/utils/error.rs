//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during trace parsing
///
/// All variants carry the 1-based line number so a diagnostic points
/// straight at the offending trace line.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: token '{token}' has no '=' separator")]
    MalformedToken { line: usize, token: String },

    #[error("line {line}: missing required field '{field}'")]
    MissingField { line: usize, field: String },

    #[error("line {line}: field '{field}' has non-integer value '{value}'")]
    NonIntegerField {
        line: usize,
        field: String,
        value: String,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
