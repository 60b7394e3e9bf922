//! Description error types.

use thiserror::Error;

/// Errors that can occur while loading, parsing or encoding descriptions.
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// A token could not be interpreted
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The text ended before the header was complete
    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    /// Reading or writing a description file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Binary serialization failed: {0}")]
    Binary(#[from] bincode::Error),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
