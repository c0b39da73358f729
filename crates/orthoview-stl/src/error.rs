//! Error types for STL decoding.

use thiserror::Error;

/// Errors that can occur while decoding an STL buffer into a mesh.
///
/// Every variant is terminal for the current call: decoding is
/// deterministic, so a malformed input fails identically on retry and
/// nothing is retried internally.
#[derive(Error, Debug)]
pub enum StlError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized or unparseable structure (no vertex data, buffer too
    /// small to hold a binary header).
    #[error("unrecognized STL data: {0}")]
    Format(String),

    /// Declared triangle count exceeds the bytes actually present.
    #[error("truncated binary STL: need {expected} bytes, found {actual}")]
    Truncated {
        /// Bytes required by the declared triangle count.
        expected: usize,
        /// Bytes actually present in the buffer.
        actual: usize,
    },

    /// Every triangle was degenerate; nothing left to project.
    #[error("no valid faces after degenerate-triangle removal")]
    NoValidFaces,

    /// All vertices coincide; the bounding box cannot be normalized.
    #[error("mesh bounding box has zero extent")]
    ZeroExtent,
}

impl StlError {
    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

/// Result type for STL decoding operations.
pub type Result<T> = std::result::Result<T, StlError>;
