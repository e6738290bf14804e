//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No registered format recognises the input.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The format was recognised but the bytes could not be decoded.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Decoded dimensions could not be turned into an image buffer.
    #[error("invalid image: {0}")]
    InvalidImage(#[from] pixcmp_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
