//! Error types for pixcmp-core operations.
//!
//! The core types can only fail while being constructed: a canonical
//! buffer whose byte length does not match its bounds is rejected up front,
//! so every buffer that exists satisfies `len == width * height * 4`.
//!
//! # Usage
//!
//! ```rust
//! use pixcmp_core::{Bounds, Error, RgbaBuffer};
//!
//! let err = RgbaBuffer::from_raw(Bounds::from_size(2, 2), vec![0; 3]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length does not match the requested dimensions.
    ///
    /// Returned when raw pixel data cannot describe a `width x height`
    /// image, or when the dimensions overflow the addressable size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
