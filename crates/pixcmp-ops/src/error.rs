//! Error types for comparison operations.

use pixcmp_core::Bounds;
use thiserror::Error;

/// Error type for comparison operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// The two images do not cover the same rectangle.
    ///
    /// Raised by every comparator when `a.bounds() != b.bounds()`. Origin
    /// and extent must both match; carries both bounds for diagnostics.
    #[error("image bounds not equal: {a} vs {b}")]
    BoundsMismatch {
        /// Bounds of the first image.
        a: Bounds,
        /// Bounds of the second image.
        b: Bounds,
    },
}

/// Result type for comparison operations.
pub type OpsResult<T> = Result<T, OpsError>;
