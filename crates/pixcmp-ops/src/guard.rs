//! Comparability guards.
//!
//! Both comparators require the two inputs to cover exactly the same
//! rectangle. The check is structural and explicit: it never infers a
//! common region, crops, or aligns.
//!
//! # Example
//!
//! ```rust
//! use pixcmp_core::{Bounds, RgbaBuffer};
//! use pixcmp_ops::guard::ensure_comparable;
//! use pixcmp_ops::OpsError;
//!
//! let a = RgbaBuffer::new(2, 2);
//! let b = RgbaBuffer::new(3, 3);
//! assert_eq!(ensure_comparable(&a, &a), Ok(Bounds::from_size(2, 2)));
//! assert!(matches!(ensure_comparable(&a, &b), Err(OpsError::BoundsMismatch { .. })));
//! ```

use crate::{OpsError, OpsResult};
use pixcmp_core::{Bounds, DecodedImage};

/// Validates that two images have structurally equal bounds.
///
/// # Returns
///
/// The shared [`Bounds`] when origin and extent both match.
/// `Err(BoundsMismatch)` otherwise, carrying both bounds.
pub fn ensure_comparable<A, B>(a: &A, b: &B) -> OpsResult<Bounds>
where
    A: DecodedImage + ?Sized,
    B: DecodedImage + ?Sized,
{
    ensure_same_bounds(a.bounds(), b.bounds())
}

/// Bounds-only form of [`ensure_comparable`].
pub fn ensure_same_bounds(a: Bounds, b: Bounds) -> OpsResult<Bounds> {
    if a != b {
        return Err(OpsError::BoundsMismatch { a, b });
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixcmp_core::RgbaBuffer;

    #[test]
    fn test_same_bounds() {
        let b = Bounds::new(-2, 3, 5, 5);
        assert_eq!(ensure_same_bounds(b, b), Ok(b));
    }

    #[test]
    fn test_extent_mismatch() {
        let a = Bounds::from_size(2, 2);
        let b = Bounds::from_size(3, 3);
        assert_eq!(
            ensure_same_bounds(a, b),
            Err(OpsError::BoundsMismatch { a, b })
        );
    }

    #[test]
    fn test_origin_mismatch() {
        let a = RgbaBuffer::with_bounds(Bounds::new(0, 0, 4, 4));
        let b = RgbaBuffer::with_bounds(Bounds::new(1, 0, 4, 4));
        let err = ensure_comparable(&a, &b).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("(0, 0) 4x4"));
        assert!(msg.contains("(1, 0) 4x4"));
    }
}
