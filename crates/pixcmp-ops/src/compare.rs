//! Difference scoring between two images.
//!
//! Two comparators produce an [`ErrorScore`], a non-negative integer that is
//! 0 for identical images and grows with the total color difference:
//!
//! - [`compare_precise`] - visits every coordinate and compares the 16-bit
//!   premultiplied channels of any two [`DecodedImage`]s
//! - [`compare_fast`] - scans two canonical [`RgbaBuffer`]s byte by byte,
//!   with no per-pixel conversion; typically more than 10x faster
//!
//! Both require structurally equal [`Bounds`](pixcmp_core::Bounds) and
//! return [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch)
//! otherwise.
//!
//! # Formulas
//!
//! ```text
//! precise = isqrt( sum over pixels of sum over channels of (|a - b|^2 >> 2) )   16-bit channels
//! fast    = isqrt( sum over bytes of (a - b)^2 )                                  8-bit bytes
//! ```
//!
//! # Score Scales Differ
//!
//! The two scores are **not** interchangeable. The precise score works on
//! 16-bit channels (each byte `v` becomes `v * 257`) and divides every
//! squared term by 4; the fast score works on raw bytes. For the same pair
//! of canonical images the precise score is roughly `257 / 2` times the fast
//! one. Golden thresholds must be recorded against one method and checked
//! with that same method.
//!
//! ```rust
//! use pixcmp_core::{Bounds, RgbaBuffer};
//! use pixcmp_ops::{compare_fast, compare_precise};
//!
//! let black = RgbaBuffer::filled(Bounds::from_size(2, 2), [0, 0, 0, 255]);
//! let white = RgbaBuffer::filled(Bounds::from_size(2, 2), [255, 255, 255, 255]);
//!
//! assert_eq!(compare_precise(&black, &white).unwrap(), 113_509);
//! assert_eq!(compare_fast(&black, &white).unwrap(), 883);
//! ```
//!
//! # Alpha
//!
//! Colors are premultiplied, so alpha differences are partly counted twice
//! when alpha is included. [`CompareOptions::include_alpha`] (default
//! `true`) lets the precise comparator skip the alpha term. The fast
//! comparator always scans every byte, alpha included.

use crate::guard::{ensure_comparable, ensure_same_bounds};
use crate::kernel::{pixel_sq_diff16, score, sq_diff8, ErrorScore};
use crate::OpsResult;
use pixcmp_core::{DecodedImage, RgbaBuffer};
use tracing::{debug, trace};

/// Options for the precise comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Include the alpha channel in the per-pixel sum. Default: `true`.
    pub include_alpha: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            include_alpha: true,
        }
    }
}

impl CompareOptions {
    /// Default options: alpha included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the alpha channel contributes to the score.
    pub fn with_alpha(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }
}

/// Per-pixel comparison of two decoded images with default options.
///
/// # Errors
///
/// [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch) if the
/// bounds differ in origin or extent.
pub fn compare_precise<A, B>(a: &A, b: &B) -> OpsResult<ErrorScore>
where
    A: DecodedImage + ?Sized,
    B: DecodedImage + ?Sized,
{
    compare_precise_with(a, b, &CompareOptions::default())
}

/// Per-pixel comparison of two decoded images.
///
/// For every coordinate of the shared bounds, sums the scaled squared
/// differences of R, G, B (and A when `options.include_alpha`) into a
/// 64-bit total, then returns its floored square root.
///
/// # Errors
///
/// [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch) if the
/// bounds differ in origin or extent.
///
/// # Example
///
/// ```rust
/// use pixcmp_core::{Bounds, Rgba64Buffer};
/// use pixcmp_ops::{compare_precise_with, CompareOptions};
///
/// let a = Rgba64Buffer::filled(Bounds::from_size(1, 1), [0, 0, 0, 0]);
/// let b = Rgba64Buffer::filled(Bounds::from_size(1, 1), [0, 0, 0, 0xffff]);
///
/// let no_alpha = CompareOptions::new().with_alpha(false);
/// assert_eq!(compare_precise_with(&a, &b, &no_alpha).unwrap(), 0);
/// assert_eq!(compare_precise_with(&a, &b, &CompareOptions::new()).unwrap(), 32_767);
/// ```
pub fn compare_precise_with<A, B>(a: &A, b: &B, options: &CompareOptions) -> OpsResult<ErrorScore>
where
    A: DecodedImage + ?Sized,
    B: DecodedImage + ?Sized,
{
    let bounds = ensure_comparable(a, b)?;
    trace!(bounds = %bounds, include_alpha = options.include_alpha, "compare_precise");

    let total: u64 = bounds
        .rows()
        .map(|y| precise_row_total(a, b, y, options))
        .sum();

    let result = score(total);
    debug!(total, score = result, "compare_precise done");
    Ok(result)
}

/// Byte-level comparison of two canonical buffers.
///
/// Walks both byte sequences in lockstep and sums `(x - y)^2` per byte,
/// then returns the floored square root of the total.
///
/// Only meaningful on canonical buffers; use
/// [`normalize`](crate::normalize::normalize) first for anything else.
///
/// # Errors
///
/// [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch) if the
/// bounds differ in origin or extent.
pub fn compare_fast(a: &RgbaBuffer, b: &RgbaBuffer) -> OpsResult<ErrorScore> {
    let bounds = ensure_same_bounds(a.bounds(), b.bounds())?;
    trace!(bounds = %bounds, bytes = a.as_bytes().len(), "compare_fast");

    let total = bytes_total(a.as_bytes(), b.as_bytes());

    let result = score(total);
    debug!(total, score = result, "compare_fast done");
    Ok(result)
}

/// Sum of per-pixel 16-bit contributions over one row (absolute `y`).
pub(crate) fn precise_row_total<A, B>(a: &A, b: &B, y: i32, options: &CompareOptions) -> u64
where
    A: DecodedImage + ?Sized,
    B: DecodedImage + ?Sized,
{
    a.bounds()
        .columns()
        .map(|x| pixel_sq_diff16(a.rgba16(x, y), b.rgba16(x, y), options.include_alpha) as u64)
        .sum()
}

/// Sum of squared byte differences over two equally long slices.
#[inline]
pub(crate) fn bytes_total(a: &[u8], b: &[u8]) -> u64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| sq_diff8(x, y)).sum()
}
