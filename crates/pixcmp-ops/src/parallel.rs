//! Parallel comparators using Rayon.
//!
//! Same scores as the sequential functions in [`compare`](crate::compare),
//! computed by splitting the image into rows. Each row produces its own
//! `u64` partial sum; partials are added before the square root, so the
//! result is bit-identical to the sequential path.
//!
//! Enabled by the `parallel` feature (on by default).
//!
//! # Example
//!
//! ```rust
//! use pixcmp_core::{Bounds, RgbaBuffer};
//! use pixcmp_ops::parallel::compare_fast_par;
//!
//! let a = RgbaBuffer::filled(Bounds::from_size(256, 256), [10, 20, 30, 255]);
//! let b = RgbaBuffer::filled(Bounds::from_size(256, 256), [10, 20, 30, 255]);
//! assert_eq!(compare_fast_par(&a, &b).unwrap(), 0);
//! ```

use crate::compare::{bytes_total, precise_row_total, CompareOptions};
use crate::guard::{ensure_comparable, ensure_same_bounds};
use crate::kernel::{score, ErrorScore};
use crate::OpsResult;
use pixcmp_core::{DecodedImage, RgbaBuffer};
use rayon::prelude::*;
use tracing::debug;

/// Parallel [`compare_precise`](crate::compare_precise).
///
/// # Errors
///
/// [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch) if the
/// bounds differ.
pub fn compare_precise_par<A, B>(a: &A, b: &B) -> OpsResult<ErrorScore>
where
    A: DecodedImage + Sync + ?Sized,
    B: DecodedImage + Sync + ?Sized,
{
    compare_precise_par_with(a, b, &CompareOptions::default())
}

/// Parallel [`compare_precise_with`](crate::compare_precise_with).
///
/// # Errors
///
/// [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch) if the
/// bounds differ.
pub fn compare_precise_par_with<A, B>(
    a: &A,
    b: &B,
    options: &CompareOptions,
) -> OpsResult<ErrorScore>
where
    A: DecodedImage + Sync + ?Sized,
    B: DecodedImage + Sync + ?Sized,
{
    let bounds = ensure_comparable(a, b)?;
    let origin_y = bounds.y as i64;

    // Addressable bounds keep every row inside i32.
    let total: u64 = (0..bounds.height)
        .into_par_iter()
        .map(|dy| precise_row_total(a, b, (origin_y + dy as i64) as i32, options))
        .sum();

    let result = score(total);
    debug!(bounds = %bounds, total, score = result, "compare_precise_par done");
    Ok(result)
}

/// Parallel [`compare_fast`](crate::compare_fast).
///
/// # Errors
///
/// [`OpsError::BoundsMismatch`](crate::OpsError::BoundsMismatch) if the
/// bounds differ.
pub fn compare_fast_par(a: &RgbaBuffer, b: &RgbaBuffer) -> OpsResult<ErrorScore> {
    let bounds = ensure_same_bounds(a.bounds(), b.bounds())?;

    // par_chunks panics on a zero chunk size
    let row_len = a.row_len();
    let total: u64 = if row_len == 0 {
        0
    } else {
        a.as_bytes()
            .par_chunks(row_len)
            .zip(b.as_bytes().par_chunks(row_len))
            .map(|(ra, rb)| bytes_total(ra, rb))
            .sum()
    };

    let result = score(total);
    debug!(bounds = %bounds, total, score = result, "compare_fast_par done");
    Ok(result)
}
