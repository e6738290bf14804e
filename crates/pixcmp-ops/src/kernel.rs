//! Squared-difference kernel shared by both comparators.
//!
//! Two instantiations, one per input bit width:
//!
//! | Kernel | Inputs | Output | Formula |
//! |--------|--------|--------|---------|
//! | [`sq_diff16`] | `u16` channels | `u32` | `(abs(x - y)^2) >> 2` |
//! | [`sq_diff8`] | `u8` bytes | `u64` | `(x - y)^2`, widened first |
//!
//! # Overflow
//!
//! `65535^2 = 4_294_836_225` still fits a `u32`; the `>> 2` leaves room to
//! add four such terms (one pixel) without leaving `u32`. The 8-bit form
//! widens both operands to `i64` before subtracting, so a negative delta
//! never wraps.
//!
//! Both kernels are commutative. [`sq_diff8`] returns 0 exactly when the
//! inputs are equal. [`sq_diff16`] also truncates deltas of 1 to 0 because
//! of the shift; channels expanded from bytes always differ by multiples of
//! 257, so for them it too is zero only on equal inputs.

/// Score type: a non-negative error magnitude.
pub type ErrorScore = u64;

/// Squared difference of two 16-bit channel values, scaled down by 4.
///
/// The shift keeps the sum of four terms inside `u32`. It changes the
/// absolute scale of scores, not their ordering, and is part of the
/// score definition.
///
/// # Example
///
/// ```rust
/// use pixcmp_ops::kernel::sq_diff16;
///
/// assert_eq!(sq_diff16(0, 0xffff), 1_073_709_056);
/// assert_eq!(sq_diff16(10, 12), 1);
/// ```
#[inline]
pub const fn sq_diff16(x: u16, y: u16) -> u32 {
    let d = x.abs_diff(y) as u32;
    (d * d) >> 2
}

/// Squared difference of two bytes.
///
/// # Example
///
/// ```rust
/// use pixcmp_ops::kernel::sq_diff8;
///
/// assert_eq!(sq_diff8(0, 255), 65_025);
/// assert_eq!(sq_diff8(255, 0), 65_025);
/// ```
#[inline]
pub const fn sq_diff8(x: u8, y: u8) -> u64 {
    let d = x as i64 - y as i64;
    (d * d) as u64
}

/// Per-pixel 16-bit contribution: the sum of four (or three) channel terms.
#[inline]
pub fn pixel_sq_diff16(a: [u16; 4], b: [u16; 4], include_alpha: bool) -> u32 {
    let rgb = sq_diff16(a[0], b[0]) + sq_diff16(a[1], b[1]) + sq_diff16(a[2], b[2]);
    if include_alpha {
        rgb + sq_diff16(a[3], b[3])
    } else {
        rgb
    }
}

/// Converts an accumulated sum of squares into a score (floored square root).
#[inline]
pub fn score(total: u64) -> ErrorScore {
    total.isqrt()
}
