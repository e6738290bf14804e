//! Conversion of any decoded image into a canonical [`RgbaBuffer`].
//!
//! The fast comparator only understands canonical bytes. [`normalize`]
//! bridges the gap:
//!
//! - Already canonical: the same storage is returned borrowed, no copy
//! - Anything else: a new buffer at origin (0, 0) is filled by visiting every
//!   coordinate and writing the high byte of each 16-bit channel
//!
//! The conversion is a plain "source replaces destination" copy. No alpha
//! blending happens; premultiplied values are carried over as they are.
//!
//! # Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use pixcmp_core::{Bounds, Rgba64Buffer, RgbaBuffer};
//! use pixcmp_ops::normalize;
//!
//! let canonical = RgbaBuffer::new(4, 4);
//! assert!(matches!(normalize(&canonical), Cow::Borrowed(_)));
//!
//! let deep = Rgba64Buffer::filled(Bounds::new(7, 7, 2, 2), [0xffff, 0x80ff, 0, 0xffff]);
//! let converted = normalize(&deep);
//! assert_eq!(converted.bounds(), Bounds::from_size(2, 2));
//! assert_eq!(converted.pixel(0, 0), [0xff, 0x80, 0, 0xff]);
//! ```

use pixcmp_core::pixel::narrow_rgba16;
use pixcmp_core::{Bounds, DecodedImage, RgbaBuffer};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Returns a canonical view of `img`.
///
/// Borrows when `img` is already stored canonically, otherwise allocates.
/// A newly allocated buffer has bounds `(0, 0, width, height)`; a borrowed
/// one keeps whatever bounds the source has. Never fails.
pub fn normalize<I>(img: &I) -> Cow<'_, RgbaBuffer>
where
    I: DecodedImage + ?Sized,
{
    if let Some(canonical) = img.as_canonical() {
        trace!(bounds = %canonical.bounds(), "normalize: already canonical");
        return Cow::Borrowed(canonical);
    }
    Cow::Owned(convert(img))
}

/// Like [`normalize`], but always returns an owned buffer.
///
/// The no-op path clones the canonical storage.
pub fn normalize_owned<I>(img: &I) -> RgbaBuffer
where
    I: DecodedImage + ?Sized,
{
    normalize(img).into_owned()
}

fn convert<I>(img: &I) -> RgbaBuffer
where
    I: DecodedImage + ?Sized,
{
    let src = img.bounds();
    debug!(bounds = %src, "normalize: converting to canonical RGBA");

    let mut dst = RgbaBuffer::with_bounds(Bounds::from_size(src.width, src.height));
    for (dy, y) in src.rows().enumerate() {
        for (dx, x) in src.columns().enumerate() {
            dst.set_pixel(dx as i32, dy as i32, narrow_rgba16(img.rgba16(x, y)));
        }
    }
    dst
}
