//! Decoded images and pixel buffers.
//!
//! This module provides the image abstraction the comparators consume and
//! the two concrete buffers that implement it:
//!
//! - [`DecodedImage`] - Trait: bounds plus 16-bit premultiplied pixel access
//! - [`RgbaBuffer`] - Canonical 8-bit RGBA byte buffer
//! - [`Rgba64Buffer`] - 16-bit premultiplied RGBA buffer
//!
//! # Canonical Layout
//!
//! A canonical buffer stores pixels **row-major**, top-to-bottom, four bytes
//! per pixel, no row padding:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  ← Row 0
//!         [R G B A R G B A ...]  ← Row 1
//!         ...
//! ```
//!
//! so `data.len() == width * height * 4` always holds.
//!
//! # Coordinates
//!
//! Pixel accessors take **absolute** coordinates: a buffer whose bounds
//! start at (10, 20) has its first pixel at `pixel(10, 20)`.
//!
//! # Usage
//!
//! ```rust
//! use pixcmp_core::{Bounds, DecodedImage, RgbaBuffer};
//!
//! let mut img = RgbaBuffer::new(4, 4);
//! img.set_pixel(1, 2, [255, 0, 0, 255]);
//!
//! assert_eq!(img.pixel(1, 2), [255, 0, 0, 255]);
//! assert_eq!(img.rgba16(1, 2), [0xffff, 0, 0, 0xffff]);
//! assert!(img.as_canonical().is_some());
//! ```
//!
//! # Used By
//!
//! - `pixcmp-ops` - Normalization and comparison
//! - `pixcmp-io` - Decoded file contents

use crate::pixel::{expand_rgba8, Rgba16, Rgba8, CHANNELS};
use crate::{Bounds, Error, Result};

/// An already-decoded raster image.
///
/// This is the only view of an image the precise comparator needs. Decoders
/// implement it for whatever storage they produce.
///
/// # Contract
///
/// - [`bounds`](Self::bounds) is [addressable](Bounds::is_addressable):
///   every covered pixel has an `i32` coordinate.
/// - [`rgba16`](Self::rgba16) is only called with coordinates inside
///   [`bounds`](Self::bounds) and returns premultiplied channels in
///   [0, 65535].
/// - [`as_canonical`](Self::as_canonical) returns the underlying storage
///   when the image is already a canonical [`RgbaBuffer`], letting
///   normalization skip the copy.
pub trait DecodedImage {
    /// Rectangular extent of the image.
    fn bounds(&self) -> Bounds;

    /// Premultiplied 16-bit R, G, B, A at absolute coordinates (x, y).
    fn rgba16(&self, x: i32, y: i32) -> Rgba16;

    /// The canonical byte storage, if the image is stored that way.
    fn as_canonical(&self) -> Option<&RgbaBuffer> {
        None
    }
}

impl<T: DecodedImage + ?Sized> DecodedImage for &T {
    #[inline]
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> Rgba16 {
        (**self).rgba16(x, y)
    }

    #[inline]
    fn as_canonical(&self) -> Option<&RgbaBuffer> {
        (**self).as_canonical()
    }
}

impl<T: DecodedImage + ?Sized> DecodedImage for Box<T> {
    #[inline]
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> Rgba16 {
        (**self).rgba16(x, y)
    }

    #[inline]
    fn as_canonical(&self) -> Option<&RgbaBuffer> {
        (**self).as_canonical()
    }
}

/// Number of channel values needed for `bounds`.
///
/// Fails when the bounds reach past the `i32` coordinate space or the count
/// overflows `usize`.
fn element_count(bounds: Bounds) -> Result<usize> {
    if !bounds.is_addressable() {
        return Err(Error::invalid_dimensions(
            bounds.width,
            bounds.height,
            format!("bounds {} exceed the i32 coordinate space", bounds),
        ));
    }
    (bounds.width as usize)
        .checked_mul(bounds.height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            Error::invalid_dimensions(bounds.width, bounds.height, "element count overflows usize")
        })
}

/// Offset of the first channel of (x, y) within a row-major RGBA buffer.
#[inline]
fn pixel_offset(bounds: &Bounds, x: i32, y: i32) -> usize {
    debug_assert!(
        bounds.contains(x, y),
        "pixel ({}, {}) out of bounds {}",
        x,
        y,
        bounds
    );
    let dx = (x as i64 - bounds.x as i64) as usize;
    let dy = (y as i64 - bounds.y as i64) as usize;
    (dy * bounds.width as usize + dx) * CHANNELS
}

/// Canonical 8-bit RGBA buffer.
///
/// Premultiplied R, G, B, A bytes, row-major, no padding. This is the only
/// layout the fast comparator accepts.
///
/// # Invariant
///
/// `as_bytes().len() == width * height * 4`. Every constructor enforces it.
///
/// # Example
///
/// ```rust
/// use pixcmp_core::{Bounds, RgbaBuffer};
///
/// let img = RgbaBuffer::filled(Bounds::new(-1, -1, 2, 2), [0, 0, 0, 255]);
/// assert_eq!(img.as_bytes().len(), 16);
/// assert_eq!(img.pixel(-1, -1), [0, 0, 0, 255]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RgbaBuffer {
    /// Pixel bytes, `width * height * 4` of them
    data: Vec<u8>,
    /// Extent and origin
    bounds: Bounds,
}

impl RgbaBuffer {
    /// Creates a zero-filled (transparent black) buffer at origin (0, 0).
    ///
    /// # Panics
    ///
    /// Panics if a dimension exceeds `i32::MAX + 1` or `width * height * 4`
    /// overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_bounds(Bounds::from_size(width, height))
    }

    /// Creates a zero-filled buffer covering `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is not [addressable](Bounds::is_addressable) or
    /// the byte count overflows `usize`.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self::filled(bounds, [0; CHANNELS])
    }

    /// Creates a buffer covering `bounds` with every pixel set to `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is not [addressable](Bounds::is_addressable) or
    /// the byte count overflows `usize`.
    pub fn filled(bounds: Bounds, pixel: Rgba8) -> Self {
        if let Err(e) = element_count(bounds) {
            panic!("{}", e);
        }
        let pixels = bounds.width as usize * bounds.height as usize;
        Self {
            data: pixel.repeat(pixels),
            bounds,
        }
    }

    /// Wraps existing canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`, or if `bounds` reach past the `i32` coordinate
    /// space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixcmp_core::{Bounds, RgbaBuffer};
    ///
    /// let img = RgbaBuffer::from_raw(Bounds::from_size(1, 2), vec![9; 8]).unwrap();
    /// assert_eq!(img.pixel(0, 1), [9, 9, 9, 9]);
    /// assert!(RgbaBuffer::from_raw(Bounds::from_size(1, 2), vec![9; 7]).is_err());
    /// ```
    pub fn from_raw(bounds: Bounds, data: Vec<u8>) -> Result<Self> {
        let expected = element_count(bounds)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds.width,
                bounds.height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, bounds })
    }

    /// Returns the bounds of the buffer.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height
    }

    /// Returns the number of bytes in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.bounds.width as usize * CHANNELS
    }

    /// Returns the raw canonical bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at absolute coordinates (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let i = pixel_offset(&self.bounds, x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Returns the pixel at (x, y), or `None` if outside the bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.bounds.contains(x, y).then(|| self.pixel(x, y))
    }

    /// Sets the pixel at absolute coordinates (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Rgba8) {
        let i = pixel_offset(&self.bounds, x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }

    /// Returns the bytes of row `y` (absolute coordinate).
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the bounds.
    #[inline]
    pub fn row(&self, y: i32) -> &[u8] {
        let start = pixel_offset(&self.bounds, self.bounds.x, y);
        &self.data[start..start + self.row_len()]
    }
}

impl DecodedImage for RgbaBuffer {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> Rgba16 {
        expand_rgba8(self.pixel(x, y))
    }

    #[inline]
    fn as_canonical(&self) -> Option<&RgbaBuffer> {
        Some(self)
    }
}

impl std::fmt::Debug for RgbaBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaBuffer")
            .field("bounds", &self.bounds)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// 16-bit premultiplied RGBA buffer.
///
/// Holds pixels at full 16-bit precision. It is a [`DecodedImage`] but not a
/// canonical one, so normalizing it produces a new [`RgbaBuffer`] with each
/// channel narrowed to its high byte.
///
/// # Example
///
/// ```rust
/// use pixcmp_core::{Bounds, DecodedImage, Rgba64Buffer};
///
/// let img = Rgba64Buffer::filled(Bounds::from_size(2, 2), [0, 0, 0, 65535]);
/// assert_eq!(img.rgba16(1, 1), [0, 0, 0, 65535]);
/// assert!(img.as_canonical().is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rgba64Buffer {
    /// Channel values, `width * height * 4` of them
    data: Vec<u16>,
    /// Extent and origin
    bounds: Bounds,
}

impl Rgba64Buffer {
    /// Creates a zero-filled buffer at origin (0, 0).
    ///
    /// # Panics
    ///
    /// Panics if a dimension exceeds `i32::MAX + 1` or `width * height * 4`
    /// overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(Bounds::from_size(width, height), [0; CHANNELS])
    }

    /// Creates a buffer covering `bounds` with every pixel set to `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is not [addressable](Bounds::is_addressable) or
    /// the element count overflows `usize`.
    pub fn filled(bounds: Bounds, pixel: Rgba16) -> Self {
        if let Err(e) = element_count(bounds) {
            panic!("{}", e);
        }
        let pixels = bounds.width as usize * bounds.height as usize;
        Self {
            data: pixel.repeat(pixels),
            bounds,
        }
    }

    /// Wraps existing premultiplied 16-bit channel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`, or if `bounds` reach past the `i32` coordinate
    /// space.
    pub fn from_raw(bounds: Bounds, data: Vec<u16>) -> Result<Self> {
        let expected = element_count(bounds)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds.width,
                bounds.height,
                format!("expected {} channel values, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, bounds })
    }

    /// Returns the raw channel values.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.data
    }

    /// Returns the pixel at absolute coordinates (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        let i = pixel_offset(&self.bounds, x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Sets the pixel at absolute coordinates (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Rgba16) {
        let i = pixel_offset(&self.bounds, x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }
}

impl DecodedImage for Rgba64Buffer {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> Rgba16 {
        self.pixel(x, y)
    }
}

impl std::fmt::Debug for Rgba64Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rgba64Buffer")
            .field("bounds", &self.bounds)
            .field("values", &self.data.len())
            .finish()
    }
}
