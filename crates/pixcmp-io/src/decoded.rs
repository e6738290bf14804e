//! Decoded images as produced by the registry.
//!
//! [`LoadedImage`] keeps whatever the decoder produced as cheaply as
//! possible and exposes it through [`DecodedImage`]:
//!
//! | Variant | Source | Access |
//! |---------|--------|--------|
//! | `Canonical` | 8-bit, every alpha 255 | bytes moved as-is |
//! | `Straight8` | 8-bit with transparency | premultiplied per pixel |
//! | `Straight16` | 16-bit and float | premultiplied per pixel |
//!
//! For fully opaque pixels straight and premultiplied alpha coincide, which
//! is what lets the first variant skip conversion entirely.

use image::{ColorType, DynamicImage, ImageBuffer, Rgba, RgbaImage};
use pixcmp_core::pixel::{expand_rgba8, premultiply_rgba16};
use pixcmp_core::{Bounds, DecodedImage, Rgba16, RgbaBuffer};
use tracing::trace;

use crate::IoResult;

/// 16-bit straight-alpha RGBA image from the `image` crate.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// A decoded image, origin (0, 0).
#[derive(Debug, Clone)]
pub enum LoadedImage {
    /// Fully opaque 8-bit image, already canonical.
    Canonical(RgbaBuffer),
    /// 8-bit image with straight (non-premultiplied) alpha.
    Straight8(RgbaImage),
    /// 16-bit image with straight alpha. Float sources are quantized here.
    Straight16(Rgba16Image),
}

impl LoadedImage {
    /// Wraps a decoder result, picking the cheapest faithful variant.
    ///
    /// # Errors
    ///
    /// [`IoError::InvalidImage`](crate::IoError::InvalidImage) if a dimension
    /// does not fit the `i32` coordinate space.
    pub fn from_dynamic(img: DynamicImage) -> IoResult<Self> {
        let bounds = Bounds::from_size(img.width(), img.height());
        if !bounds.is_addressable() {
            return Err(pixcmp_core::Error::invalid_dimensions(
                bounds.width,
                bounds.height,
                "decoded image exceeds the i32 coordinate space",
            )
            .into());
        }
        let color = img.color();
        let loaded = match color {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
                let rgba = img.into_rgba8();
                if is_opaque(&rgba) {
                    let bounds = Bounds::from_size(rgba.width(), rgba.height());
                    Self::Canonical(RgbaBuffer::from_raw(bounds, rgba.into_raw())?)
                } else {
                    Self::Straight8(rgba)
                }
            }
            _ => Self::Straight16(img.into_rgba16()),
        };
        trace!(?color, variant = loaded.variant_name(), "decoded image");
        Ok(loaded)
    }

    /// Short variant name for diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Canonical(_) => "canonical",
            Self::Straight8(_) => "straight8",
            Self::Straight16(_) => "straight16",
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bounds().width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bounds().height
    }
}

fn is_opaque(img: &RgbaImage) -> bool {
    img.as_raw().chunks_exact(4).all(|px| px[3] == u8::MAX)
}

impl DecodedImage for LoadedImage {
    fn bounds(&self) -> Bounds {
        match self {
            Self::Canonical(buf) => buf.bounds(),
            Self::Straight8(img) => Bounds::from_size(img.width(), img.height()),
            Self::Straight16(img) => Bounds::from_size(img.width(), img.height()),
        }
    }

    fn rgba16(&self, x: i32, y: i32) -> Rgba16 {
        match self {
            Self::Canonical(buf) => buf.rgba16(x, y),
            Self::Straight8(img) => {
                premultiply_rgba16(expand_rgba8(img.get_pixel(x as u32, y as u32).0))
            }
            Self::Straight16(img) => premultiply_rgba16(img.get_pixel(x as u32, y as u32).0),
        }
    }

    fn as_canonical(&self) -> Option<&RgbaBuffer> {
        match self {
            Self::Canonical(buf) => Some(buf),
            _ => None,
        }
    }
}
