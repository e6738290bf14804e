//! Channel value conversions between 8-bit and 16-bit RGBA.
//!
//! The comparators look at pixels in two bit depths:
//!
//! - **16-bit** ([`Rgba16`]) - the device-independent range [0, 65535] every
//!   [`DecodedImage`](crate::DecodedImage) reports, always premultiplied
//! - **8-bit** ([`Rgba8`]) - the byte layout of a canonical
//!   [`RgbaBuffer`](crate::RgbaBuffer), also premultiplied
//!
//! # Conversions
//!
//! ```text
//! 8 -> 16:  v * 0x101      (0xAB -> 0xABAB, exact)
//! 16 -> 8:  v >> 8         (truncating)
//! ```
//!
//! `narrow_u16(expand_u8(v)) == v` for every byte, which is what makes
//! normalizing a canonical buffer a no-op.
//!
//! # Straight Alpha
//!
//! Decoders that produce straight (non-premultiplied) alpha convert on
//! access with [`premultiply_rgba16`]:
//!
//! ```rust
//! use pixcmp_core::pixel::{expand_rgba8, premultiply_rgba16};
//!
//! // 50% transparent white
//! let px = premultiply_rgba16(expand_rgba8([255, 255, 255, 128]));
//! assert_eq!(px, [0x8080, 0x8080, 0x8080, 0x8080]);
//! ```

/// Number of channels in every pixel handled by pixcmp (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Largest 16-bit channel value.
pub const MAX_U16: u16 = 0xffff;

/// A premultiplied pixel with 16-bit channels, in R, G, B, A order.
pub type Rgba16 = [u16; CHANNELS];

/// A pixel with 8-bit channels, in R, G, B, A order.
pub type Rgba8 = [u8; CHANNELS];

/// Expands an 8-bit channel to 16 bits by replicating the byte.
#[inline]
pub const fn expand_u8(v: u8) -> u16 {
    v as u16 * 0x101
}

/// Narrows a 16-bit channel to 8 bits by dropping the low byte.
#[inline]
pub const fn narrow_u16(v: u16) -> u8 {
    (v >> 8) as u8
}

/// Scales a straight 16-bit channel by a 16-bit alpha.
#[inline]
pub const fn premultiply_u16(c: u16, a: u16) -> u16 {
    (c as u32 * a as u32 / MAX_U16 as u32) as u16
}

/// Expands every channel of an 8-bit pixel.
#[inline]
pub fn expand_rgba8(px: Rgba8) -> Rgba16 {
    px.map(expand_u8)
}

/// Narrows every channel of a 16-bit pixel.
#[inline]
pub fn narrow_rgba16(px: Rgba16) -> Rgba8 {
    px.map(narrow_u16)
}

/// Converts a straight-alpha 16-bit pixel to premultiplied form.
///
/// Alpha itself is left untouched; fully opaque pixels are unchanged.
#[inline]
pub fn premultiply_rgba16(px: Rgba16) -> Rgba16 {
    let [r, g, b, a] = px;
    [
        premultiply_u16(r, a),
        premultiply_u16(g, a),
        premultiply_u16(b, a),
        a,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_narrow_roundtrip_all_bytes() {
        for v in 0..=u8::MAX {
            assert_eq!(narrow_u16(expand_u8(v)), v);
        }
        assert_eq!(expand_u8(0), 0);
        assert_eq!(expand_u8(255), MAX_U16);
        assert_eq!(expand_u8(0x12), 0x1212);
    }

    #[test]
    fn test_narrow_truncates() {
        assert_eq!(narrow_u16(0x12ff), 0x12);
        assert_eq!(narrow_u16(0x00ff), 0);
    }

    #[test]
    fn test_premultiply_opaque_is_identity() {
        let px = [1234, 40000, 65535, MAX_U16];
        assert_eq!(premultiply_rgba16(px), px);
    }

    #[test]
    fn test_premultiply_transparent_clears_color() {
        assert_eq!(premultiply_rgba16([65535, 100, 7, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_premultiply_half_alpha() {
        let px = premultiply_rgba16(expand_rgba8([255, 0, 255, 128]));
        assert_eq!(px, [0x8080, 0, 0x8080, 0x8080]);
    }
}
