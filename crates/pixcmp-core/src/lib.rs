//! # pixcmp-core
//!
//! Core types for scoring the difference between two raster images.
//!
//! This crate provides the foundational types used throughout pixcmp:
//!
//! - [`Bounds`] - Image extent (origin + width/height); equality decides comparability
//! - [`DecodedImage`] - Trait for any decoded image: bounds + 16-bit premultiplied pixels
//! - [`RgbaBuffer`] - Canonical R,G,B,A 8-bit byte buffer (the fast-path layout)
//! - [`Rgba64Buffer`] - 16-bit premultiplied buffer
//! - [`pixel`] - 8/16-bit channel conversions
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other pixcmp crates build
//! on it:
//!
//! ```text
//! pixcmp-core (this crate)
//!    ^
//!    |
//!    +-- pixcmp-ops (normalize, compare_precise, compare_fast)
//!    +-- pixcmp-io  (decoding via a FormatRegistry)
//!    +-- pixcmp-cli (the `pixcmp` binary)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pixcmp_core::prelude::*;
//!
//! let black = RgbaBuffer::filled(Bounds::from_size(2, 2), [0, 0, 0, 255]);
//! assert_eq!(black.rgba16(0, 0), [0, 0, 0, 0xffff]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bounds;
pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use bounds::Bounds;
pub use error::{Error, Result};
pub use image::{DecodedImage, Rgba64Buffer, RgbaBuffer};
pub use pixel::{Rgba16, Rgba8};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixcmp_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::error::{Error, Result};
    pub use crate::image::{DecodedImage, Rgba64Buffer, RgbaBuffer};
    pub use crate::pixel::{Rgba16, Rgba8};
}
