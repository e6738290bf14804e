//! # pixcmp-io
//!
//! Image decoding for pixcmp.
//!
//! Turns files or byte slices into [`LoadedImage`] values that implement
//! [`DecodedImage`](pixcmp_core::DecodedImage), ready for the comparators in
//! `pixcmp-ops`. Decoding goes through the `image` crate; which formats are
//! available is decided by an explicit [`FormatRegistry`].
//!
//! - **PNG** - feature `png`
//! - **JPEG** - feature `jpeg`
//! - **GIF** - feature `gif` (first frame)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pixcmp_io::FormatRegistry;
//! use std::path::Path;
//!
//! let registry = FormatRegistry::with_builtin_formats();
//! let golden = registry.read(Path::new("golden.png"))?;
//! let actual = registry.read(Path::new("actual.png"))?;
//! # Ok::<(), pixcmp_io::IoError>(())
//! ```
//!
//! The free functions [`read`] and [`read_memory`] build a fresh built-in
//! registry per call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod decoded;
mod error;
pub mod registry;

pub use decoded::{LoadedImage, Rgba16Image};
pub use error::{IoError, IoResult};
pub use registry::{FormatInfo, FormatRegistry};

use std::path::Path;

/// Reads an image file with the built-in formats.
///
/// Format is detected from magic bytes, then from the extension.
///
/// # Example
///
/// ```rust,no_run
/// let img = pixcmp_io::read("render.png")?;
/// # Ok::<(), pixcmp_io::IoError>(())
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<LoadedImage> {
    FormatRegistry::with_builtin_formats().read(path.as_ref())
}

/// Decodes an in-memory image with the built-in formats.
pub fn read_memory(bytes: &[u8]) -> IoResult<LoadedImage> {
    FormatRegistry::with_builtin_formats().read_memory(bytes)
}
