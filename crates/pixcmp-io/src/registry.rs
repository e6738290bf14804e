//! Format registry for format detection and decoding.
//!
//! The registry provides:
//! - Registration of decodable formats
//! - Detection by magic bytes, with extension as fallback
//! - Lookup by name or extension
//!
//! # Architecture
//!
//! A registry is a plain value. [`FormatRegistry::new`] starts empty and
//! [`FormatRegistry::with_builtin_formats`] adds the formats enabled by
//! cargo features (`png`, `jpeg`, `gif`). Nothing is registered
//! process-wide; whoever decodes passes the registry they built.
//!
//! # Example
//!
//! ```no_run
//! use pixcmp_io::registry::FormatRegistry;
//! use std::path::Path;
//!
//! let registry = FormatRegistry::with_builtin_formats();
//!
//! for name in registry.format_names() {
//!     println!("Format: {}", name);
//! }
//!
//! let img = registry.read(Path::new("golden.png"))?;
//! # Ok::<(), pixcmp_io::IoError>(())
//! ```

use crate::{IoError, IoResult, LoadedImage};
use image::ImageFormat;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// Bytes inspected for magic-number detection.
const HEADER_LEN: usize = 16;

/// Format information entry in the registry.
#[derive(Debug, Clone)]
pub struct FormatInfo {
    /// Human-readable format name (e.g., "PNG").
    pub name: &'static str,
    /// File extensions without dots (e.g., ["jpg", "jpeg"]).
    pub extensions: &'static [&'static str],
    /// Function to check if header bytes match this format.
    pub can_read: fn(&[u8]) -> bool,
    /// Decoder used by the `image` crate.
    pub format: ImageFormat,
}

/// Registry of decodable image formats.
///
/// Detection walks formats in registration order. Registering a name that
/// already exists replaces the earlier entry in place.
///
/// # Example
///
/// ```rust
/// use pixcmp_io::registry::{FormatInfo, FormatRegistry};
/// use image::ImageFormat;
///
/// let mut registry = FormatRegistry::new();
/// assert!(!registry.supports_extension("bmp"));
///
/// registry.register(FormatInfo {
///     name: "BMP",
///     extensions: &["bmp"],
///     can_read: |h| h.starts_with(b"BM"),
///     format: ImageFormat::Bmp,
/// });
/// assert!(registry.supports_extension("BMP"));
/// assert_eq!(registry.detect_format(b"BM\0\0"), Some("BMP"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: Vec<FormatInfo>,
    by_extension: HashMap<&'static str, &'static str>,
}

impl FormatRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in formats enabled by features.
    pub fn with_builtin_formats() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_formats();
        registry
    }

    fn register_builtin_formats(&mut self) {
        #[cfg(feature = "png")]
        self.register(FormatInfo {
            name: "PNG",
            extensions: &["png"],
            can_read: |h| h.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            format: ImageFormat::Png,
        });

        #[cfg(feature = "jpeg")]
        self.register(FormatInfo {
            name: "JPEG",
            extensions: &["jpg", "jpeg"],
            can_read: |h| h.starts_with(&[0xFF, 0xD8, 0xFF]),
            format: ImageFormat::Jpeg,
        });

        #[cfg(feature = "gif")]
        self.register(FormatInfo {
            name: "GIF",
            extensions: &["gif"],
            can_read: |h| h.starts_with(b"GIF87a") || h.starts_with(b"GIF89a"),
            format: ImageFormat::Gif,
        });
    }

    /// Registers a format in the registry.
    pub fn register(&mut self, info: FormatInfo) {
        let name = info.name;
        self.by_extension.retain(|_, owner| *owner != name);
        for &ext in info.extensions {
            self.by_extension.insert(ext, name);
        }
        match self.formats.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = info,
            None => self.formats.push(info),
        }
    }

    /// Returns an iterator over registered format names, in registration order.
    pub fn format_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|f| f.name)
    }

    /// Returns an iterator over all registered formats.
    pub fn formats(&self) -> impl Iterator<Item = &FormatInfo> {
        self.formats.iter()
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Returns format info by name.
    pub fn get(&self, name: &str) -> Option<&FormatInfo> {
        self.formats.iter().find(|f| f.name == name)
    }

    /// Returns format info by file extension (case-insensitive).
    pub fn get_by_extension(&self, ext: &str) -> Option<&FormatInfo> {
        let ext_lower = ext.to_lowercase();
        self.by_extension
            .get(ext_lower.as_str())
            .and_then(|name| self.get(name))
    }

    /// Checks if an extension is supported.
    pub fn supports_extension(&self, ext: &str) -> bool {
        self.by_extension.contains_key(ext.to_lowercase().as_str())
    }

    /// Detects format from file header bytes.
    ///
    /// Returns the format name if detected, None otherwise.
    pub fn detect_format(&self, header: &[u8]) -> Option<&'static str> {
        self.detect(header).map(|f| f.name)
    }

    fn detect(&self, bytes: &[u8]) -> Option<&FormatInfo> {
        let header = &bytes[..bytes.len().min(HEADER_LEN)];
        self.formats.iter().find(|f| (f.can_read)(header))
    }

    /// Reads an image from a file.
    ///
    /// First tries to detect format by magic bytes, falls back to extension.
    pub fn read(&self, path: &Path) -> IoResult<LoadedImage> {
        trace!(path = %path.display(), "reading image");
        let bytes = std::fs::read(path)?;

        let ext = path.extension().and_then(|e| e.to_str());
        let info = self
            .detect(&bytes)
            .or_else(|| ext.and_then(|e| self.get_by_extension(e)))
            .ok_or_else(|| IoError::UnsupportedFormat(ext.unwrap_or("unknown").to_string()))?;

        let img = decode(info, &bytes)?;
        debug!(
            path = %path.display(),
            format = info.name,
            width = img.width(),
            height = img.height(),
            variant = img.variant_name(),
            "image loaded"
        );
        Ok(img)
    }

    /// Reads an image from memory, detected by magic bytes only.
    pub fn read_memory(&self, bytes: &[u8]) -> IoResult<LoadedImage> {
        let info = self
            .detect(bytes)
            .ok_or_else(|| IoError::UnsupportedFormat("unrecognised header".to_string()))?;
        decode(info, bytes)
    }
}

fn decode(info: &FormatInfo, bytes: &[u8]) -> IoResult<LoadedImage> {
    let img = image::load_from_memory_with_format(bytes, info.format)
        .map_err(|e| IoError::DecodeError(format!("{}: {}", info.name, e)))?;
    LoadedImage::from_dynamic(img)
}
