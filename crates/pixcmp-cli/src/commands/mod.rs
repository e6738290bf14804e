//! CLI command implementations

pub mod diff;
pub mod formats;

use anyhow::{Context, Result};
use pixcmp_io::{FormatRegistry, LoadedImage};
use std::path::Path;

/// Load image from path
pub fn load_image(registry: &FormatRegistry, path: &Path) -> Result<LoadedImage> {
    registry
        .read(path)
        .with_context(|| format!("Failed to load: {}", path.display()))
}
