//! List decodable formats

use anyhow::Result;
use pixcmp_io::FormatRegistry;

pub fn run() -> Result<()> {
    let registry = FormatRegistry::with_builtin_formats();
    for info in registry.formats() {
        println!("{:<6} {}", info.name, info.extensions.join(", "));
    }
    Ok(())
}
