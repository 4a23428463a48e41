use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const OUTPUT_FILE_NAME: &str = "isometric-contributions.svg";

/// Writes the document, replacing any previous file.
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))
}
