//! PNG output for generated canvases.

use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::types::Canvas;

/// Write a canvas to a PNG file, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    canvas.save(path)
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|e| GenError::Io {
        path: parent.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
