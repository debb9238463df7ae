//! Forced opacity for every visible pixel.

use std::path::{Path, PathBuf};

use image::{ColorType, RgbaImage};

use crate::discovery::{scan_pngs, Manifest};
use crate::error::{GenError, Result};
use crate::types::Canvas;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpacityOutcome {
    /// Processed; `changed` pixels had their alpha raised to 255.
    Normalized { changed: usize },
    /// Could not be read or written.
    Skipped(String),
}

/// Per-file outcomes of an opacity pass, in scan order.
#[derive(Debug, Default)]
pub struct OpacityReport {
    pub entries: Vec<(PathBuf, OpacityOutcome)>,
}

impl OpacityReport {
    pub fn processed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, OpacityOutcome::Normalized { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.len() - self.processed()
    }

    /// Total pixels changed across all files.
    pub fn changed_pixels(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, o)| match o {
                OpacityOutcome::Normalized { changed } => *changed,
                OpacityOutcome::Skipped(_) => 0,
            })
            .sum()
    }
}

/// Set alpha to 255 on every pixel with non-zero alpha.
///
/// Fully transparent pixels are left alone. Returns the number of pixels
/// changed.
pub fn force_opaque(image: &mut RgbaImage) -> usize {
    let mut changed = 0;
    for px in image.pixels_mut() {
        if px[3] > 0 && px[3] < 255 {
            px[3] = 255;
            changed += 1;
        }
    }
    changed
}

/// Normalize one file in place. The file is rewritten only when pixels
/// changed or it was not already stored as 8-bit RGBA.
pub fn normalize_file(path: &Path) -> Result<usize> {
    let decoded = image::open(path).map_err(|e| GenError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    let was_rgba8 = decoded.color() == ColorType::Rgba8;

    let mut rgba = decoded.into_rgba8();
    let changed = force_opaque(&mut rgba);
    if changed > 0 || !was_rgba8 {
        Canvas::from_image(rgba).save(path)?;
    }
    Ok(changed)
}

/// Normalize every PNG under `dir`. Unreadable files are reported and skipped.
pub fn normalize_opacity(dir: &Path, manifest: &Manifest) -> OpacityReport {
    let entries = scan_pngs(dir, manifest)
        .into_iter()
        .map(|path| {
            let outcome = match normalize_file(&path) {
                Ok(changed) => OpacityOutcome::Normalized { changed },
                Err(e) => OpacityOutcome::Skipped(e.to_string()),
            };
            (path, outcome)
        })
        .collect();

    OpacityReport { entries }
}
