//! File system scanner for PNG assets.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Recursively collect `*.png` files under `root`, sorted by path.
///
/// Unreadable directory entries are ignored, as are paths matching the
/// manifest's exclude patterns.
pub fn scan_pngs(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_png(p))
        .filter(|p| !manifest.is_excluded(p.strip_prefix(root).unwrap_or(p)))
        .collect();

    files.sort();
    files
}

/// Check for a `.png` extension (case-insensitive).
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
