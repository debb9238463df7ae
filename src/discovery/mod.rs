//! Project discovery for pxgen.
//!
//! Locates the optional `pxgen.yaml` manifest in the project root and
//! scans asset directories for PNG files.

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{ExtraIcon, IconConfig, Manifest, ResizeConfig};
pub use scanner::{is_png, scan_pngs};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "pxgen.yaml";

/// A project root and its configuration.
#[derive(Debug, Clone)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no pxgen.yaml found).
    pub manifest: Manifest,

    /// Whether a pxgen.yaml manifest was found.
    pub has_manifest: bool,
}

impl Project {
    /// Open a project, reading `pxgen.yaml` from `root` when present.
    pub fn open(root: &Path) -> Result<Self> {
        let manifest_path = root.join(MANIFEST_FILENAME);
        let has_manifest = manifest_path.is_file();
        let manifest = if has_manifest {
            Manifest::load(&manifest_path)?
        } else {
            Manifest::default()
        };

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            has_manifest,
        })
    }

    /// Absolute-or-relative path of the asset root.
    pub fn asset_root(&self) -> PathBuf {
        self.root.join(&self.manifest.assets)
    }
}
