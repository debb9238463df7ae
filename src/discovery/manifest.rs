//! Project manifest (pxgen.yaml) parsing.
//!
//! The manifest configures where assets live and overrides the built-in
//! tables used by the resize and icon tools. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::normalize::{DEFAULT_RESIZE_SIZE, RESIZE_FILES};
use crate::render::{DEFAULT_ICON_SKIP, ICON_SIZE};
use crate::types::Colour;

/// Project manifest loaded from pxgen.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Asset root, relative to the project root.
    pub assets: PathBuf,

    /// Write TexturePacker JSON next to sheets and the atlas.
    pub metadata: bool,

    /// Batch resize settings.
    pub resize: ResizeConfig,

    /// UI icon settings.
    pub icons: IconConfig,

    /// Patterns to exclude from opacity normalization.
    pub excludes: Vec<String>,
}

/// Settings for the batch resize tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Target edge length in pixels.
    pub size: u32,

    /// Files to resize, relative to the project root. Replaces the
    /// built-in list when set.
    pub files: Option<Vec<String>>,
}

/// Settings for the UI icon generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Edge length of generated icons.
    pub size: u32,

    /// Icon paths (relative to the asset root) that must not be generated.
    pub skip: Vec<String>,

    /// Additional icons.
    pub extra: Vec<ExtraIcon>,
}

/// A user-defined icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraIcon {
    pub path: String,
    /// Hex colour, e.g. `#E6C84D`.
    pub colour: String,
}

fn default_assets() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            metadata: false,
            resize: ResizeConfig::default(),
            icons: IconConfig::default(),
            excludes: vec![],
        }
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_RESIZE_SIZE,
            files: None,
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: ICON_SIZE,
            skip: DEFAULT_ICON_SKIP.iter().map(|s| s.to_string()).collect(),
            extra: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a pxgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| GenError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pxgen.yaml syntax".to_string()),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.resize.size == 0 || self.icons.size == 0 {
            return Err(GenError::Parse {
                message: "Sizes must be non-zero".to_string(),
                help: Some("Set resize.size and icons.size to at least 1".to_string()),
            });
        }
        Ok(())
    }

    /// Files for the resize tool, falling back to the built-in list.
    pub fn resize_files(&self) -> Vec<String> {
        match &self.resize.files {
            Some(files) => files.clone(),
            None => RESIZE_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether an icon path is on the skip list.
    pub fn skips_icon(&self, path: &str) -> bool {
        self.icons.skip.iter().any(|s| s == path)
    }

    /// Parse the colours of user-defined icons.
    pub fn extra_icons(&self) -> Result<Vec<(String, Colour)>> {
        self.icons
            .extra
            .iter()
            .map(|icon| {
                let colour = Colour::from_hex(&icon.colour).map_err(|_| GenError::Parse {
                    message: format!("Invalid colour '{}' for icon {}", icon.colour, icon.path),
                    help: Some("Use #RGB or #RRGGBB format".to_string()),
                })?;
                Ok((icon.path.clone(), colour))
            })
            .collect()
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        if let Some(dir) = rest.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.contains(rest);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}
