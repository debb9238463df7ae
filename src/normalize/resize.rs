//! Batch resize of icon files to a fixed square size.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};

use crate::error::Result;
use crate::types::Canvas;

/// Default target edge length.
pub const DEFAULT_RESIZE_SIZE: u32 = 96;

/// Files resized by default, relative to the project root.
pub const RESIZE_FILES: [&str; 25] = [
    "assets/weapons/blade_short.png",
    "assets/weapons/dagger.png",
    "assets/weapons/spear.png",
    "assets/weapons/chainsaw.png",
    "assets/weapons/hammer_heavy.png",
    "assets/weapons/pistol_basic.png",
    "assets/weapons/shotgun_wide.png",
    "assets/weapons/rifle_long.png",
    "assets/weapons/wand_focus.png",
    "assets/weapons/sniper.png",
    "assets/weapons/orb_wand.png",
    "assets/ui/upgrade_icons/icon_hp.png",
    "assets/ui/upgrade_icons/icon_mana.png",
    "assets/ui/upgrade_icons/icon_armor.png",
    "assets/ui/upgrade_icons/icon_speed.png",
    "assets/ui/upgrade_icons/icon_melee.png",
    "assets/ui/upgrade_icons/icon_ranged.png",
    "assets/ui/upgrade_icons/icon_regen.png",
    "assets/ui/upgrade_icons/icon_lifesteal.png",
    "assets/ui/upgrade_icons/icon_mana_regen.png",
    "assets/magic/icon_fire.png",
    "assets/magic/icon_ice.png",
    "assets/magic/icon_lightning.png",
    "assets/magic/icon_poison.png",
    "assets/magic/icon_physical.png",
];

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Resized from the given dimensions.
    Resized { from: (u32, u32) },
    /// Already at the target size.
    AlreadySized,
    /// No such file.
    Missing,
    /// Could not be decoded or written.
    Failed(String),
}

impl ResizeOutcome {
    pub fn is_resized(&self) -> bool {
        matches!(self, ResizeOutcome::Resized { .. })
    }
}

/// Per-file outcomes of a resize batch, in input order.
#[derive(Debug, Default)]
pub struct ResizeReport {
    pub entries: Vec<(String, ResizeOutcome)>,
}

impl ResizeReport {
    pub fn resized(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_resized()).count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.len() - self.resized()
    }
}

/// Resize every listed file (relative to `root`) to `size` x `size`.
pub fn resize_files(root: &Path, files: &[String], size: u32) -> ResizeReport {
    let entries = files
        .iter()
        .map(|rel| {
            let path: PathBuf = root.join(rel);
            let outcome = match resize_file(&path, size) {
                Ok(outcome) => outcome,
                Err(e) => ResizeOutcome::Failed(e.to_string()),
            };
            (rel.clone(), outcome)
        })
        .collect();

    ResizeReport { entries }
}

/// Resize a single file in place with a Lanczos filter.
pub fn resize_file(path: &Path, size: u32) -> Result<ResizeOutcome> {
    if !path.is_file() {
        return Ok(ResizeOutcome::Missing);
    }

    let canvas = Canvas::open(path)?;
    let from = canvas.size();
    if from == (size, size) {
        return Ok(ResizeOutcome::AlreadySized);
    }

    let resized = imageops::resize(canvas.as_image(), size, size, FilterType::Lanczos3);
    Canvas::from_image(resized).save(path)?;
    Ok(ResizeOutcome::Resized { from })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, w: u32, h: u32) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        Canvas::filled(w, h, Colour::rgb(230, 64, 64)).save(&path).unwrap();
    }

    #[test]
    fn test_resize_batch_outcomes() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "assets/weapons/dagger.png", 64, 64);
        write(root, "assets/weapons/spear.png", 96, 96);
        fs::create_dir_all(root.join("assets/magic")).unwrap();
        fs::write(root.join("assets/magic/icon_ice.png"), b"not a png").unwrap();

        let files: Vec<String> = [
            "assets/weapons/dagger.png",
            "assets/weapons/spear.png",
            "assets/weapons/sniper.png",
            "assets/magic/icon_ice.png",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let report = resize_files(root, &files, 96);
        assert_eq!(report.entries[0].1, ResizeOutcome::Resized { from: (64, 64) });
        assert_eq!(report.entries[1].1, ResizeOutcome::AlreadySized);
        assert_eq!(report.entries[2].1, ResizeOutcome::Missing);
        assert!(matches!(report.entries[3].1, ResizeOutcome::Failed(_)));
        assert_eq!(report.resized(), 1);
        assert_eq!(report.skipped(), 3);

        let out = Canvas::open(&root.join("assets/weapons/dagger.png")).unwrap();
        assert_eq!(out.size(), (96, 96));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "assets/weapons/orb_wand.png", 32, 48);
        let files = vec!["assets/weapons/orb_wand.png".to_string()];

        let first = resize_files(root, &files, 96);
        assert_eq!(first.resized(), 1);
        let bytes = fs::read(root.join("assets/weapons/orb_wand.png")).unwrap();

        let second = resize_files(root, &files, 96);
        assert_eq!(second.resized(), 0);
        assert_eq!(second.entries[0].1, ResizeOutcome::AlreadySized);
        assert_eq!(fs::read(root.join("assets/weapons/orb_wand.png")).unwrap(), bytes);
    }

    #[test]
    fn test_default_list_covers_weapons_and_icons() {
        assert_eq!(RESIZE_FILES.iter().filter(|f| f.contains("/weapons/")).count(), 11);
        assert!(RESIZE_FILES.contains(&"assets/magic/icon_lightning.png"));
    }
}
