//! Asset catalogue - what gets generated and where it is written.
//!
//! The export plan is a pure list of canvases keyed by their path relative
//! to the asset root, so generation can be tested without touching disk.

use std::path::{Path, PathBuf};

use crate::discovery::Manifest;
use crate::error::Result;
use crate::render::sprite::SWING_WEAPONS;
use crate::render::{
    bullet_by_type, bullet_sprite, compose_atlas, compose_sheet, enemy_bullet_sprite,
    enemy_sprite, pickup_sprite, player_sprite, swing_visual, terrain_tile, ui_icon, weapon_def,
    weapon_icon, write_png, write_sheet_json, EnemyFrames, PlayerFrames, SheetMeta, SheetOutput,
    UI_ICONS, WEAPONS,
};
use crate::types::{Canvas, Colour, EnemyKind};

/// Terrain tiles exported as standalone files.
pub const EXPORTED_TILES: [&str; 7] = [
    "floor_a",
    "floor_b",
    "grass",
    "shallow_water",
    "deep_water",
    "obstacle",
    "boundary",
];

/// Number of player colour schemes.
pub const PLAYER_SCHEMES: u32 = 2;

/// A generated image and its destination.
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    /// Path relative to the asset root.
    pub path: PathBuf,
    pub canvas: Canvas,
    /// Frame layout for sheets and atlases.
    pub meta: Option<SheetMeta>,
}

impl GeneratedAsset {
    fn single(path: impl Into<PathBuf>, canvas: Canvas) -> Self {
        Self {
            path: path.into(),
            canvas,
            meta: None,
        }
    }

    fn sheet(path: impl Into<PathBuf>, output: SheetOutput) -> Self {
        Self {
            path: path.into(),
            canvas: output.canvas,
            meta: Some(output.meta),
        }
    }

    /// Path of the metadata file written next to a sheet.
    pub fn meta_path(&self) -> PathBuf {
        self.path.with_extension("json")
    }
}

/// Every sprite, sheet, tile and icon of the game, in a fixed order.
pub fn export_plan() -> Vec<GeneratedAsset> {
    let mut plan = Vec::new();

    for scheme in 0..PLAYER_SCHEMES {
        plan.push(GeneratedAsset::single(
            format!("characters/player_scheme_{}.png", scheme),
            player_sprite(scheme),
        ));
        plan.push(GeneratedAsset::sheet(
            format!("characters/player_scheme_{}_sheet.png", scheme),
            compose_sheet(&PlayerFrames::new(scheme)),
        ));
    }

    for kind in EnemyKind::ALL {
        let name = kind.asset_name();
        plan.push(GeneratedAsset::single(
            format!("enemies/{}.png", name),
            enemy_sprite(kind),
        ));
        plan.push(GeneratedAsset::sheet(
            format!("enemies/{}_sheet.png", name),
            compose_sheet(&EnemyFrames::new(kind)),
        ));
    }

    for def in &WEAPONS {
        plan.push(GeneratedAsset::single(
            format!("weapons/{}.png", def.id),
            weapon_icon(def.id, def.colour()),
        ));
    }

    for id in SWING_WEAPONS {
        let colour = weapon_def(id).map_or(Colour::WHITE, |d| d.colour());
        plan.push(GeneratedAsset::single(
            format!("weapons/swing_{}.png", id),
            swing_visual(id, colour),
        ));
    }

    let firearm = Colour::from_unit(1.0, 1.0, 0.4);
    let arcane = Colour::from_unit(0.88, 0.46, 0.95);
    plan.push(GeneratedAsset::single(
        "bullets/bullet_firearm.png",
        bullet_by_type("firearm", firearm),
    ));
    plan.push(GeneratedAsset::single(
        "bullets/bullet_laser.png",
        bullet_by_type("laser", arcane),
    ));
    plan.push(GeneratedAsset::single(
        "bullets/bullet_orb.png",
        bullet_by_type("orb", arcane),
    ));
    plan.push(GeneratedAsset::single(
        "bullets/player_bullet.png",
        bullet_sprite(false),
    ));
    plan.push(GeneratedAsset::single(
        "bullets/enemy_bullet.png",
        enemy_bullet_sprite(),
    ));

    plan.push(GeneratedAsset::single("pickups/coin.png", pickup_sprite(false)));
    plan.push(GeneratedAsset::single("pickups/heal.png", pickup_sprite(true)));

    for id in EXPORTED_TILES {
        plan.push(GeneratedAsset::single(
            format!("terrain/{}.png", id),
            terrain_tile(id),
        ));
    }
    plan.push(GeneratedAsset::sheet(
        "terrain/terrain_atlas.png",
        compose_atlas(),
    ));

    plan
}

/// UI icons allowed by the manifest, followed by its extra icons.
pub fn icon_plan(manifest: &Manifest) -> Result<Vec<GeneratedAsset>> {
    let size = manifest.icons.size;
    let mut plan: Vec<GeneratedAsset> = UI_ICONS
        .iter()
        .filter(|icon| !manifest.skips_icon(icon.path))
        .map(|icon| GeneratedAsset::single(icon.path, ui_icon(icon.colour, size)))
        .collect();

    for (path, colour) in manifest.extra_icons()? {
        if manifest.skips_icon(&path) {
            continue;
        }
        plan.push(GeneratedAsset::single(path, ui_icon(colour, size)));
    }

    Ok(plan)
}

/// Write assets under `root`, calling `on_written` after each PNG.
///
/// With `metadata` set, sheets and atlases also get a TexturePacker JSON
/// file next to the image. Returns the number of images written.
pub fn write_assets(
    root: &Path,
    assets: &[GeneratedAsset],
    metadata: bool,
    mut on_written: impl FnMut(&Path),
) -> Result<usize> {
    for asset in assets {
        let path = root.join(&asset.path);
        write_png(&asset.canvas, &path)?;
        on_written(&path);

        if let (true, Some(meta)) = (metadata, &asset.meta) {
            let meta_path = root.join(asset.meta_path());
            write_sheet_json(meta, &meta_path)?;
            on_written(&meta_path);
        }
    }
    Ok(assets.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    fn find<'a>(plan: &'a [GeneratedAsset], path: &str) -> &'a GeneratedAsset {
        plan.iter()
            .find(|a| a.path == Path::new(path))
            .unwrap_or_else(|| panic!("{} not in plan", path))
    }

    #[test]
    fn test_plan_contents() {
        let plan = export_plan();
        // 4 player + 12 enemy + 11 weapons + 5 swings + 5 bullets + 2 pickups + 7 tiles + atlas
        assert_eq!(plan.len(), 47);

        let paths: HashSet<&Path> = plan.iter().map(|a| a.path.as_path()).collect();
        assert_eq!(paths.len(), plan.len());

        assert_eq!(find(&plan, "characters/player_scheme_1_sheet.png").canvas.size(), (192, 72));
        assert_eq!(find(&plan, "enemies/enemy_dasher_sheet.png").canvas.size(), (144, 54));
        assert_eq!(find(&plan, "weapons/sniper.png").canvas.size(), (96, 96));
        assert_eq!(find(&plan, "weapons/swing_chainsaw.png").canvas.size(), (24, 8));
        assert_eq!(find(&plan, "bullets/bullet_laser.png").canvas.size(), (12, 2));
        assert_eq!(find(&plan, "bullets/enemy_bullet.png").canvas.size(), (10, 10));
        assert_eq!(find(&plan, "terrain/terrain_atlas.png").canvas.size(), (224, 96));
    }

    #[test]
    fn test_only_sheets_carry_meta() {
        let plan = export_plan();
        let with_meta: Vec<_> = plan.iter().filter(|a| a.meta.is_some()).collect();
        assert_eq!(with_meta.len(), 2 + 6 + 1);
        assert_eq!(
            find(&plan, "terrain/terrain_atlas.png").meta.as_ref().unwrap().frames.len(),
            21
        );
    }

    #[test]
    fn test_firearm_bullet_colour() {
        let plan = export_plan();
        let bullet = &find(&plan, "bullets/bullet_firearm.png").canvas;
        assert_eq!(bullet.get(1, 1), Some(Colour::rgb(255, 255, 102)));
    }

    #[test]
    fn test_icon_plan_respects_skip_list() {
        let manifest = Manifest::default();
        let plan = icon_plan(&manifest).unwrap();
        assert_eq!(plan.len(), 12);
        assert!(plan.iter().all(|a| a.path != Path::new("magic/icon_fire.png")));
        assert!(plan.iter().all(|a| a.canvas.size() == (64, 64)));
    }

    #[test]
    fn test_icon_plan_extra_icons() {
        let manifest = Manifest::parse(
            "icons:\n  size: 16\n  skip: []\n  extra:\n    - path: ui/upgrade_icons/icon_luck.png\n      colour: \"#E6C84D\"\n",
        )
        .unwrap();
        let plan = icon_plan(&manifest).unwrap();
        assert_eq!(plan.len(), 14);
        let luck = plan.last().unwrap();
        assert_eq!(luck.path, PathBuf::from("ui/upgrade_icons/icon_luck.png"));
        assert_eq!(luck.canvas.get(8, 8), Some(Colour::rgb(0xE6, 0xC8, 0x4D)));
    }

    #[test]
    fn test_write_assets_is_byte_identical() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let plan = export_plan();

        let mut written = Vec::new();
        let count = write_assets(root, &plan, true, |p| written.push(p.to_path_buf())).unwrap();
        assert_eq!(count, 47);
        assert_eq!(written.len(), 47 + 9);
        assert!(root.join("terrain/terrain_atlas.json").is_file());
        assert!(root.join("enemies/enemy_boss_sheet.json").is_file());

        let atlas_path = root.join("terrain/terrain_atlas.png");
        let first = fs::read(&atlas_path).unwrap();
        write_assets(root, &export_plan(), false, |_| {}).unwrap();
        assert_eq!(fs::read(&atlas_path).unwrap(), first);
    }
}
