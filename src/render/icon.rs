//! Placeholder UI icons for upgrades and magic schools.
//!
//! Each icon is a flat square in its colour with a one-pixel shaded border.

use crate::types::{Canvas, Colour};

use super::shape::{draw_layers, Layer, Rect, Region};

/// Default edge length of a UI icon.
pub const ICON_SIZE: u32 = 64;

/// An icon and its output path relative to the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    pub path: &'static str,
    pub colour: Colour,
}

const fn icon(path: &'static str, r: u8, g: u8, b: u8) -> IconDef {
    IconDef {
        path,
        colour: Colour::rgb(r, g, b),
    }
}

pub static UI_ICONS: [IconDef; 13] = [
    icon("ui/upgrade_icons/icon_hp.png", 230, 64, 64),
    icon("ui/upgrade_icons/icon_mana.png", 89, 140, 255),
    icon("ui/upgrade_icons/icon_armor.png", 153, 153, 166),
    icon("ui/upgrade_icons/icon_speed.png", 77, 217, 102),
    icon("ui/upgrade_icons/icon_melee.png", 217, 102, 51),
    icon("ui/upgrade_icons/icon_ranged.png", 128, 179, 230),
    icon("ui/upgrade_icons/icon_regen.png", 102, 230, 128),
    icon("ui/upgrade_icons/icon_lifesteal.png", 204, 51, 128),
    icon("ui/upgrade_icons/icon_mana_regen.png", 102, 153, 255),
    icon("magic/icon_fire.png", 255, 115, 38),
    icon("magic/icon_ice.png", 102, 191, 255),
    icon("magic/icon_poison.png", 128, 51, 179),
    icon("magic/icon_physical.png", 153, 153, 166),
];

/// Icons replaced by hand-drawn art; never regenerated by default.
pub const DEFAULT_ICON_SKIP: [&str; 2] = ["magic/icon_fire.png", "magic/icon_lightning.png"];

/// A square icon of `size` filled with `colour` and outlined in its shade.
pub fn ui_icon(colour: Colour, size: u32) -> Canvas {
    let edge = Rect::new(0, 0, size as i32, size as i32);
    let mut canvas = Canvas::new(size, size);
    draw_layers(
        &mut canvas,
        &[Layer::base(Region::Rect(edge)), Layer::shade(Region::Border(edge))],
        colour,
        colour.shade(),
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_border_is_shaded() {
        let c = Colour::rgb(230, 64, 64);
        let icon = ui_icon(c, ICON_SIZE);
        assert_eq!(icon.size(), (64, 64));
        assert_eq!(icon.get(0, 0), Some(c.shade()));
        assert_eq!(icon.get(63, 17), Some(c.shade()));
        assert_eq!(icon.get(17, 63), Some(c.shade()));
        assert_eq!(icon.get(1, 1), Some(c));
        assert_eq!(icon.get(32, 32), Some(c));
    }

    #[test]
    fn test_icon_fully_opaque() {
        let icon = ui_icon(Colour::rgb(102, 191, 255), 16);
        assert_eq!(icon.opaque_pixel_count(), 256);
    }

    #[test]
    fn test_icon_paths_unique() {
        let mut paths: Vec<&str> = UI_ICONS.iter().map(|i| i.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), UI_ICONS.len());
    }
}
