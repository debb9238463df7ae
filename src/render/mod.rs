//! Rendering module for pxgen.
//!
//! Shape primitives, per-entity sprite rules, and the sheet and atlas
//! composers built on top of them.

pub mod atlas;
pub mod icon;
mod png;
pub mod shape;
pub mod sheet;
pub mod sprite;

pub use atlas::{compose_atlas, ATLAS_LAYOUT};
pub use icon::{ui_icon, IconDef, DEFAULT_ICON_SKIP, ICON_SIZE, UI_ICONS};
pub use png::{ensure_parent, write_png};
pub use shape::{draw_layers, fill_region, Layer, Paint, Rect, Region};
pub use sheet::{
    compose_sheet, sheet_json, write_sheet_json, EnemyFrames, Frame, FrameSource, PlayerFrames,
    SheetMeta, SheetOutput,
};
pub use sprite::{
    bullet_by_type, bullet_sprite, enemy_bullet_sprite, enemy_sprite, pickup_sprite,
    player_frame, player_sprite, swing_visual, terrain_tile, weapon_def, weapon_icon,
    PlayerPose, SpriteRule, WeaponDef, TILES, WEAPONS,
};
