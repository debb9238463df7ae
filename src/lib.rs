//! pxgen - Procedural pixel-art asset generator
//!
//! Draws every sprite, animation sheet, terrain tile and placeholder icon a
//! small top-down action game needs from fixed colour and shape rules, and
//! carries two maintenance passes over existing art: square icon resizing
//! and alpha normalisation.

pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod output;
pub mod render;
pub mod types;

pub use catalog::{export_plan, icon_plan, write_assets, GeneratedAsset};
pub use discovery::{Manifest, Project};
pub use error::{GenError, Result};
pub use normalize::{normalize_opacity, resize_files, OpacityReport, ResizeReport};
pub use render::{compose_atlas, compose_sheet, write_png, EnemyFrames, PlayerFrames, SheetMeta};
pub use types::{Canvas, Colour, Direction, EnemyKind, WalkFrame};
