//! Terrain atlas composition.
//!
//! The atlas is a fixed 7x3 grid of terrain tiles. Each row is a biome
//! (flat, seaside, mountain) with its own two floor variants in columns 0-1;
//! columns 2-6 repeat the shared overlay and obstacle tiles in every row.

use crate::types::Canvas;

use super::sheet::{Frame, SheetMeta, SheetOutput};
use super::sprite::{terrain_tile, TILE_SIZE};

pub const ATLAS_COLUMNS: usize = 7;
pub const ATLAS_ROWS: usize = 3;

/// Tile ids by (row, column).
pub const ATLAS_LAYOUT: [[&str; ATLAS_COLUMNS]; ATLAS_ROWS] = [
    [
        "floor_a",
        "floor_b",
        "grass",
        "shallow_water",
        "deep_water",
        "obstacle",
        "boundary",
    ],
    [
        "floor_seaside_a",
        "floor_seaside_b",
        "grass",
        "shallow_water",
        "deep_water",
        "obstacle",
        "boundary",
    ],
    [
        "floor_mountain_a",
        "floor_mountain_b",
        "grass",
        "shallow_water",
        "deep_water",
        "obstacle",
        "boundary",
    ],
];

/// Render the terrain atlas (224x96) and its frame layout.
pub fn compose_atlas() -> SheetOutput {
    let mut canvas = Canvas::new(
        TILE_SIZE * ATLAS_COLUMNS as u32,
        TILE_SIZE * ATLAS_ROWS as u32,
    );
    let mut frames = Vec::with_capacity(ATLAS_COLUMNS * ATLAS_ROWS);

    for (row, ids) in ATLAS_LAYOUT.iter().enumerate() {
        for (col, id) in ids.iter().enumerate() {
            let x = col as u32 * TILE_SIZE;
            let y = row as u32 * TILE_SIZE;
            canvas.paste(&terrain_tile(id), x, y);
            frames.push(Frame {
                name: format!("{}_{}", id, row),
                x,
                y,
                w: TILE_SIZE,
                h: TILE_SIZE,
            });
        }
    }

    let size = canvas.size();
    SheetOutput {
        canvas,
        meta: SheetMeta {
            frames,
            image: "terrain_atlas.png".to_string(),
            size,
        },
    }
}
