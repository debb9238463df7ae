//! Directional sprite sheets.
//!
//! A sheet is an 8x3 grid: one column per compass direction, one row per
//! walk frame. Frames come from a [`FrameSource`]. Sheets can be described
//! in TexturePacker-compatible JSON Hash format for game engine interop.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{GenError, Result};
use crate::types::{Canvas, Direction, EnemyKind, WalkFrame};

use super::sprite::{enemy_sprite, player_frame, PlayerPose, ENEMY_SIZE, PLAYER_SIZE};

/// Columns in a directional sheet.
pub const SHEET_COLUMNS: u32 = 8;

/// Rows in a directional sheet.
pub const SHEET_ROWS: u32 = 3;

/// Produces the frames of a directional sheet.
pub trait FrameSource {
    /// Asset name used for frame labels.
    fn name(&self) -> String;

    /// Cell size (width, height).
    fn frame_size(&self) -> (u32, u32);

    /// Render one cell.
    fn render_frame(&self, direction: Direction, frame: WalkFrame) -> Canvas;
}

/// Player frames, re-drawn with a pose per walk frame.
#[derive(Debug, Clone, Copy)]
pub struct PlayerFrames {
    pub scheme: u32,
}

impl PlayerFrames {
    pub fn new(scheme: u32) -> Self {
        Self { scheme }
    }

    /// Pose for a walk frame.
    pub fn pose(frame: WalkFrame) -> PlayerPose {
        match frame {
            WalkFrame::Stand => PlayerPose::STAND,
            // body dips, left arm forward
            WalkFrame::Step1 => PlayerPose {
                dy_head: 0,
                dy_body: 1,
                arm_left: 1,
                arm_right: -1,
            },
            // head lifts, right arm forward
            WalkFrame::Step2 => PlayerPose {
                dy_head: -1,
                dy_body: 0,
                arm_left: -1,
                arm_right: 1,
            },
        }
    }
}

impl FrameSource for PlayerFrames {
    fn name(&self) -> String {
        format!("player_scheme_{}", self.scheme)
    }

    fn frame_size(&self) -> (u32, u32) {
        (PLAYER_SIZE, PLAYER_SIZE)
    }

    fn render_frame(&self, _direction: Direction, frame: WalkFrame) -> Canvas {
        player_frame(self.scheme, Self::pose(frame))
    }
}

/// Enemy frames: the standing sprite bobbed one pixel down, then up.
#[derive(Debug, Clone)]
pub struct EnemyFrames {
    kind: EnemyKind,
    stand: Canvas,
}

impl EnemyFrames {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            kind,
            stand: enemy_sprite(kind),
        }
    }

    /// Vertical pixel shift for a walk frame.
    pub fn bob(frame: WalkFrame) -> i32 {
        match frame {
            WalkFrame::Stand => 0,
            WalkFrame::Step1 => 1,
            WalkFrame::Step2 => -1,
        }
    }
}

impl FrameSource for EnemyFrames {
    fn name(&self) -> String {
        self.kind.asset_name().to_string()
    }

    fn frame_size(&self) -> (u32, u32) {
        (ENEMY_SIZE, ENEMY_SIZE)
    }

    fn render_frame(&self, _direction: Direction, frame: WalkFrame) -> Canvas {
        match Self::bob(frame) {
            0 => self.stand.clone(),
            dy => self.stand.shifted_vertical(dy),
        }
    }
}

/// A frame in a sheet or atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Sprite sheet metadata.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub frames: Vec<Frame>,
    pub image: String,
    pub size: (u32, u32),
}

/// A composed sheet and its frame layout.
#[derive(Debug, Clone)]
pub struct SheetOutput {
    pub canvas: Canvas,
    pub meta: SheetMeta,
}

/// Compose an 8x3 directional sheet from a frame source.
///
/// Each cell is clipped to the source's frame size, so the sheet is always
/// exactly `(8 * fw, 3 * fh)`.
pub fn compose_sheet(source: &dyn FrameSource) -> SheetOutput {
    let (fw, fh) = source.frame_size();
    let name = source.name();
    let mut canvas = Canvas::new(fw * SHEET_COLUMNS, fh * SHEET_ROWS);
    let mut frames = Vec::with_capacity((SHEET_COLUMNS * SHEET_ROWS) as usize);

    for frame in WalkFrame::ALL {
        for direction in Direction::ALL {
            let x = direction.column() * fw;
            let y = frame.row() * fh;
            let cell = source.render_frame(direction, frame);
            canvas.paste_clipped(&cell, x, y, fw, fh);
            frames.push(Frame {
                name: format!("{}_{}_{}", name, direction, frame),
                x,
                y,
                w: fw,
                h: fh,
            });
        }
    }

    let size = canvas.size();
    SheetOutput {
        canvas,
        meta: SheetMeta {
            frames,
            image: format!("{}_sheet.png", name),
            size,
        },
    }
}

/// Write sheet metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let json = sheet_json(meta)?;
    fs::write(path, json).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet metadata: {}", e),
    })?;
    Ok(())
}

/// Serialize sheet metadata to a pretty JSON string.
pub fn sheet_json(meta: &SheetMeta) -> Result<String> {
    let output = TexturePackerJson::from_meta(meta);
    serde_json::to_string_pretty(&output).map_err(|e| GenError::Build {
        message: format!("Failed to serialize sheet metadata: {}", e),
        help: None,
    })
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    format: String,
    size: TPSize,
    scale: String,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                let entry = TPFrame {
                    frame: TPRect {
                        x: f.x,
                        y: f.y,
                        w: f.w,
                        h: f.h,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect {
                        x: 0,
                        y: 0,
                        w: f.w,
                        h: f.h,
                    },
                    source_size: TPSize { w: f.w, h: f.h },
                };
                (f.name.clone(), entry)
            })
            .collect();

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: "pxgen".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                format: "RGBA8888".to_string(),
                size: TPSize {
                    w: meta.size.0,
                    h: meta.size.1,
                },
                scale: "1".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    /// Emits a frame larger than its declared cell.
    struct Oversized;

    impl FrameSource for Oversized {
        fn name(&self) -> String {
            "big".to_string()
        }

        fn frame_size(&self) -> (u32, u32) {
            (4, 2)
        }

        fn render_frame(&self, _direction: Direction, _frame: WalkFrame) -> Canvas {
            Canvas::filled(9, 9, Colour::WHITE)
        }
    }

    #[test]
    fn test_sheet_size_invariant() {
        let player = compose_sheet(&PlayerFrames::new(0));
        assert_eq!(player.canvas.size(), (24 * 8, 24 * 3));

        for kind in EnemyKind::ALL {
            let sheet = compose_sheet(&EnemyFrames::new(kind));
            assert_eq!(sheet.canvas.size(), (18 * 8, 18 * 3));
        }

        let big = compose_sheet(&Oversized);
        assert_eq!(big.canvas.size(), (32, 6));
        assert_eq!(big.canvas.opaque_pixel_count(), 32 * 6);
    }

    #[test]
    fn test_sheet_frames_row_major() {
        let sheet = compose_sheet(&EnemyFrames::new(EnemyKind::Tank));
        let frames = &sheet.meta.frames;
        assert_eq!(frames.len(), 24);
        assert_eq!(frames[0].name, "enemy_tank_e_stand");
        assert_eq!((frames[1].x, frames[1].y), (18, 0));
        assert_eq!(frames[8].name, "enemy_tank_e_walk1");
        assert_eq!((frames[8].x, frames[8].y), (0, 18));
        assert_eq!((frames[23].x, frames[23].y), (7 * 18, 36));
        assert_eq!(sheet.meta.image, "enemy_tank_sheet.png");
    }

    #[test]
    fn test_directions_render_identical_cells() {
        let sheet = compose_sheet(&PlayerFrames::new(1));
        for (x, y, px) in sheet.canvas.iter_pixels() {
            let column0 = sheet.canvas.get((x % 24) as i32, y as i32);
            assert_eq!(Some(px), column0);
        }
    }

    #[test]
    fn test_enemy_walk_frames_bob_one_pixel() {
        let kind = EnemyKind::Melee;
        let stand = enemy_sprite(kind);
        let sheet = compose_sheet(&EnemyFrames::new(kind));

        for y in 0..18 {
            for x in 0..18 {
                let above = stand.get(x, y - 1).unwrap_or(Colour::TRANSPARENT);
                let below = stand.get(x, y + 1).unwrap_or(Colour::TRANSPARENT);
                assert_eq!(sheet.canvas.get(x, y), stand.get(x, y));
                assert_eq!(sheet.canvas.get(x, 18 + y), Some(above));
                assert_eq!(sheet.canvas.get(x, 36 + y), Some(below));
            }
        }
    }

    #[test]
    fn test_player_walk_frames_redrawn() {
        let sheet = compose_sheet(&PlayerFrames::new(0));
        let body = Colour::rgb(51, 178, 255);
        // step 1: torso lowered into row 21
        assert_eq!(sheet.canvas.get(6, 24 + 21), Some(body));
        assert_eq!(sheet.canvas.get(6, 21), Some(Colour::TRANSPARENT));
        // step 2: head raised into row 2
        assert_eq!(sheet.canvas.get(8, 48 + 2), Some(body));
    }

    #[test]
    fn test_sheet_json_structure() {
        let sheet = compose_sheet(&EnemyFrames::new(EnemyKind::Boss));
        let json = sheet_json(&sheet.meta).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["frames"].as_object().unwrap().len(), 24);
        let cell = &parsed["frames"]["enemy_boss_ne_walk2"];
        assert_eq!(cell["frame"]["x"], 126);
        assert_eq!(cell["frame"]["y"], 36);
        assert_eq!(cell["rotated"], false);
        assert_eq!(parsed["meta"]["app"], "pxgen");
        assert_eq!(parsed["meta"]["image"], "enemy_boss_sheet.png");
        assert_eq!(parsed["meta"]["size"]["w"], 144);
        assert_eq!(parsed["meta"]["size"]["h"], 54);
    }

    #[test]
    fn test_write_sheet_json() {
        let meta = SheetMeta {
            frames: vec![Frame {
                name: "grass_0".to_string(),
                x: 64,
                y: 0,
                w: 32,
                h: 32,
            }],
            image: "terrain_atlas.png".to_string(),
            size: (224, 96),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.json");
        write_sheet_json(&meta, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["frames"]["grass_0"]["frame"]["x"], 64);
        assert_eq!(parsed["meta"]["size"]["h"], 96);
    }
}
