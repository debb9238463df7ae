//! Entity sprite generators.
//!
//! Every entity category resolves its identifier to a static drawing rule
//! (canvas size, colours, layer list) and renders it onto a fresh canvas.
//! Lookups always succeed: each table has an explicit default entry.

use crate::types::{Canvas, Colour, EnemyKind};

use super::shape::{draw_layers, Layer, Rect, Region};

/// A fixed-size sprite described as ordered layers.
#[derive(Debug, Clone, Copy)]
pub struct SpriteRule {
    pub width: u32,
    pub height: u32,
    pub base: Colour,
    pub shade: Colour,
    pub layers: &'static [Layer],
}

impl SpriteRule {
    /// Render with the rule's own colours.
    pub fn render(&self) -> Canvas {
        self.render_with(self.base, self.shade)
    }

    /// Render with an explicit base/shade pair.
    pub fn render_with(&self, base: Colour, shade: Colour) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        draw_layers(&mut canvas, self.layers, base, shade);
        canvas
    }
}

const fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Region {
    Region::Rect(Rect::new(x0, y0, x1, y1))
}

// --- Player ---

pub const PLAYER_SIZE: u32 = 24;

/// (body, dark) colour pairs selected by scheme.
const PLAYER_SCHEMES: [(Colour, Colour); 2] = [
    (Colour::rgb(51, 178, 255), Colour::rgb(38, 133, 191)),
    (Colour::rgb(255, 140, 51), Colour::rgb(191, 105, 38)),
];

/// Pixel offsets applied to parts of the player figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerPose {
    pub dy_head: i32,
    pub dy_body: i32,
    pub arm_left: i32,
    pub arm_right: i32,
}

impl PlayerPose {
    pub const STAND: PlayerPose = PlayerPose {
        dy_head: 0,
        dy_body: 0,
        arm_left: 0,
        arm_right: 0,
    };
}

/// Colours for a player scheme. Scheme 0 is blue, anything else orange.
pub fn player_colours(scheme: u32) -> (Colour, Colour) {
    if scheme == 0 {
        PLAYER_SCHEMES[0]
    } else {
        PLAYER_SCHEMES[1]
    }
}

/// The standing player sprite (24x24).
pub fn player_sprite(scheme: u32) -> Canvas {
    player_frame(scheme, PlayerPose::STAND)
}

/// The player sprite drawn with a pose.
pub fn player_frame(scheme: u32, pose: PlayerPose) -> Canvas {
    let (body, dark) = player_colours(scheme);
    let head = Rect::new(8, 3, 16, 10).offset(0, pose.dy_head);
    let torso = Rect::new(6, 10, 18, 21).offset(0, pose.dy_body);
    let left_arm = Rect::new(3, 11, 6, 18).offset(pose.arm_left, 0);
    let right_arm = Rect::new(18, 11, 21, 18).offset(pose.arm_right, 0);

    let layers = [
        Layer::base(Region::Rect(head)),
        Layer::base(Region::Rect(torso)),
        Layer::shade(Region::Rect(left_arm)),
        Layer::shade(Region::Rect(right_arm)),
    ];
    let mut canvas = Canvas::new(PLAYER_SIZE, PLAYER_SIZE);
    draw_layers(&mut canvas, &layers, body, dark);
    canvas
}

// --- Enemies ---

pub const ENEMY_SIZE: u32 = 18;

const WHITE: Colour = Colour::WHITE;
const ENEMY_INNER: Rect = Rect::new(1, 1, 17, 17);

static MELEE: SpriteRule = SpriteRule {
    width: ENEMY_SIZE,
    height: ENEMY_SIZE,
    base: Colour::rgb(217, 51, 51),
    shade: Colour::rgb(151, 35, 35),
    layers: &[
        Layer::base(rect(3, 3, 15, 15)),
        // horns
        Layer::base(Region::Rect(Rect::point(4, 2))),
        Layer::base(Region::Rect(Rect::point(13, 2))),
    ],
};

static RANGED: SpriteRule = SpriteRule {
    width: ENEMY_SIZE,
    height: ENEMY_SIZE,
    base: Colour::rgb(179, 46, 217),
    shade: Colour::rgb(125, 32, 151),
    layers: &[
        Layer::base(Region::diamond(8, 8, 7)).clipped(ENEMY_INNER),
        Layer::fixed(rect(7, 7, 9, 8), WHITE),
    ],
};

static TANK: SpriteRule = SpriteRule {
    width: ENEMY_SIZE,
    height: ENEMY_SIZE,
    base: Colour::rgb(51, 166, 64),
    shade: Colour::rgb(37, 120, 46),
    layers: &[
        Layer::base(rect(2, 2, 16, 16)),
        Layer::shade(Region::Border(Rect::new(2, 2, 16, 16))),
    ],
};

static AQUATIC: SpriteRule = SpriteRule {
    width: ENEMY_SIZE,
    height: ENEMY_SIZE,
    base: Colour::rgb(51, 191, 217),
    shade: Colour::rgb(35, 133, 151),
    layers: &[
        Layer::base(rect(4, 5, 14, 13)),
        // fins
        Layer::base(rect(2, 6, 3, 12)),
        Layer::base(rect(15, 7, 16, 11)),
    ],
};

static DASHER: SpriteRule = SpriteRule {
    width: ENEMY_SIZE,
    height: ENEMY_SIZE,
    base: Colour::rgb(255, 115, 38),
    shade: Colour::rgb(178, 80, 26),
    layers: &[
        Layer::base(Region::diamond(8, 8, 6)).clipped(ENEMY_INNER),
        Layer::fixed(Region::Rect(Rect::point(8, 8)), Colour::rgb(255, 140, 70)),
    ],
};

static BOSS: SpriteRule = SpriteRule {
    width: ENEMY_SIZE,
    height: ENEMY_SIZE,
    base: Colour::rgb(179, 31, 46),
    shade: Colour::rgb(125, 21, 32),
    layers: &[
        // centred at 8.5 so the diamond spans the whole canvas
        Layer::base(Region::Diamond { cx2: 17, cy2: 17, r2: 18 }),
        Layer::fixed(rect(8, 8, 10, 10), WHITE),
    ],
};

/// Drawing rule for an enemy kind.
pub fn enemy_rule(kind: EnemyKind) -> &'static SpriteRule {
    match kind {
        EnemyKind::Melee => &MELEE,
        EnemyKind::Ranged => &RANGED,
        EnemyKind::Tank => &TANK,
        EnemyKind::Aquatic => &AQUATIC,
        EnemyKind::Dasher => &DASHER,
        EnemyKind::Boss => &BOSS,
    }
}

/// An enemy sprite (18x18).
pub fn enemy_sprite(kind: EnemyKind) -> Canvas {
    enemy_rule(kind).render()
}

// --- Bullets ---

pub const ENEMY_BULLET_COLOUR: Colour = Colour::rgb(255, 77, 77);
pub const PLAYER_BULLET_COLOUR: Colour = Colour::rgb(255, 255, 102);

const SMALL_BULLET: &[Layer] = &[Layer::base(Region::Diamond { cx2: 3, cy2: 3, r2: 4 })];

/// Bullet shapes by type id.
const BULLET_RULES: &[(&str, u32, u32, &[Layer])] = &[
    ("firearm", 4, 4, SMALL_BULLET),
    ("laser", 12, 2, &[Layer::base(rect(0, 0, 12, 2))]),
    (
        "orb",
        8,
        8,
        // centre 3.5, squared radius 12
        &[Layer::base(Region::Disk { cx2: 7, cy2: 7, limit: 48 })],
    ),
];

/// The 4x4 diamond bullet in player or enemy colours.
pub fn bullet_sprite(is_enemy: bool) -> Canvas {
    let colour = if is_enemy {
        ENEMY_BULLET_COLOUR
    } else {
        PLAYER_BULLET_COLOUR
    };
    let mut canvas = Canvas::new(4, 4);
    draw_layers(&mut canvas, SMALL_BULLET, colour, colour.shade());
    canvas
}

/// The larger 10x10 enemy bullet.
pub fn enemy_bullet_sprite() -> Canvas {
    let mut canvas = Canvas::new(10, 10);
    draw_layers(
        &mut canvas,
        &[Layer::base(Region::disk_half(9, 9, 9))],
        ENEMY_BULLET_COLOUR,
        ENEMY_BULLET_COLOUR.shade(),
    );
    canvas
}

/// A bullet of the given type. Unknown types get the player bullet.
pub fn bullet_by_type(kind: &str, colour: Colour) -> Canvas {
    match BULLET_RULES.iter().find(|(id, ..)| *id == kind) {
        Some(&(_, w, h, layers)) => {
            let mut canvas = Canvas::new(w, h);
            draw_layers(&mut canvas, layers, colour, colour.shade());
            canvas
        }
        None => bullet_sprite(false),
    }
}

// --- Weapons ---

pub const WEAPON_ICON_SIZE: u32 = 96;
pub const SWING_WIDTH: u32 = 24;
pub const SWING_HEIGHT: u32 = 8;

/// A weapon and its unit-float tint.
#[derive(Debug, Clone, Copy)]
pub struct WeaponDef {
    pub id: &'static str,
    pub tint: (f64, f64, f64),
}

impl WeaponDef {
    pub fn colour(&self) -> Colour {
        Colour::from_unit(self.tint.0, self.tint.1, self.tint.2)
    }
}

/// Every weapon in export order.
pub static WEAPONS: [WeaponDef; 11] = [
    WeaponDef { id: "blade_short", tint: (0.95, 0.30, 0.30) },
    WeaponDef { id: "dagger", tint: (0.60, 0.65, 0.75) },
    WeaponDef { id: "spear", tint: (0.55, 0.60, 0.70) },
    WeaponDef { id: "chainsaw", tint: (0.35, 0.38, 0.40) },
    WeaponDef { id: "hammer_heavy", tint: (0.90, 0.58, 0.24) },
    WeaponDef { id: "pistol_basic", tint: (0.25, 0.80, 0.95) },
    WeaponDef { id: "shotgun_wide", tint: (0.50, 0.88, 0.30) },
    WeaponDef { id: "rifle_long", tint: (0.65, 0.66, 0.95) },
    WeaponDef { id: "wand_focus", tint: (0.88, 0.46, 0.95) },
    WeaponDef { id: "sniper", tint: (0.45, 0.50, 0.55) },
    WeaponDef { id: "orb_wand", tint: (0.95, 0.70, 0.35) },
];

/// Look up a weapon definition by id.
pub fn weapon_def(id: &str) -> Option<&'static WeaponDef> {
    WEAPONS.iter().find(|w| w.id == id)
}

const WEAPON_ICON_RULES: &[(&str, &[Layer])] = &[
    ("blade_short", &[Layer::base(rect(36, 42, 60, 54)), Layer::shade(rect(38, 44, 58, 52))]),
    ("hammer_heavy", &[Layer::base(rect(32, 28, 64, 44)), Layer::shade(rect(44, 44, 52, 72))]),
    ("pistol_basic", &[Layer::base(rect(28, 40, 68, 56)), Layer::shade(rect(32, 44, 48, 52))]),
    ("shotgun_wide", &[Layer::base(rect(24, 42, 72, 54)), Layer::shade(rect(40, 44, 56, 52))]),
    ("rifle_long", &[Layer::base(rect(16, 44, 80, 52)), Layer::shade(rect(36, 46, 60, 50))]),
    // staff first, head drawn over it
    ("wand_focus", &[Layer::shade(rect(44, 24, 52, 72)), Layer::base(rect(38, 20, 58, 40))]),
    ("dagger", &[Layer::base(rect(40, 42, 56, 54)), Layer::shade(rect(42, 44, 54, 52))]),
    ("spear", &[Layer::base(rect(28, 44, 68, 52)), Layer::shade(rect(36, 46, 60, 50))]),
    ("chainsaw", &[Layer::base(rect(32, 36, 64, 60)), Layer::shade(rect(38, 42, 58, 54))]),
    ("sniper", &[Layer::base(rect(12, 44, 84, 52)), Layer::shade(rect(36, 46, 60, 50))]),
    ("orb_wand", &[Layer::shade(rect(40, 24, 56, 72)), Layer::base(rect(42, 32, 54, 48))]),
];

const WEAPON_ICON_FALLBACK: &[Layer] = &[Layer::base(Region::disk_half(96, 96, 64))];

/// Layers for a weapon icon; unknown ids get a centred disk.
pub fn weapon_icon_layers(id: &str) -> &'static [Layer] {
    WEAPON_ICON_RULES
        .iter()
        .find(|(rule_id, _)| *rule_id == id)
        .map_or(WEAPON_ICON_FALLBACK, |&(_, layers)| layers)
}

/// A 96x96 weapon icon in `colour` with its shade.
pub fn weapon_icon(id: &str, colour: Colour) -> Canvas {
    let mut canvas = Canvas::new(WEAPON_ICON_SIZE, WEAPON_ICON_SIZE);
    draw_layers(&mut canvas, weapon_icon_layers(id), colour, colour.shade());
    canvas
}

const SWING_RULES: &[(&str, &[Layer])] = &[
    ("blade_short", &[Layer::base(rect(4, 2, 20, 6)), Layer::shade(rect(6, 3, 18, 5))]),
    ("dagger", &[Layer::base(rect(6, 2, 18, 6)), Layer::shade(rect(8, 3, 16, 5))]),
    ("spear", &[Layer::base(rect(2, 3, 22, 5)), Layer::shade(rect(4, 3, 20, 5))]),
    (
        "chainsaw",
        &[
            Layer::base(rect(4, 2, 20, 6)),
            Layer::shade(Region::Stripes {
                rect: Rect::new(6, 3, 18, 5),
                period: 3,
                on: 2,
            }),
        ],
    ),
];

/// Heavy hammer swing, also used for any weapon without its own swing.
const SWING_FALLBACK: &[Layer] = &[Layer::base(rect(2, 1, 22, 7)), Layer::shade(rect(4, 2, 20, 6))];

/// Weapon ids that have a swing effect, in export order.
pub const SWING_WEAPONS: [&str; 5] = ["blade_short", "hammer_heavy", "dagger", "spear", "chainsaw"];

/// A 24x8 melee swing effect.
pub fn swing_visual(id: &str, colour: Colour) -> Canvas {
    let layers = SWING_RULES
        .iter()
        .find(|(rule_id, _)| *rule_id == id)
        .map_or(SWING_FALLBACK, |&(_, layers)| layers);
    let mut canvas = Canvas::new(SWING_WIDTH, SWING_HEIGHT);
    draw_layers(&mut canvas, layers, colour, colour.shade());
    canvas
}

// --- Pickups ---

pub const PICKUP_SIZE: u32 = 8;

static HEAL: SpriteRule = SpriteRule {
    width: PICKUP_SIZE,
    height: PICKUP_SIZE,
    base: Colour::rgb(242, 51, 89),
    shade: Colour::rgb(169, 35, 62),
    layers: &[
        Layer::base(rect(2, 1, 6, 2)),
        Layer::base(rect(2, 6, 6, 7)),
        Layer::base(rect(1, 2, 2, 6)),
        Layer::base(rect(6, 2, 7, 6)),
        Layer::base(rect(2, 2, 6, 6)),
    ],
};

static COIN: SpriteRule = SpriteRule {
    width: PICKUP_SIZE,
    height: PICKUP_SIZE,
    base: Colour::rgb(255, 217, 56),
    shade: Colour::rgb(178, 151, 39),
    layers: &[Layer::base(Region::Diamond { cx2: 7, cy2: 7, r2: 8 }).clipped(Rect::new(1, 1, 7, 7))],
};

/// A heal or coin pickup (8x8).
pub fn pickup_sprite(is_heal: bool) -> Canvas {
    if is_heal {
        HEAL.render()
    } else {
        COIN.render()
    }
}

// --- Terrain ---

pub const TILE_SIZE: u32 = 32;

/// Flat fill colour per terrain tile. Overlay kinds are semi-transparent.
pub static TILES: [(&str, Colour); 11] = [
    ("floor_a", Colour::rgb(199, 199, 204)),
    ("floor_b", Colour::rgb(184, 184, 189)),
    ("floor_seaside_a", Colour::rgb(166, 199, 209)),
    ("floor_seaside_b", Colour::rgb(140, 179, 191)),
    ("floor_mountain_a", Colour::rgb(140, 133, 122)),
    ("floor_mountain_b", Colour::rgb(122, 115, 107)),
    ("grass", Colour::new(51, 115, 46, 115)),
    ("shallow_water", Colour::new(61, 140, 204, 122)),
    ("deep_water", Colour::new(20, 51, 107, 143)),
    ("obstacle", Colour::rgb(41, 41, 51)),
    ("boundary", Colour::rgb(84, 84, 89)),
];

/// Fill colour of a tile id, if known.
pub fn tile_colour(id: &str) -> Option<Colour> {
    TILES.iter().find(|(tile, _)| *tile == id).map(|&(_, c)| c)
}

/// A 32x32 terrain tile. Unknown ids produce a transparent tile.
pub fn terrain_tile(id: &str) -> Canvas {
    match tile_colour(id) {
        Some(colour) => Canvas::filled(TILE_SIZE, TILE_SIZE, colour),
        None => Canvas::new(TILE_SIZE, TILE_SIZE),
    }
}
