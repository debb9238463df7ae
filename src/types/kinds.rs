//! Selectors for sprite rules and sheet cells.

use std::fmt;

/// Enemy archetype. Indices follow the game's enemy type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Melee,
    Ranged,
    Tank,
    Boss,
    Aquatic,
    Dasher,
}

impl EnemyKind {
    /// All kinds in index order.
    pub const ALL: [EnemyKind; 6] = [
        EnemyKind::Melee,
        EnemyKind::Ranged,
        EnemyKind::Tank,
        EnemyKind::Boss,
        EnemyKind::Aquatic,
        EnemyKind::Dasher,
    ];

    /// Resolve a numeric type id. Unassigned ids fall back to the boss rule.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => EnemyKind::Melee,
            1 => EnemyKind::Ranged,
            2 => EnemyKind::Tank,
            4 => EnemyKind::Aquatic,
            5 => EnemyKind::Dasher,
            _ => EnemyKind::Boss,
        }
    }

    /// Numeric type id.
    pub fn index(self) -> u32 {
        match self {
            EnemyKind::Melee => 0,
            EnemyKind::Ranged => 1,
            EnemyKind::Tank => 2,
            EnemyKind::Boss => 3,
            EnemyKind::Aquatic => 4,
            EnemyKind::Dasher => 5,
        }
    }

    /// Asset file stem, e.g. `enemy_melee`.
    pub fn asset_name(self) -> &'static str {
        match self {
            EnemyKind::Melee => "enemy_melee",
            EnemyKind::Ranged => "enemy_ranged",
            EnemyKind::Tank => "enemy_tank",
            EnemyKind::Boss => "enemy_boss",
            EnemyKind::Aquatic => "enemy_aquatic",
            EnemyKind::Dasher => "enemy_dasher",
        }
    }
}

/// Compass direction of a sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    E,
    SE,
    S,
    SW,
    W,
    NW,
    N,
    NE,
}

impl Direction {
    /// Sheet column order.
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::N,
        Direction::NE,
    ];

    /// Column index in a directional sheet.
    pub fn column(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
            Direction::N => "n",
            Direction::NE => "ne",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Animation frame of a sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkFrame {
    Stand,
    Step1,
    Step2,
}

impl WalkFrame {
    /// Sheet row order.
    pub const ALL: [WalkFrame; 3] = [WalkFrame::Stand, WalkFrame::Step1, WalkFrame::Step2];

    /// Row index in a directional sheet.
    pub fn row(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            WalkFrame::Stand => "stand",
            WalkFrame::Step1 => "walk1",
            WalkFrame::Step2 => "walk2",
        }
    }
}

impl fmt::Display for WalkFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_index_round_trip() {
        for kind in EnemyKind::ALL {
            assert_eq!(EnemyKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn test_unknown_enemy_index_is_boss() {
        assert_eq!(EnemyKind::from_index(6), EnemyKind::Boss);
        assert_eq!(EnemyKind::from_index(99), EnemyKind::Boss);
    }

    #[test]
    fn test_direction_columns_follow_compass_order() {
        let cols: Vec<u32> = Direction::ALL.iter().map(|d| d.column()).collect();
        assert_eq!(cols, (0..8).collect::<Vec<_>>());
        assert_eq!(Direction::ALL[4], Direction::W);
        assert_eq!(Direction::NE.column(), 7);
    }

    #[test]
    fn test_frame_rows() {
        assert_eq!(WalkFrame::Stand.row(), 0);
        assert_eq!(WalkFrame::Step2.row(), 2);
        assert_eq!(WalkFrame::Step1.to_string(), "walk1");
    }
}
