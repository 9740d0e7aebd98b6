//! Autotile classification from four-neighbour adjacency
//!
//! The decision table is plain data: a rule matches when every non-wildcard
//! entry agrees with the mask, and the first matching rule wins.

use std::fmt;

use crate::math::Direction;

/// Presence of a neighbour on each planar side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdjacencyMask {
    /// Neighbour at +Y
    pub up: bool,
    /// Neighbour at +X
    pub right: bool,
    /// Neighbour at -Y
    pub down: bool,
    /// Neighbour at -X
    pub left: bool,
}

impl AdjacencyMask {
    /// Mask with every side occupied
    pub const FULL: Self = Self::new(true, true, true, true);

    /// Create a mask in (up, right, down, left) order
    pub const fn new(up: bool, right: bool, down: bool, left: bool) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// Decode the 4-bit form (`up = 1`, `right = 2`, `down = 4`, `left = 8`)
    pub const fn from_bits(bits: u8) -> Self {
        Self::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
    }

    /// Encode as 4 bits
    pub const fn bits(self) -> u8 {
        (self.up as u8) | (self.right as u8) << 1 | (self.down as u8) << 2 | (self.left as u8) << 3
    }

    /// Presence on one side
    pub const fn get(self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Set presence on one side
    pub const fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Up => self.up = present,
            Direction::Right => self.right = present,
            Direction::Down => self.down = present,
            Direction::Left => self.left = present,
        }
    }

    /// Whether all four sides are occupied
    pub const fn is_surrounded(self) -> bool {
        self.up && self.right && self.down && self.left
    }
}

/// Visual tile variant an autotiler should place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Top edge, open to the left
    UpLeft,
    /// Top edge between neighbours, or a cap over a column
    UpMiddle,
    /// Top edge, open to the right
    UpRight,
    /// Covered above and below
    Center,
    /// Covered above, open below
    Down,
    /// No neighbours
    Alone,
    /// No rule matched
    Unclassified,
}

impl TileClass {
    /// Every class a rule can produce, in table order of first appearance
    pub const PLACEABLE: [Self; 6] = [
        Self::UpLeft,
        Self::UpMiddle,
        Self::UpRight,
        Self::Center,
        Self::Down,
        Self::Alone,
    ];
}

impl fmt::Display for TileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UpLeft => "up-left",
            Self::UpMiddle => "up-middle",
            Self::UpRight => "up-right",
            Self::Center => "center",
            Self::Down => "down",
            Self::Alone => "alone",
            Self::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// One row of the decision table, `None` is a wildcard
#[derive(Debug, Clone, Copy)]
struct TileRule {
    up: Option<bool>,
    right: Option<bool>,
    down: Option<bool>,
    left: Option<bool>,
    class: TileClass,
}

impl TileRule {
    const fn new(
        up: Option<bool>,
        right: Option<bool>,
        down: Option<bool>,
        left: Option<bool>,
        class: TileClass,
    ) -> Self {
        Self {
            up,
            right,
            down,
            left,
            class,
        }
    }

    fn matches(&self, mask: AdjacencyMask) -> bool {
        let agrees = |rule: Option<bool>, actual: bool| rule.is_none_or(|wanted| wanted == actual);
        agrees(self.up, mask.up)
            && agrees(self.right, mask.right)
            && agrees(self.down, mask.down)
            && agrees(self.left, mask.left)
    }
}

const ON: Option<bool> = Some(true);
const OFF: Option<bool> = Some(false);
const ANY: Option<bool> = None;

// Evaluated top to bottom
const TILE_RULES: [TileRule; 7] = [
    TileRule::new(OFF, ON, ANY, OFF, TileClass::UpLeft),
    TileRule::new(OFF, ON, ANY, ON, TileClass::UpMiddle),
    TileRule::new(OFF, OFF, ANY, ON, TileClass::UpRight),
    TileRule::new(OFF, OFF, ON, OFF, TileClass::UpMiddle),
    TileRule::new(OFF, OFF, OFF, OFF, TileClass::Alone),
    TileRule::new(ON, ANY, ON, ANY, TileClass::Center),
    TileRule::new(ON, ANY, ANY, ANY, TileClass::Down),
];

/// Classify a cell by its neighbours
///
/// Masks no rule covers come back as [`TileClass::Unclassified`] instead of
/// falling through to a default tile.
pub fn classify_tile(mask: AdjacencyMask) -> TileClass {
    TILE_RULES
        .iter()
        .find(|rule| rule.matches(mask))
        .map_or(TileClass::Unclassified, |rule| rule.class)
}
