//! Vector value type and the direction sets used by probes and ground growth

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Immutable three-component position
///
/// Equality is exact per-component float equality, so `-0.0 == 0.0` and
/// a NaN component never compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// Horizontal axis
    pub x: f32,
    /// Vertical axis (up in 2-D layouts)
    pub y: f32,
    /// Depth axis
    pub z: f32,
}

impl Vector3 {
    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Read a single component
    pub const fn get(self, axis: Axis3) -> f32 {
        match axis {
            Axis3::X => self.x,
            Axis3::Y => self.y,
            Axis3::Z => self.z,
        }
    }

    /// Squared distance on the XY plane
    pub fn planar_distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Apply a function to every component
    #[must_use]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Planar neighbour direction used for adjacency probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +Y
    Up,
    /// +X
    Right,
    /// -Y
    Down,
    /// -X
    Left,
}

impl Direction {
    /// Probe order shared by border classification and the tiler
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit step on the XY plane
    pub const fn unit(self) -> Vector3 {
        match self {
            Self::Up => Vector3::new(0.0, 1.0, 0.0),
            Self::Right => Vector3::new(1.0, 0.0, 0.0),
            Self::Down => Vector3::new(0.0, -1.0, 0.0),
            Self::Left => Vector3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Integer cell step as `[dx, dy]`
    pub const fn cell_step(self) -> [i64; 2] {
        match self {
            Self::Up => [0, 1],
            Self::Right => [1, 0],
            Self::Down => [0, -1],
            Self::Left => [-1, 0],
        }
    }
}

/// Spatial axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis3 {
    /// Horizontal
    X,
    /// Vertical
    Y,
    /// Depth
    Z,
}

impl Axis3 {
    /// All axes in x, y, z order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

/// Signed unit axis used to grow or reduce a ground along one face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction3 {
    /// Axis of travel
    pub axis: Axis3,
    /// `true` for the positive direction
    pub positive: bool,
}

impl Direction3 {
    /// Create a signed axis direction
    pub const fn new(axis: Axis3, positive: bool) -> Self {
        Self { axis, positive }
    }

    /// Unit vector along the direction
    pub const fn unit(self) -> Vector3 {
        let sign = if self.positive { 1.0 } else { -1.0 };
        match self.axis {
            Axis3::X => Vector3::new(sign, 0.0, 0.0),
            Axis3::Y => Vector3::new(0.0, sign, 0.0),
            Axis3::Z => Vector3::new(0.0, 0.0, sign),
        }
    }

    /// The same axis, opposite sign
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.axis, !self.positive)
    }
}
