use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer grid coordinate
///
/// `x` runs left to right, `y` top to bottom. Plain value with no invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Point {
    /// Create a point from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta vector
    #[must_use]
    pub const fn offset(self, delta: [i32; 2]) -> Self {
        Self {
            x: self.x + delta[0],
            y: self.y + delta[1],
        }
    }

    /// Test membership in `[0, width) x [0, height)`
    pub const fn in_bounds(self, grid_size: [i32; 2]) -> bool {
        self.x >= 0 && self.x < grid_size[0] && self.y >= 0 && self.y < grid_size[1]
    }

    /// Packed index for bitset-backed cell sets
    ///
    /// Only meaningful for in-bounds points; callers check `in_bounds` first.
    pub const fn cell_index(self, grid_size: [i32; 2]) -> usize {
        (self.x * grid_size[1] + self.y) as usize
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction a vine head slides to exit the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward decreasing y
    Up,
    /// Toward increasing y
    Down,
    /// Toward decreasing x
    Left,
    /// Toward increasing x
    Right,
}

impl Direction {
    /// All four directions in a fixed scan order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit step the head takes each slide
    pub const fn vector(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
        }
    }

    /// Unit step from the head back toward the neck
    pub const fn negated_vector(self) -> [i32; 2] {
        let v = self.vector();
        [-v[0], -v[1]]
    }

    /// Match a unit vector against the four canonical direction vectors
    pub fn from_vector(v: [i32; 2]) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.vector() == v)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{name}")
    }
}
