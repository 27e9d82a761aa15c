use serde::{Deserialize, Serialize};

use crate::model::point::{Direction, Point};

/// One contiguous path of cells that exits the grid by sliding head-first
///
/// The path is ordered head-first: index 0 is the head, index 1 the neck,
/// the last point the tail. For paths of two or more points the neck sits
/// directly behind the head relative to `head_direction`:
/// `neck == head - vector(head_direction)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vine {
    /// Identifier, unique within a level
    pub id: String,

    /// Direction the head slides to exit the grid
    pub head_direction: Direction,

    /// Path cells ordered from head to tail
    pub ordered_path: Vec<Point>,

    /// Display color, assigned by the tiler from the difficulty palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vine_color: Option<String>,

    /// Ids of vines standing in this vine's straight-line exit path
    ///
    /// Populated by the blocking scorer; empty until it runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<String>,
}

impl Vine {
    /// Create a vine with no color and no blocking data
    pub const fn new(id: String, head_direction: Direction, ordered_path: Vec<Point>) -> Self {
        Self {
            id,
            head_direction,
            ordered_path,
            vine_color: None,
            blocks: Vec::new(),
        }
    }

    /// Leading path point, if any
    pub fn head(&self) -> Option<Point> {
        self.ordered_path.first().copied()
    }

    /// Second path point, if any
    pub fn neck(&self) -> Option<Point> {
        self.ordered_path.get(1).copied()
    }

    /// Trailing path point, if any
    pub fn tail(&self) -> Option<Point> {
        self.ordered_path.last().copied()
    }

    /// Number of cells the vine occupies
    pub fn len(&self) -> usize {
        self.ordered_path.len()
    }

    /// Test for a vine with no path points
    pub fn is_empty(&self) -> bool {
        self.ordered_path.is_empty()
    }
}
