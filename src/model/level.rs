use serde::{Deserialize, Serialize};

use crate::model::vine::Vine;

/// A complete puzzle level: grid dimensions, the vines tiling it, and metadata
///
/// For generator output the union of all vine paths covers every one of
/// `width x height` cells exactly once. Externally supplied levels carry no
/// such guarantee and go through `fast_validate_level_coverage` first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Stable level identifier
    #[serde(default)]
    pub id: String,

    /// Human-readable name
    #[serde(default)]
    pub name: String,

    /// Difficulty tier name from the external catalog
    #[serde(default)]
    pub difficulty: String,

    /// Grid dimensions as `[width, height]`
    pub grid_size: [i32; 2],

    /// Vines partitioning the grid
    pub vines: Vec<Vine>,

    /// Move budget shown to the player
    #[serde(default)]
    pub max_moves: u32,

    /// Minimum moves any solution needs
    #[serde(default)]
    pub min_moves: u32,

    /// Extra moves granted beyond the minimum
    #[serde(default)]
    pub grace: u32,

    /// Difficulty proxy derived from the blocking analysis
    #[serde(default)]
    pub complexity: f64,

    /// Optional visual mask name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,

    /// Seed the generator was run with
    #[serde(default)]
    pub generation_seed: u64,

    /// Generation attempts consumed before acceptance
    #[serde(default)]
    pub generation_attempts: usize,

    /// Wall-clock generation time in milliseconds
    #[serde(default)]
    pub generation_elapsed_ms: u64,

    /// Blocking score of the accepted attempt
    #[serde(default)]
    pub generation_score: f64,
}

impl Level {
    /// Build a bare level around a vine set, for validation or solving
    pub fn from_vines(grid_size: [i32; 2], vines: Vec<Vine>) -> Self {
        Self {
            grid_size,
            vines,
            ..Self::default()
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> i32 {
        self.grid_size[0]
    }

    /// Grid height in cells
    pub const fn height(&self) -> i32 {
        self.grid_size[1]
    }

    /// Total cell count, zero for degenerate dimensions
    pub const fn cell_count(&self) -> usize {
        if self.grid_size[0] <= 0 || self.grid_size[1] <= 0 {
            0
        } else {
            (self.grid_size[0] * self.grid_size[1]) as usize
        }
    }
}
