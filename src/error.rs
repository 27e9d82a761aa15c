//! Error types for level generation and validation

use std::fmt;

use crate::model::point::Point;

/// Main error type for generation and validation operations
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Grid dimensions must both be positive
    InvalidGridSize {
        /// Requested grid width
        width: i32,
        /// Requested grid height
        height: i32,
    },

    /// A vine was supplied with no path points
    EmptyVinePath {
        /// Identifier of the offending vine
        vine_id: String,
    },

    /// A path point falls outside the grid
    OutOfBounds {
        /// Identifier of the offending vine
        vine_id: String,
        /// The out-of-bounds point
        point: Point,
        /// Grid dimensions (width, height)
        grid_size: [i32; 2],
    },

    /// A point appears more than once in the same vine's path
    RepeatedPoint {
        /// Identifier of the offending vine
        vine_id: String,
        /// The repeated point
        point: Point,
    },

    /// Consecutive path points are not Manhattan-adjacent
    BrokenPath {
        /// Identifier of the offending vine
        vine_id: String,
        /// Earlier point of the broken pair
        from: Point,
        /// Later point of the broken pair
        to: Point,
    },

    /// The neck does not sit directly behind the head for the declared direction
    HeadDirectionMismatch {
        /// Identifier of the offending vine
        vine_id: String,
        /// Neck position the declared direction requires
        expected_neck: Point,
        /// Neck position actually present in the path
        actual_neck: Point,
    },

    /// Two vines claim the same cell
    CellOverlap {
        /// The doubly-claimed cell
        point: Point,
        /// First claimant
        first: String,
        /// Second claimant
        second: String,
    },

    /// A cell is claimed by no vine
    ///
    /// Reported with the running coverage count so partial tilings are
    /// easy to diagnose.
    CoverageGap {
        /// The unclaimed cell
        point: Point,
        /// Number of cells actually covered
        covered: usize,
        /// Number of cells the grid requires
        expected: usize,
    },

    /// The seed grower ran out of unoccupied neighbors mid-walk
    GrowerStuck {
        /// Path length reached before the walk stalled
        length: usize,
        /// Length the walk was asked to reach
        target: usize,
    },

    /// No empty cell remained for a fallback placement
    GridExhausted {
        /// Vines placed before exhaustion
        placed: usize,
        /// Total cells in the grid
        total_cells: usize,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { width, height } => {
                write!(f, "Grid dimensions must be positive, got {width}x{height}")
            }
            Self::EmptyVinePath { vine_id } => {
                write!(f, "Vine '{vine_id}' has an empty path")
            }
            Self::OutOfBounds {
                vine_id,
                point,
                grid_size,
            } => {
                write!(
                    f,
                    "Vine '{vine_id}' point {point} is outside the {}x{} grid",
                    grid_size[0], grid_size[1]
                )
            }
            Self::RepeatedPoint { vine_id, point } => {
                write!(f, "Vine '{vine_id}' visits {point} twice")
            }
            Self::BrokenPath { vine_id, from, to } => {
                write!(
                    f,
                    "Vine '{vine_id}' path jumps from {from} to {to} (not adjacent)"
                )
            }
            Self::HeadDirectionMismatch {
                vine_id,
                expected_neck,
                actual_neck,
            } => {
                write!(
                    f,
                    "Vine '{vine_id}' head direction expects neck at {expected_neck}, found {actual_neck}"
                )
            }
            Self::CellOverlap {
                point,
                first,
                second,
            } => {
                write!(
                    f,
                    "Cell {point} is claimed by both '{first}' and '{second}'"
                )
            }
            Self::CoverageGap {
                point,
                covered,
                expected,
            } => {
                write!(
                    f,
                    "Cell {point} is unclaimed ({covered} of {expected} cells covered)"
                )
            }
            Self::GrowerStuck { length, target } => {
                write!(f, "Vine growth stuck at length {length}, target {target}")
            }
            Self::GridExhausted {
                placed,
                total_cells,
            } => {
                write!(
                    f,
                    "Grid exhausted after {placed} vines with no empty cell left of {total_cells}"
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;
