//! Procedural generation and verification of levels for a grid-based "clear the path" puzzle
//!
//! Each level is a width x height grid fully partitioned into non-overlapping
//! contiguous paths ("vines"); every vine exits the grid by sliding head-first
//! in a fixed direction. The generator only accepts levels proven clearable by
//! some order of vine removals.

#![forbid(unsafe_code)]

/// Structural validation and blocking analysis for finished vine sets
pub mod analysis;
/// Generator constants and tuning defaults
pub mod config;
/// Error types for generation and validation
pub mod error;
/// Constructive tiling: seed growth, grid partitioning, and the retry orchestrator
pub mod generator;
/// Passive value types: points, vines, levels, and difficulty profiles
pub mod model;
/// Solvability checks over level snapshots
pub mod solver;

pub use analysis::blocking::fast_score_blocking;
pub use analysis::validate::fast_validate_level_coverage;
pub use error::{GenerationError, Result};
pub use generator::orchestrate::{GenerationResult, generate_with_profile};
pub use generator::tiler::tile_grid_into_vines;
pub use model::{
    difficulty::{DifficultySpec, GeneratorConfig, LengthMix, RegionBias, VarietyProfile},
    level::Level,
    point::{Direction, Point},
    vine::Vine,
};
pub use solver::search::Solver;
