//! Passive value types shared across the generator, validator, and solver
//!
//! Everything here is a plain data snapshot: points and directions, vines,
//! whole levels, and the difficulty/variety/tuning inputs consumed by the
//! tiler. No behavior beyond structural queries.

/// Difficulty constraints, variety hints, and generator tuning knobs
pub mod difficulty;
/// A complete level: grid dimensions, vines, and metadata
pub mod level;
/// Grid coordinates and the four exit directions
pub mod point;
/// One contiguous sliding path of cells
pub mod vine;
