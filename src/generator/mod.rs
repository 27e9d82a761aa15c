//! Constructive tiling: seed growth, grid partitioning, and the retry orchestrator
//!
//! The tiler partitions a grid into vines matching a difficulty profile by
//! growing randomized walks from seed cells, with bounded local repair and a
//! single-cell fallback. The orchestrator wraps tiling, validation, scoring,
//! and the solvability gates in a bounded retry loop.

/// Randomized vine growth from a single seed cell
pub mod grower;
/// The bounded generate-validate-score-gate retry loop
pub mod orchestrate;
/// Weighted random choice and seed cell selection
pub mod selection;
/// Full-grid partitioning into vines
pub mod tiler;
