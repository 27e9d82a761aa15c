//! Structural validation and blocking analysis for finished vine sets

/// Exit-path blocking graph, cycle detection, and scoring
pub mod blocking;
/// Structural invariant checks over a candidate level
pub mod validate;
