//! Solvability checks over level snapshots

/// Bitset-backed cell occupancy and remaining-vine sets
pub mod cellset;
/// Greedy and exhaustive breadth-first solvability search
pub mod search;
