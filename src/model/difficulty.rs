use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_SEED_RETRIES, DEFAULT_REPAIR_RADIUS, DEFAULT_REPAIR_RETRIES};

/// Per-tier generation constraints from the external difficulty catalog
///
/// Immutable lookup data; the tiler reads the count and length ranges, the
/// orchestrator reads the color range and grace when assembling a level.
/// `max_blocking_depth` and `min_occupancy` are advisory values consumed by
/// callers rather than enforced here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultySpec {
    /// Acceptable number of vines in a level
    pub vine_count: RangeInclusive<usize>,

    /// Acceptable average vine length in cells
    pub vine_length: RangeInclusive<usize>,

    /// Highest blocking depth the tier tolerates
    pub max_blocking_depth: usize,

    /// Number of distinct vine colors to use
    pub color_count: RangeInclusive<usize>,

    /// Minimum fraction of the grid that must be vine-covered
    pub min_occupancy: f64,

    /// Default grace moves granted beyond the minimum
    pub default_grace: u32,
}

/// Relative weighting over short, medium, and long vine lengths
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LengthMix {
    /// Weight of lengths near the bottom of the difficulty range
    pub short: f64,
    /// Weight of mid-range lengths
    pub medium: f64,
    /// Weight of lengths near the top of the difficulty range
    pub long: f64,
}

impl LengthMix {
    /// Position in `[0, 1]` of the weighted mix inside the length range
    ///
    /// 0 pins the average to the range minimum, 1 to the maximum. An
    /// all-zero mix falls back to the midpoint.
    pub fn range_position(&self) -> f64 {
        let total = self.short + self.medium + self.long;
        if total <= 0.0 {
            return 0.5;
        }
        self.long.mul_add(1.0, self.medium * 0.5) / total
    }
}

impl Default for LengthMix {
    fn default() -> Self {
        Self {
            short: 1.0,
            medium: 1.0,
            long: 1.0,
        }
    }
}

/// Region the tiler prefers when picking seed cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionBias {
    /// No preference, uniform over empty cells
    #[default]
    Any,
    /// Prefer cells near the grid border
    Edges,
    /// Prefer cells near the grid center
    Center,
}

/// Soft shaping hints consumed by the grid tiler
///
/// These bias vine shape rather than strictly enforcing it; the hard
/// constraints stay with `DifficultySpec`. `direction_balance` is carried
/// for callers but not yet consulted by the constructive walk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VarietyProfile {
    /// Length distribution the tiling should lean toward
    pub length_mix: LengthMix,

    /// Preferred proportion of turning steps in `[0, 1]`, 0.5 is uniform
    pub turn_proportion: f64,

    /// Seed placement preference
    pub region_bias: RegionBias,

    /// Target evenness of head directions in `[0, 1]`
    pub direction_balance: f64,
}

impl Default for VarietyProfile {
    fn default() -> Self {
        Self {
            length_mix: LengthMix::default(),
            turn_proportion: 0.5,
            region_bias: RegionBias::Any,
            direction_balance: 0.5,
        }
    }
}

/// Tuning knobs for the constructive tiler
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Random seed attempts per vine before repair and fallback
    pub max_seed_retries: usize,

    /// Chebyshev radius around a failed seed searched during local repair
    pub repair_radius: i32,

    /// Reduced-length growth attempts during local repair
    pub repair_retries: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_seed_retries: DEFAULT_MAX_SEED_RETRIES,
            repair_radius: DEFAULT_REPAIR_RADIUS,
            repair_retries: DEFAULT_REPAIR_RETRIES,
        }
    }
}
