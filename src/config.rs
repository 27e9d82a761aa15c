//! Generator constants and tuning defaults

/// Maximum generation attempts per `generate_with_profile` call
pub const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Seed spacing between attempts when no external RNG is supplied
pub const ATTEMPT_SEED_STRIDE: u64 = 1000;

/// Score assigned to any configuration whose blocking graph contains a cycle
pub const CYCLE_SENTINEL_SCORE: f64 = -1_000_000.0;

/// Score weight per blocking edge in an acyclic configuration
pub const BLOCKING_EDGE_WEIGHT: f64 = 10.0;

/// Score weight per unit of maximum blocking depth
pub const BLOCKING_DEPTH_WEIGHT: f64 = 25.0;

/// Scan-round multiplier for the greedy solver's safety cap
pub const GREEDY_ROUND_FACTOR: usize = 2;

/// Extra slide steps beyond grid diagonal plus vine length
pub const SLIDE_STEP_MARGIN: usize = 10;

// Defaults for GeneratorConfig
/// Random seed attempts per vine before repair and fallback
pub const DEFAULT_MAX_SEED_RETRIES: usize = 12;

/// Chebyshev radius around a failed seed searched during local repair
pub const DEFAULT_REPAIR_RADIUS: i32 = 2;

/// Reduced-length growth attempts during local repair
pub const DEFAULT_REPAIR_RETRIES: usize = 4;

/// Colors assigned round-robin to finished vines
pub const VINE_PALETTE: [&str; 8] = [
    "green", "red", "blue", "yellow", "purple", "orange", "teal", "pink",
];
