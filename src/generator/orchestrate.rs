//! The bounded generate-validate-score-gate retry loop
//!
//! Each attempt tiles a fresh grid with its own derived RNG, validates and
//! scores the result, and gates acceptance on the greedy solver (and, in
//! strict mode, the exhaustive BFS). A rejected attempt is discarded
//! entirely; the next starts from an empty grid with a new RNG draw.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::analysis::blocking::fast_score_blocking;
use crate::analysis::validate::fast_validate_level_coverage;
use crate::config::{ATTEMPT_SEED_STRIDE, MAX_GENERATION_ATTEMPTS};
use crate::generator::tiler::tile_grid_into_vines;
use crate::model::difficulty::{DifficultySpec, GeneratorConfig, VarietyProfile};
use crate::model::level::Level;
use crate::model::vine::Vine;
use crate::solver::search::Solver;

/// Outcome of one `generate_with_profile` call, accepted or not
///
/// Exhausting every attempt is not an error: callers detect total failure
/// by an empty vine set or an unset `greedy_solvable` flag.
#[derive(Clone, Debug)]
pub struct GenerationResult {
    /// Vines of the final attempt, blocking lists populated
    pub vines: Vec<Vine>,

    /// Blocking score of the final attempt
    pub score: f64,

    /// Longest blocks list across the final attempt's vines
    pub max_blocking_depth: usize,

    /// Whether the greedy heuristic cleared the final attempt
    pub greedy_solvable: bool,

    /// Whether the exhaustive search cleared the final attempt
    ///
    /// Only meaningful in strict mode; stays `false` when the BFS gate
    /// never ran.
    pub bfs_solvable: bool,

    /// Attempts consumed, counting the returned one
    pub attempts: usize,

    /// Derived seed of the returned attempt, sufficient to re-tile it
    pub seed: u64,

    /// Wall-clock time spent across all attempts so far
    pub elapsed: Duration,
}

impl GenerationResult {
    /// Assemble a persistable level from an accepted result
    ///
    /// Move counts derive from the vine count plus the difficulty's grace;
    /// the reproducibility metadata block is filled from this result.
    pub fn into_level(
        self,
        id: String,
        name: String,
        difficulty: String,
        grid_size: [i32; 2],
        spec: &DifficultySpec,
    ) -> Level {
        let min_moves = self.vines.len() as u32;
        Level {
            id,
            name,
            difficulty,
            grid_size,
            min_moves,
            max_moves: min_moves + spec.default_grace,
            grace: spec.default_grace,
            complexity: self.max_blocking_depth as f64,
            mask: None,
            generation_seed: self.seed,
            generation_attempts: self.attempts,
            generation_elapsed_ms: self.elapsed.as_millis() as u64,
            generation_score: self.score,
            vines: self.vines,
        }
    }
}

/// Generate a level for a difficulty profile, retrying until solvable
///
/// Runs at most 8 attempts. Each derives a fresh `StdRng` from the
/// caller's RNG combined with the attempt index, or from
/// `seed + attempt * 1000` when no RNG is supplied, then tiles, validates,
/// scores, and gates on the greedy solver (plus BFS in strict mode). The
/// first accepted attempt is returned immediately; if all are rejected the
/// last attempt's result is returned as-is. For identical inputs and an
/// identical external RNG stream (or none) the outcome is reproducible.
pub fn generate_with_profile(
    grid_size: [i32; 2],
    spec: &DifficultySpec,
    profile: &VarietyProfile,
    config: &GeneratorConfig,
    seed: u64,
    strict_mode: bool,
    mut rng: Option<&mut StdRng>,
) -> GenerationResult {
    let start = Instant::now();
    let mut last = None;

    for attempt in 0..MAX_GENERATION_ATTEMPTS {
        let attempt_seed = match rng.as_deref_mut() {
            Some(external) => external.random::<u64>() ^ attempt as u64,
            None => seed.wrapping_add(attempt as u64 * ATTEMPT_SEED_STRIDE),
        };
        let mut attempt_rng = StdRng::seed_from_u64(attempt_seed);

        let tiled = tile_grid_into_vines(grid_size, spec, profile, config, &mut attempt_rng);
        let Ok(vines) = tiled else {
            last = Some(failed_attempt(attempt, attempt_seed, start));
            continue;
        };

        // Safety net; the tiler already validated its own output
        let mut level = Level::from_vines(grid_size, vines);
        if fast_validate_level_coverage(&level).is_err() {
            last = Some(failed_attempt(attempt, attempt_seed, start));
            continue;
        }

        let (score, max_blocking_depth) = fast_score_blocking(&mut level.vines, grid_size);

        let solver = Solver::new(&level);
        let greedy_solvable = solver.is_solvable_greedy();
        let bfs_solvable = strict_mode && greedy_solvable && solver.is_solvable_bfs();

        let result = GenerationResult {
            vines: level.vines,
            score,
            max_blocking_depth,
            greedy_solvable,
            bfs_solvable,
            attempts: attempt + 1,
            seed: attempt_seed,
            elapsed: start.elapsed(),
        };

        if greedy_solvable && (!strict_mode || bfs_solvable) {
            return result;
        }
        last = Some(result);
    }

    last.unwrap_or_else(|| failed_attempt(MAX_GENERATION_ATTEMPTS - 1, seed, start))
}

/// Empty result for an attempt whose tiling or validation failed
fn failed_attempt(attempt: usize, attempt_seed: u64, start: Instant) -> GenerationResult {
    GenerationResult {
        vines: Vec::new(),
        score: 0.0,
        max_blocking_depth: 0,
        greedy_solvable: false,
        bfs_solvable: false,
        attempts: attempt + 1,
        seed: attempt_seed,
        elapsed: start.elapsed(),
    }
}
