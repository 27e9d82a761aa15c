//! Full-grid partitioning into vines
//!
//! Orchestrates repeated seed-grower calls until every cell is claimed:
//! per-vine seed retries, a bounded local repair pass around the last
//! failure, a single-cell fallback, and a final sweep that turns leftover
//! fragmentation into single-cell filler vines. The assembled set is run
//! through the structural validator before being returned.

use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

use crate::analysis::validate::fast_validate_level_coverage;
use crate::config::VINE_PALETTE;
use crate::error::{GenerationError, Result};
use crate::generator::grower::grow_vine;
use crate::generator::selection::{collect_empty_cells, pick_seed_cell};
use crate::model::difficulty::{DifficultySpec, GeneratorConfig, VarietyProfile};
use crate::model::level::Level;
use crate::model::vine::Vine;

/// Partition a grid into vines matching a difficulty's count and length targets
///
/// Per-vine target lengths are an exact even division of the cell count, so
/// a fully successful pass tiles the grid with no filler; growth failures
/// degrade gracefully through local repair, single-cell fallback, and the
/// final filler sweep without ever breaking coverage.
///
/// # Errors
///
/// Returns `GenerationError::InvalidGridSize` for non-positive dimensions,
/// `GenerationError::GridExhausted` if a fallback placement finds no empty
/// cell, and propagates any structural validator failure (defensive; the
/// construction should not produce one).
pub fn tile_grid_into_vines(
    grid_size: [i32; 2],
    spec: &DifficultySpec,
    profile: &VarietyProfile,
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> Result<Vec<Vine>> {
    let width = grid_size[0];
    let height = grid_size[1];
    if width <= 0 || height <= 0 {
        return Err(GenerationError::InvalidGridSize { width, height });
    }

    let total_cells = (width * height) as usize;
    let targets = vine_length_targets(total_cells, spec, profile);

    let mut claimed = Array2::<u32>::zeros((height as usize, width as usize));
    let mut vines: Vec<Vine> = Vec::with_capacity(targets.len());

    for target in targets {
        let claim = vines.len() as u32 + 1;
        let vine = place_one_vine(
            &mut claimed,
            claim,
            grid_size,
            target,
            profile,
            config,
            rng,
            total_cells,
            vines.len(),
        )?;
        vines.push(vine);
    }

    // Fragmentation left by greedy growth becomes single-cell fillers
    for point in collect_empty_cells(&claimed) {
        let claim = vines.len() as u32 + 1;
        let vine = grow_vine(
            point,
            &mut claimed,
            claim,
            grid_size,
            1,
            profile.turn_proportion,
            rng,
        )?;
        vines.push(vine);
    }

    for (index, vine) in vines.iter_mut().enumerate() {
        vine.id = format!("vine_{index}");
    }
    assign_colors(&mut vines, spec, rng);

    let level = Level::from_vines(grid_size, vines);
    fast_validate_level_coverage(&level)?;
    Ok(level.vines)
}

/// Per-vine target lengths: exact even division of the grid's cells
///
/// The average length is the difficulty range midpoint, shifted inside the
/// range by the variety profile's length mix. The remainder is spread one
/// extra cell at a time over the first vines, so the targets always sum to
/// the cell count exactly.
fn vine_length_targets(
    total_cells: usize,
    spec: &DifficultySpec,
    profile: &VarietyProfile,
) -> Vec<usize> {
    let low = *spec.vine_length.start();
    let high = *spec.vine_length.end();
    let span = high.saturating_sub(low) as f64;
    let average = (low as f64 + span * profile.length_mix.range_position()).round() as usize;
    let average = average.max(1);

    let vine_count = (total_cells / average)
        .clamp(*spec.vine_count.start(), *spec.vine_count.end())
        .min(total_cells)
        .max(1);

    let floor = total_cells / vine_count;
    let remainder = total_cells - floor * vine_count;

    (0..vine_count)
        .map(|index| if index < remainder { floor + 1 } else { floor })
        .collect()
}

/// Seed retries, then bounded local repair, then single-cell fallback
fn place_one_vine(
    claimed: &mut Array2<u32>,
    claim: u32,
    grid_size: [i32; 2],
    target: usize,
    profile: &VarietyProfile,
    config: &GeneratorConfig,
    rng: &mut StdRng,
    total_cells: usize,
    placed: usize,
) -> Result<Vine> {
    let mut last_seed = None;

    for _ in 0..config.max_seed_retries {
        let empties = collect_empty_cells(claimed);
        let Some(seed) = pick_seed_cell(&empties, profile.region_bias, grid_size, rng) else {
            break;
        };
        last_seed = Some(seed);

        match grow_vine(
            seed,
            claimed,
            claim,
            grid_size,
            target,
            profile.turn_proportion,
            rng,
        ) {
            Ok(vine) => return Ok(vine),
            Err(GenerationError::GrowerStuck { .. }) => {}
            Err(other) => return Err(other),
        }
    }

    // Shorter walks near the failure site often fit where full-length ones
    // could not
    if let Some(failed_seed) = last_seed {
        let reduced_target = (target / 2).max(1);
        for _ in 0..config.repair_retries {
            let nearby: Vec<_> = collect_empty_cells(claimed)
                .into_iter()
                .filter(|point| {
                    (point.x - failed_seed.x).abs() <= config.repair_radius
                        && (point.y - failed_seed.y).abs() <= config.repair_radius
                })
                .collect();
            let Some(seed) = pick_seed_cell(&nearby, profile.region_bias, grid_size, rng) else {
                break;
            };

            match grow_vine(
                seed,
                claimed,
                claim,
                grid_size,
                reduced_target,
                profile.turn_proportion,
                rng,
            ) {
                Ok(vine) => return Ok(vine),
                Err(GenerationError::GrowerStuck { .. }) => {}
                Err(other) => return Err(other),
            }
        }
    }

    let fallback = collect_empty_cells(claimed)
        .first()
        .copied()
        .ok_or(GenerationError::GridExhausted {
            placed,
            total_cells,
        })?;
    grow_vine(
        fallback,
        claimed,
        claim,
        grid_size,
        1,
        profile.turn_proportion,
        rng,
    )
}

/// Round-robin colors from a palette sized by the difficulty's color range
fn assign_colors(vines: &mut [Vine], spec: &DifficultySpec, rng: &mut StdRng) {
    let low = *spec.color_count.start();
    let high = *spec.color_count.end();
    let drawn = if low >= high {
        low
    } else {
        rng.random_range(low..=high)
    };
    let palette_size = drawn.clamp(1, VINE_PALETTE.len());

    for (index, vine) in vines.iter_mut().enumerate() {
        vine.vine_color = VINE_PALETTE
            .get(index % palette_size)
            .map(|color| (*color).to_owned());
    }
}
