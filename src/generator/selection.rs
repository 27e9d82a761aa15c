//! Weighted random choice and seed cell selection

use ndarray::Array2;
use rand::Rng;

use crate::model::difficulty::RegionBias;
use crate::model::point::Point;

/// Generic weighted random selection
///
/// Draws a point on the cumulative distribution and returns the index of
/// the weight interval it lands in. A non-positive total selects index 0.
pub fn weighted_choice(rng: &mut impl Rng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut remaining = rng.random::<f64>() * total;
    let mut selected = 0;
    for (index, &weight) in weights.iter().enumerate() {
        selected = index;
        remaining -= weight;
        if remaining <= 0.0 {
            break;
        }
    }
    selected
}

/// Collect unclaimed cells in row-major scan order
pub fn collect_empty_cells(claimed: &Array2<u32>) -> Vec<Point> {
    claimed
        .indexed_iter()
        .filter(|&(_, &claimant)| claimant == 0)
        .map(|((row, col), _)| Point::new(col as i32, row as i32))
        .collect()
}

/// Pick a seed cell from the empties, weighted by the region bias
///
/// `Any` is uniform; `Edges` and `Center` weight cells by their distance to
/// the nearest grid border, inverted for `Edges`.
pub fn pick_seed_cell(
    empties: &[Point],
    bias: RegionBias,
    grid_size: [i32; 2],
    rng: &mut impl Rng,
) -> Option<Point> {
    if empties.is_empty() {
        return None;
    }

    let max_edge_distance = ((grid_size[0].min(grid_size[1]) - 1) / 2).max(0);
    let weights: Vec<f64> = empties
        .iter()
        .map(|point| {
            let edge_distance = point
                .x
                .min(point.y)
                .min(grid_size[0] - 1 - point.x)
                .min(grid_size[1] - 1 - point.y);
            match bias {
                RegionBias::Any => 1.0,
                RegionBias::Edges => (max_edge_distance - edge_distance + 1) as f64,
                RegionBias::Center => (edge_distance + 1) as f64,
            }
        })
        .collect();

    empties.get(weighted_choice(rng, &weights)).copied()
}
