//! Randomized vine growth from a single seed cell
//!
//! A greedy, non-backtracking constructive walk: once stuck it rolls back
//! its partial claims and reports failure, leaving the caller to retry from
//! a different seed or fall back. Best-effort by contract, not a guarantee
//! of length-target fidelity.

use ndarray::Array2;
use rand::rngs::StdRng;

use crate::error::{GenerationError, Result};
use crate::generator::selection::weighted_choice;
use crate::model::point::{Direction, Point};
use crate::model::vine::Vine;

/// Grow one vine from a seed to a target length over the shared claim map
///
/// Marks cells in `claimed` with `claim` as the walk advances. The neighbor
/// choice is weighted by `turn_proportion`: 0.5 is uniform, lower values
/// favor continuing straight, higher values favor turning. On success the
/// head direction is derived from the negated first step; the id is left
/// empty for the tiler to assign.
///
/// # Errors
///
/// Returns `GenerationError::GrowerStuck` when the walk has no unoccupied
/// in-bounds neighbor before reaching the target length. All cells claimed
/// by the partial walk are released before returning.
pub fn grow_vine(
    seed: Point,
    claimed: &mut Array2<u32>,
    claim: u32,
    grid_size: [i32; 2],
    target_length: usize,
    turn_proportion: f64,
    rng: &mut StdRng,
) -> Result<Vine> {
    let mut path = vec![seed];
    mark(claimed, seed, claim);

    while path.len() < target_length {
        let head = path.last().copied().unwrap_or(seed);
        let last_step = previous_step(&path);

        let candidates: Vec<Point> = Direction::ALL
            .into_iter()
            .map(|dir| head.offset(dir.vector()))
            .filter(|next| next.in_bounds(grid_size) && !is_claimed(claimed, *next))
            .collect();

        if candidates.is_empty() {
            for &point in &path {
                mark(claimed, point, 0);
            }
            return Err(GenerationError::GrowerStuck {
                length: path.len(),
                target: target_length,
            });
        }

        let weights: Vec<f64> = candidates
            .iter()
            .map(|next| step_weight(head, *next, last_step, turn_proportion))
            .collect();

        let next = candidates
            .get(weighted_choice(rng, &weights))
            .copied()
            .unwrap_or(seed);
        mark(claimed, next, claim);
        path.push(next);
    }

    let head_direction = derive_direction(&path, grid_size);
    Ok(Vine::new(String::new(), head_direction, path))
}

/// Delta of the most recent step, if the walk has taken one
fn previous_step(path: &[Point]) -> Option<[i32; 2]> {
    let len = path.len();
    if len < 2 {
        return None;
    }
    let prev = path.get(len - 2)?;
    let head = path.get(len - 1)?;
    Some([head.x - prev.x, head.y - prev.y])
}

fn step_weight(head: Point, next: Point, last_step: Option<[i32; 2]>, turn: f64) -> f64 {
    let Some(last) = last_step else {
        return 1.0;
    };
    let step = [next.x - head.x, next.y - head.y];
    if step == last {
        2.0 * (1.0 - turn)
    } else {
        2.0 * turn
    }
}

/// Head direction from the negated first step, or nearest-edge for a single cell
fn derive_direction(path: &[Point], grid_size: [i32; 2]) -> Direction {
    if let (Some(head), Some(neck)) = (path.first(), path.get(1)) {
        let vector = [head.x - neck.x, head.y - neck.y];
        return Direction::from_vector(vector).unwrap_or(Direction::Up);
    }

    let point = path.first().copied().unwrap_or(Point::new(0, 0));
    Direction::ALL
        .into_iter()
        .min_by_key(|dir| edge_distance(point, *dir, grid_size))
        .unwrap_or(Direction::Up)
}

/// Cells between a point and the grid border in the given direction
const fn edge_distance(point: Point, direction: Direction, grid_size: [i32; 2]) -> i32 {
    match direction {
        Direction::Up => point.y,
        Direction::Down => grid_size[1] - 1 - point.y,
        Direction::Left => point.x,
        Direction::Right => grid_size[0] - 1 - point.x,
    }
}

fn is_claimed(claimed: &Array2<u32>, point: Point) -> bool {
    claimed
        .get([point.y as usize, point.x as usize])
        .copied()
        .unwrap_or(u32::MAX)
        != 0
}

fn mark(claimed: &mut Array2<u32>, point: Point, value: u32) {
    if let Some(slot) = claimed.get_mut([point.y as usize, point.x as usize]) {
        *slot = value;
    }
}
