//! Structural invariant checks over a candidate level
//!
//! Invoked both as a post-condition after tiling and as a standalone check
//! for externally supplied levels. Deterministic, no side effects, fails
//! fast with an error naming the offending vine or cell.

use ndarray::Array2;

use crate::error::{GenerationError, Result};
use crate::model::level::Level;
use crate::model::point::Point;
use crate::model::vine::Vine;

/// Check a level's structural invariants
///
/// In order: positive grid dimensions, non-empty vine paths, per-vine
/// bounds / no-repeat / Manhattan-adjacency, head-direction consistency,
/// and exact single coverage of every grid cell.
///
/// # Errors
///
/// Returns the first violated invariant as a `GenerationError` identifying
/// the offending vine or cell.
pub fn fast_validate_level_coverage(level: &Level) -> Result<()> {
    let width = level.width();
    let height = level.height();

    if width <= 0 || height <= 0 {
        return Err(GenerationError::InvalidGridSize { width, height });
    }

    for vine in &level.vines {
        if vine.is_empty() {
            return Err(GenerationError::EmptyVinePath {
                vine_id: vine.id.clone(),
            });
        }
        check_path_shape(vine, level.grid_size)?;
        check_head_direction(vine)?;
    }

    check_coverage(level)
}

/// Bounds, self-intersection, and adjacency checks for one vine's path
fn check_path_shape(vine: &Vine, grid_size: [i32; 2]) -> Result<()> {
    // Per-vine repeat tracking; cross-vine overlap is handled by coverage
    let mut seen = Array2::<bool>::from_elem((grid_size[1] as usize, grid_size[0] as usize), false);
    let mut previous = None;

    for &point in &vine.ordered_path {
        if !point.in_bounds(grid_size) {
            return Err(GenerationError::OutOfBounds {
                vine_id: vine.id.clone(),
                point,
                grid_size,
            });
        }

        let cell = [point.y as usize, point.x as usize];
        if seen.get(cell).copied().unwrap_or(false) {
            return Err(GenerationError::RepeatedPoint {
                vine_id: vine.id.clone(),
                point,
            });
        }
        if let Some(flag) = seen.get_mut(cell) {
            *flag = true;
        }

        if let Some(prev) = previous {
            if !manhattan_adjacent(prev, point) {
                return Err(GenerationError::BrokenPath {
                    vine_id: vine.id.clone(),
                    from: prev,
                    to: point,
                });
            }
        }
        previous = Some(point);
    }

    Ok(())
}

/// For paths of two or more points the neck must sit directly behind the head
fn check_head_direction(vine: &Vine) -> Result<()> {
    let (Some(head), Some(neck)) = (vine.head(), vine.neck()) else {
        return Ok(());
    };

    let expected_neck = head.offset(vine.head_direction.negated_vector());
    if neck != expected_neck {
        return Err(GenerationError::HeadDirectionMismatch {
            vine_id: vine.id.clone(),
            expected_neck,
            actual_neck: neck,
        });
    }

    Ok(())
}

/// Every cell claimed by exactly one vine, no gaps, no overlaps
fn check_coverage(level: &Level) -> Result<()> {
    let rows = level.height() as usize;
    let cols = level.width() as usize;

    // 0 = unclaimed, n = claimed by vine n-1
    let mut owner = Array2::<u32>::zeros((rows, cols));
    let mut covered = 0usize;

    for (index, vine) in level.vines.iter().enumerate() {
        for &point in &vine.ordered_path {
            let cell = [point.y as usize, point.x as usize];
            let claimant = owner.get(cell).copied().unwrap_or(0);
            if claimant > 0 {
                let first = level
                    .vines
                    .get(claimant as usize - 1)
                    .map_or_else(String::new, |v| v.id.clone());
                return Err(GenerationError::CellOverlap {
                    point,
                    first,
                    second: vine.id.clone(),
                });
            }
            if let Some(slot) = owner.get_mut(cell) {
                *slot = index as u32 + 1;
                covered += 1;
            }
        }
    }

    let expected = level.cell_count();
    if covered < expected {
        for ((row, col), claimant) in owner.indexed_iter() {
            if *claimant == 0 {
                return Err(GenerationError::CoverageGap {
                    point: Point::new(col as i32, row as i32),
                    covered,
                    expected,
                });
            }
        }
    }

    Ok(())
}

const fn manhattan_adjacent(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() + (a.y - b.y).abs() == 1
}
