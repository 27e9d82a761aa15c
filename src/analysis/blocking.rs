//! Exit-path blocking graph, cycle detection, and scoring
//!
//! For a finished vine set this computes which vines obstruct which others'
//! straight-line exit paths, the maximum blocking depth, and a scalar
//! desirability score. A cyclic blocking graph can never be cleared by any
//! removal order and is forced to a strongly negative sentinel score.

use ndarray::Array2;

use crate::config::{BLOCKING_DEPTH_WEIGHT, BLOCKING_EDGE_WEIGHT, CYCLE_SENTINEL_SCORE};
use crate::model::vine::Vine;

const WHITE: u8 = 0;
const GRAY: u8 = 1;
const BLACK: u8 = 2;

/// Score a vine set's blocking structure
///
/// Populates each vine's `blocks` list with the ids of vines occupying
/// cells along its exit path, then returns `(score, max_depth)` where
/// `max_depth` is the longest `blocks` list. A cycle in the blocking graph
/// forces the score to the sentinel; otherwise the score grows with the
/// number of blocking edges and the depth.
pub fn fast_score_blocking(vines: &mut [Vine], grid_size: [i32; 2]) -> (f64, usize) {
    let adjacency = build_blocking_graph(vines, grid_size);

    let max_depth = adjacency.iter().map(Vec::len).max().unwrap_or(0);
    let edge_count: usize = adjacency.iter().map(Vec::len).sum();

    if has_cycle(&adjacency) {
        return (CYCLE_SENTINEL_SCORE, max_depth);
    }

    let score = BLOCKING_EDGE_WEIGHT
        .mul_add(edge_count as f64, BLOCKING_DEPTH_WEIGHT * max_depth as f64);
    (score, max_depth)
}

/// Build the directed blocks graph and record it on the vines
///
/// Edge `i -> j` means vine `j` occupies a cell on vine `i`'s straight-line
/// exit path from its head to the grid edge.
fn build_blocking_graph(vines: &mut [Vine], grid_size: [i32; 2]) -> Vec<Vec<usize>> {
    let rows = grid_size[1].max(0) as usize;
    let cols = grid_size[0].max(0) as usize;

    // 0 = empty, n = occupied by vine n-1
    let mut owner = Array2::<u32>::zeros((rows, cols));
    for (index, vine) in vines.iter().enumerate() {
        for &point in &vine.ordered_path {
            if point.in_bounds(grid_size) {
                if let Some(slot) = owner.get_mut([point.y as usize, point.x as usize]) {
                    *slot = index as u32 + 1;
                }
            }
        }
    }

    let mut adjacency = vec![Vec::new(); vines.len()];

    for index in 0..vines.len() {
        let Some(head) = vines.get(index).and_then(Vine::head) else {
            continue;
        };
        let step = vines
            .get(index)
            .map_or([0, 0], |vine| vine.head_direction.vector());

        let mut blockers = Vec::new();
        let mut position = head.offset(step);
        while position.in_bounds(grid_size) {
            let claimant = owner
                .get([position.y as usize, position.x as usize])
                .copied()
                .unwrap_or(0);
            if claimant > 0 {
                let other = claimant as usize - 1;
                if other != index && !blockers.contains(&other) {
                    blockers.push(other);
                }
            }
            position = position.offset(step);
        }

        let ids: Vec<String> = blockers
            .iter()
            .filter_map(|&other| vines.get(other).map(|vine| vine.id.clone()))
            .collect();
        if let Some(vine) = vines.get_mut(index) {
            vine.blocks = ids;
        }
        if let Some(slot) = adjacency.get_mut(index) {
            *slot = blockers;
        }
    }

    adjacency
}

/// Detect a directed cycle with iterative white/gray/black DFS
///
/// Explicit `(node, next-edge)` stack instead of recursion so large vine
/// counts cannot overflow the call stack.
fn has_cycle(adjacency: &[Vec<usize>]) -> bool {
    let mut color = vec![WHITE; adjacency.len()];

    for start in 0..adjacency.len() {
        if color.get(start).copied().unwrap_or(BLACK) != WHITE {
            continue;
        }

        let mut stack = vec![(start, 0usize)];
        if let Some(c) = color.get_mut(start) {
            *c = GRAY;
        }

        while let Some(frame) = stack.last_mut() {
            let (node, edge) = *frame;
            frame.1 += 1;

            let next = adjacency.get(node).and_then(|edges| edges.get(edge));
            match next {
                Some(&neighbor) => match color.get(neighbor).copied().unwrap_or(BLACK) {
                    GRAY => return true,
                    WHITE => {
                        if let Some(c) = color.get_mut(neighbor) {
                            *c = GRAY;
                        }
                        stack.push((neighbor, 0));
                    }
                    _ => {}
                },
                None => {
                    if let Some(c) = color.get_mut(node) {
                        *c = BLACK;
                    }
                    stack.pop();
                }
            }
        }
    }

    false
}
