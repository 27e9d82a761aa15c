//! Greedy and exhaustive breadth-first solvability search
//!
//! The greedy check commits to the first clearable vine each round and never
//! backtracks: false negatives are possible, false positives are not. The
//! BFS over vine-removal orderings is the authoritative answer, exponential
//! in the worst case but pruned in practice because every removal shrinks
//! the occupancy and with it the branching factor.

use std::collections::{HashSet, VecDeque};

use crate::config::{GREEDY_ROUND_FACTOR, SLIDE_STEP_MARGIN};
use crate::model::level::Level;
use crate::model::point::{Direction, Point};
use crate::solver::cellset::{CellSet, VineMask};

struct SolverVine {
    head: Option<Point>,
    direction: Direction,
    path_len: usize,
    cells: CellSet,
}

/// Stateless solvability checker over a level snapshot
///
/// Construction copies the vine geometry once; both checks can then run
/// repeatedly without touching the level.
pub struct Solver {
    grid_size: [i32; 2],
    vines: Vec<SolverVine>,
}

impl Solver {
    /// Snapshot a level for solvability analysis
    pub fn new(level: &Level) -> Self {
        let grid_size = level.grid_size;
        let vines = level
            .vines
            .iter()
            .map(|vine| {
                let mut cells = CellSet::new(grid_size);
                for &point in &vine.ordered_path {
                    cells.insert(point);
                }
                SolverVine {
                    head: vine.head(),
                    direction: vine.head_direction,
                    path_len: vine.len(),
                    cells,
                }
            })
            .collect();

        Self { grid_size, vines }
    }

    /// Test whether one vine can slide off the grid unobstructed
    ///
    /// Simulates the head one cell at a time in the vine's fixed direction
    /// against `occupied`, the cells of all vines still present. The vine's
    /// own cells never block it, since the whole vine translates together.
    /// Deterministic for identical vine and occupancy inputs.
    pub fn can_vine_clear(&self, index: usize, occupied: &CellSet) -> bool {
        let Some(vine) = self.vines.get(index) else {
            return false;
        };
        if vine.path_len < 2 {
            return false;
        }
        let Some(head) = vine.head else {
            return false;
        };

        let step = vine.direction.vector();
        // Grid diagonal plus vine length bounds any legitimate slide
        let budget = (self.grid_size[0].max(0) + self.grid_size[1].max(0)) as usize
            + vine.path_len
            + SLIDE_STEP_MARGIN;

        let mut position = head;
        for _ in 0..budget {
            let next = position.offset(step);
            if !next.in_bounds(self.grid_size) {
                return true;
            }
            if occupied.contains(next) && !vine.cells.contains(next) {
                return false;
            }
            position = next;
        }

        false
    }

    /// Fast heuristic solvability check
    ///
    /// Each round removes the first clearable vine and rescans. Sound but
    /// incomplete: a `true` is always correct, a `false` may miss orderings
    /// the exhaustive search would find. Capped at `2 x vine count` rounds.
    pub fn is_solvable_greedy(&self) -> bool {
        let count = self.vines.len();
        let mut present = VineMask::full(count);
        let max_rounds = GREEDY_ROUND_FACTOR * count;

        for _ in 0..max_rounds {
            if present.is_empty() {
                break;
            }

            let occupied = self.occupancy_for(&present);
            let cleared = present
                .iter_present()
                .find(|&index| self.can_vine_clear(index, &occupied));

            match cleared {
                Some(index) => present.remove(index),
                None => return false,
            }
        }

        present.is_empty()
    }

    /// Exhaustive solvability check over vine-removal orderings
    ///
    /// Breadth-first search from the full vine set toward the empty set,
    /// with visited states keyed by the remaining-vine bitmask.
    pub fn is_solvable_bfs(&self) -> bool {
        let count = self.vines.len();
        let full = VineMask::full(count);
        if full.is_empty() {
            return true;
        }

        let mut visited = HashSet::new();
        visited.insert(full.clone());
        let mut queue = VecDeque::from([full]);

        while let Some(state) = queue.pop_front() {
            let occupied = self.occupancy_for(&state);
            let clearable: Vec<usize> = state
                .iter_present()
                .filter(|&index| self.can_vine_clear(index, &occupied))
                .collect();

            for index in clearable {
                let next = state.without(index);
                if next.is_empty() {
                    return true;
                }
                if visited.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// Union occupancy of all vines still present in the mask
    fn occupancy_for(&self, present: &VineMask) -> CellSet {
        let mut occupied = CellSet::new(self.grid_size);
        for index in present.iter_present() {
            if let Some(vine) = self.vines.get(index) {
                occupied.union_with(&vine.cells);
            }
        }
        occupied
    }
}
