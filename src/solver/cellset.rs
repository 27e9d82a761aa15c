use bitvec::prelude::*;

use crate::model::point::Point;

/// Fixed-size bitset over grid cells, keyed by packed `x * height + y` indices
///
/// Avoids per-cell allocation in the solver's hot loops; membership tests
/// and unions are O(1) and O(words) respectively.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    grid_size: [i32; 2],
}

impl CellSet {
    /// Create an empty set for the given grid dimensions
    pub fn new(grid_size: [i32; 2]) -> Self {
        let cells = (grid_size[0].max(0) * grid_size[1].max(0)) as usize;
        Self {
            bits: bitvec![0; cells],
            grid_size,
        }
    }

    /// Insert a cell; out-of-bounds points are ignored
    pub fn insert(&mut self, point: Point) {
        if point.in_bounds(self.grid_size) {
            self.bits.set(point.cell_index(self.grid_size), true);
        }
    }

    /// Test cell membership; out-of-bounds points are never members
    pub fn contains(&self, point: Point) -> bool {
        point.in_bounds(self.grid_size)
            && self.bits.get(point.cell_index(self.grid_size)).as_deref() == Some(&true)
    }

    /// Merge another set into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

/// Set of vines still present on the board, used as the BFS state key
///
/// Hashable so visited states can live in a `HashSet` without building
/// sorted-id strings per state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VineMask {
    bits: BitVec,
}

impl VineMask {
    /// Mask with all `count` vines present
    pub fn full(count: usize) -> Self {
        Self {
            bits: bitvec![1; count],
        }
    }

    /// Test whether a vine is still present
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Remove a vine in-place
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// New mask with one vine removed
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.remove(index);
        next
    }

    /// Test whether the board is clear
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count vines still present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices of vines still present, ascending
    pub fn iter_present(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}
