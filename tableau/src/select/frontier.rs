//! Lazy frontier expansion with a min-heap
//!
//! Starting from the top-left corner, each popped cell pushes its right and
//! lower neighbours. Cells come off the heap in non-decreasing order, so the
//! k-th pop is the k-th smallest entry and no cell beyond the k-th frontier
//! is ever read.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use hashbrown::HashSet;
use tableau_core::{
    validate_rank, CellRef, MatrixElement, OrderStatistic, Result, SortedMatrix, TableauError,
};
use tracing::{debug, trace};

use crate::config::EngineConfig;

/// Heap entry ordered by value only; position breaks ties deterministically
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<T> {
    value: T,
    cell: CellRef,
}

impl<T: MatrixElement> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: MatrixElement> Eq for FrontierEntry<T> {}

impl<T: MatrixElement> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: MatrixElement> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then_with(|| self.cell.cmp(&other.cell))
    }
}

/// Iterator over matrix entries in ascending order
///
/// Each call to `next` pops one cell and enqueues at most two, so producing
/// the first `k` entries costs `O(k log k)` time and `O(k)` memory.
pub struct Ascending<'a, M: SortedMatrix + ?Sized> {
    matrix: &'a M,
    heap: BinaryHeap<Reverse<FrontierEntry<M::Element>>>,
    /// Row-major indices of every cell ever pushed
    enqueued: HashSet<usize>,
}

impl<'a, M: SortedMatrix + ?Sized> Ascending<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        let mut walk = Self {
            matrix,
            heap: BinaryHeap::new(),
            enqueued: HashSet::new(),
        };
        if !matrix.is_empty() {
            walk.enqueue(CellRef::new(0, 0));
        }
        walk
    }

    /// Number of distinct cells read so far
    pub fn visited(&self) -> usize {
        self.enqueued.len()
    }

    /// Current frontier size
    pub fn frontier_len(&self) -> usize {
        self.heap.len()
    }

    fn enqueue(&mut self, cell: CellRef) {
        let (_, cols) = self.matrix.dimensions();
        // reachable from above and from the left; push only once
        if self.enqueued.insert(cell.index(cols)) {
            self.heap.push(Reverse(FrontierEntry {
                value: self.matrix.at(cell),
                cell,
            }));
        }
    }
}

impl<M: SortedMatrix + ?Sized> Iterator for Ascending<'_, M> {
    type Item = (M::Element, CellRef);

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse(entry) = self.heap.pop()?;
        let (rows, cols) = self.matrix.dimensions();

        if let Some(right) = entry.cell.right(cols) {
            self.enqueue(right);
        }
        if let Some(down) = entry.cell.down(rows) {
            self.enqueue(down);
        }

        Some((entry.value, entry.cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.len() - (self.enqueued.len() - self.heap.len());
        (remaining, Some(remaining))
    }
}

impl<M: SortedMatrix + ?Sized> ExactSizeIterator for Ascending<'_, M> {}

/// Order-statistic selector using [`Ascending`]
#[derive(Debug, Clone, Copy)]
pub struct FrontierSelector<'a, M: ?Sized> {
    matrix: &'a M,
    config: EngineConfig,
}

impl<'a, M: SortedMatrix + ?Sized> FrontierSelector<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            config: EngineConfig::default(),
        }
    }

    /// Trace according to an engine configuration
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// The k-th smallest entry together with where it sits
    pub fn kth_smallest_cell(&self, k: usize) -> Result<(M::Element, CellRef)> {
        validate_rank(k, self.matrix.len())?;

        let mut walk = Ascending::new(self.matrix);
        for rank in 1..k {
            let popped = walk.next().ok_or(TableauError::NotFound)?;
            if self.config.traces_steps() {
                trace!(rank, value = ?popped.0, cell = %popped.1, frontier = walk.frontier_len(), "frontier pop");
            }
        }
        let found = walk.next().ok_or(TableauError::NotFound)?;

        if self.config.traces_summary() {
            debug!(k, visited = walk.visited(), value = ?found.0, cell = %found.1, "frontier selection finished");
        }
        Ok(found)
    }
}

impl<M: SortedMatrix + ?Sized> OrderStatistic for FrontierSelector<'_, M> {
    type Element = M::Element;

    fn len(&self) -> usize {
        self.matrix.len()
    }

    fn kth_smallest(&self, k: usize) -> Result<M::Element> {
        self.kth_smallest_cell(k).map(|(value, _)| value)
    }

    fn kth_smallest_pair(&self, k: usize) -> Result<(M::Element, M::Element)> {
        validate_rank(k, self.matrix.len())?;
        validate_rank(k + 1, self.matrix.len())?;
        let mut walk = Ascending::new(self.matrix).skip(k - 1).map(|(value, _)| value);
        match (walk.next(), walk.next()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(TableauError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::select::fixtures::{banded, scattered, sorted_entries};

    #[test]
    fn test_ascending_visits_every_cell_once() {
        let grid = scattered();
        let walked: Vec<i32> = grid.ascending().map(|(value, _)| value).collect();
        assert_eq!(walked, sorted_entries(&grid));

        let mut cells: Vec<CellRef> = grid.ascending().map(|(_, cell)| cell).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 25);
    }

    #[test]
    fn test_ascending_reports_exact_length() {
        let grid = banded();
        let mut walk = grid.ascending();
        assert_eq!(walk.len(), 25);
        walk.next();
        walk.next();
        assert_eq!(walk.len(), 23);
    }

    #[test]
    fn test_frontier_stays_small() {
        let grid = banded();
        let mut walk = Ascending::new(&grid);
        let third = walk.nth(2);
        assert_eq!(third.map(|(value, _)| value), Some(3));
        // only cells adjacent to the first three pops have been read
        assert!(walk.visited() <= 7);
    }

    #[test]
    fn test_kth_smallest_cell() {
        let grid = scattered();
        let selector = FrontierSelector::new(&grid);
        let (value, cell) = selector.kth_smallest_cell(16).unwrap();
        assert_eq!(value, 15);
        assert_eq!(cell, CellRef::new(0, 4));

        for k in 1..=25 {
            let (value, cell) = selector.kth_smallest_cell(k).unwrap();
            assert_eq!(grid.at(cell), value);
        }
    }

    #[test]
    fn test_step_tracing_keeps_results() {
        let grid = banded();
        let config = EngineConfig::default().with_debug_level(EngineConfig::STEPS);
        let traced = FrontierSelector::new(&grid).with_config(&config);
        let quiet = FrontierSelector::new(&grid);
        for k in 1..=grid.len() {
            assert_eq!(traced.kth_smallest_cell(k), quiet.kth_smallest_cell(k));
        }
    }

    #[test]
    fn test_pair_and_errors() {
        let grid = scattered();
        let selector = FrontierSelector::new(&grid);
        assert_eq!(selector.kth_smallest_pair(12), Ok((12, 13)));
        assert_eq!(selector.kth_smallest_pair(24), Ok((54, 55)));
        assert_eq!(
            selector.kth_smallest_pair(25),
            Err(TableauError::RankOutOfRange { k: 26, len: 25 })
        );
        assert_eq!(
            selector.kth_smallest(0),
            Err(TableauError::RankOutOfRange { k: 0, len: 25 })
        );
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::from_rows(vec![vec![42u8]]).unwrap();
        assert_eq!(FrontierSelector::new(&grid).kth_smallest(1), Ok(42));
    }
}
