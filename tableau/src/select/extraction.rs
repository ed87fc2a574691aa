//! Destructive selection by repeated minimum extraction
//!
//! The minimum always sits in the top-left corner. Removing it leaves a hole
//! there; the hole is sifted toward the bottom-right by swapping it with the
//! smaller of its right and lower neighbours until neither exists. The rows
//! and columns of the remaining entries stay sorted, so the new minimum is
//! again in the corner. Vacated cells are empty slots, which compare above
//! every real value.

use tableau_core::{
    validate_rank, CellRef, MatrixElement, OrderStatistic, Result, SortedMatrix, TableauError,
};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::grid::Grid;

/// A sorted matrix that can only be consumed from its minimum upward
///
/// This type deliberately offers no rank or bound queries: once an entry
/// has been extracted those answers would describe a different matrix.
/// Clone the [`Grid`] first if it is still needed.
#[derive(Debug, Clone)]
pub struct ExtractableGrid<T> {
    rows: usize,
    cols: usize,
    slots: Vec<Option<T>>,
    remaining: usize,
    config: EngineConfig,
}

impl<T: MatrixElement> From<Grid<T>> for ExtractableGrid<T> {
    fn from(grid: Grid<T>) -> Self {
        let (rows, cols, data) = grid.into_parts();
        let remaining = data.len();
        Self {
            rows,
            cols,
            slots: data.into_iter().map(Some).collect(),
            remaining,
            config: EngineConfig::default(),
        }
    }
}

impl<T: MatrixElement> ExtractableGrid<T> {
    /// Trace according to an engine configuration
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entries not yet extracted
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The smallest remaining entry
    pub fn peek_min(&self) -> Option<T> {
        self.slots.first().copied().flatten()
    }

    /// Remove and return the smallest remaining entry
    ///
    /// `O(rows + cols)`.
    pub fn extract_min(&mut self) -> Option<T> {
        let min = self.slots.first_mut()?.take()?;
        self.remaining -= 1;
        let swaps = self.youngify();
        if self.config.traces_steps() {
            trace!(value = ?min, swaps, remaining = self.remaining, "extracted minimum");
        }
        Some(min)
    }

    /// Sift the hole at the top-left corner down to the bottom-right edge
    ///
    /// Returns the number of swaps performed.
    fn youngify(&mut self) -> usize {
        let mut hole = CellRef::new(0, 0);
        let mut swaps = 0;

        loop {
            let right = hole
                .right(self.cols)
                .and_then(|cell| self.slot(cell).map(|value| (value, cell)));
            let down = hole
                .down(self.rows)
                .and_then(|cell| self.slot(cell).map(|value| (value, cell)));

            // any live neighbour is smaller than the hole; take the smaller one
            let next = match (right, down) {
                (Some((right_value, right_cell)), Some((down_value, down_cell))) => {
                    if right_value.total_lt(&down_value) {
                        right_cell
                    } else {
                        down_cell
                    }
                }
                (Some((_, cell)), None) | (None, Some((_, cell))) => cell,
                (None, None) => break,
            };

            self.slots
                .swap(hole.index(self.cols), next.index(self.cols));
            hole = next;
            swaps += 1;
        }

        swaps
    }

    fn slot(&self, cell: CellRef) -> Option<T> {
        self.slots[cell.index(self.cols)]
    }

    /// The k-th smallest entry, consuming the matrix
    ///
    /// Performs `k - 1` extractions and then reads the corner, so the cost
    /// is `O(k * (rows + cols))` with no auxiliary memory. `k` counts from
    /// the smallest entry still present.
    pub fn kth_smallest(mut self, k: usize) -> Result<T> {
        validate_rank(k, self.remaining)?;
        for _ in 1..k {
            self.extract_min().ok_or(TableauError::NotFound)?;
        }
        let found = self.peek_min().ok_or(TableauError::NotFound)?;

        if self.config.traces_summary() {
            debug!(k, value = ?found, remaining = self.remaining, "extraction selection finished");
        }
        Ok(found)
    }

    /// Ranks `k` and `k + 1`, consuming the matrix
    pub fn kth_smallest_pair(mut self, k: usize) -> Result<(T, T)> {
        validate_rank(k, self.remaining)?;
        validate_rank(k + 1, self.remaining)?;
        for _ in 1..k {
            self.extract_min().ok_or(TableauError::NotFound)?;
        }
        let first = self.extract_min().ok_or(TableauError::NotFound)?;
        let second = self.peek_min().ok_or(TableauError::NotFound)?;
        Ok((first, second))
    }

    /// Extract every remaining entry in ascending order
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { grid: self }
    }

    /// Consume into a sorted vector
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }
}

/// Iterator returned by [`ExtractableGrid::drain_sorted`]
pub struct DrainSorted<'a, T> {
    grid: &'a mut ExtractableGrid<T>,
}

impl<T: MatrixElement> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.grid.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.grid.remaining, Some(self.grid.remaining))
    }
}

impl<T: MatrixElement> ExactSizeIterator for DrainSorted<'_, T> {}

/// Non-destructive wrapper: extracts from a private copy per query
///
/// Each query clones the grid, so this costs `O(rows * cols)` extra memory
/// per call. It exists so extraction can be compared with the other
/// strategies through [`OrderStatistic`].
#[derive(Debug, Clone, Copy)]
pub struct ExtractionSelector<'a, T> {
    grid: &'a Grid<T>,
    config: EngineConfig,
}

impl<'a, T: MatrixElement> ExtractionSelector<'a, T> {
    pub fn new(grid: &'a Grid<T>) -> Self {
        Self {
            grid,
            config: EngineConfig::default(),
        }
    }

    /// Trace according to an engine configuration
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    fn scratch(&self) -> ExtractableGrid<T> {
        let mut scratch = self.grid.clone().into_extractable();
        scratch.config = self.config;
        scratch
    }
}

impl<T: MatrixElement> OrderStatistic for ExtractionSelector<'_, T> {
    type Element = T;

    fn len(&self) -> usize {
        self.grid.len()
    }

    fn kth_smallest(&self, k: usize) -> Result<T> {
        validate_rank(k, self.grid.len())?;
        self.scratch().kth_smallest(k)
    }

    fn kth_smallest_pair(&self, k: usize) -> Result<(T, T)> {
        validate_rank(k, self.grid.len())?;
        self.scratch().kth_smallest_pair(k)
    }
}
