//! Read-only sorted matrix abstraction
//!
//! The staircase walks and the non-destructive selectors only ever need
//! dimensions and random access, so they are written against this trait
//! rather than a concrete storage type.

use super::element::MatrixElement;
use crate::cell::CellRef;

/// A rectangular matrix whose rows and columns are non-decreasing
///
/// Implementations are trusted to uphold the ordering: checking it would
/// cost a full `rows * cols` scan. Unsorted input produces unspecified (but
/// never panicking) query results.
pub trait SortedMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions as (rows, cols)
    ///
    /// Both are at least one for any successfully constructed matrix.
    fn dimensions(&self) -> (usize, usize);

    /// Get the element at the specified position
    ///
    /// Callers inside this crate only pass in-bounds positions.
    fn get(&self, row: usize, col: usize) -> Self::Element;

    /// Total number of entries
    fn len(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols
    }

    /// Always false for a constructed matrix; provided for API symmetry
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at a cell reference
    fn at(&self, cell: CellRef) -> Self::Element {
        self.get(cell.row, cell.col)
    }

    /// Global minimum (top-left corner)
    fn min(&self) -> Self::Element {
        self.get(0, 0)
    }

    /// Global maximum (bottom-right corner)
    fn max(&self) -> Self::Element {
        let (rows, cols) = self.dimensions();
        self.get(rows - 1, cols - 1)
    }
}

impl<M: SortedMatrix + ?Sized> SortedMatrix for &M {
    type Element = M::Element;

    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn get(&self, row: usize, col: usize) -> Self::Element {
        (**self).get(row, col)
    }
}

/// Fixed-size arrays are sorted matrices when their rows and columns are
impl<T: MatrixElement, const R: usize, const C: usize> SortedMatrix for [[T; C]; R] {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (R, C)
    }

    fn get(&self, row: usize, col: usize) -> T {
        self[row][col]
    }
}
