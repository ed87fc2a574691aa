//! Sort-based reference selector

use tableau_core::{validate_rank, MatrixElement, OrderStatistic, Result, SortedMatrix};

/// Flattens and sorts the matrix once; every rank is then a lookup
///
/// `O(n log n)` to build and `O(n)` memory. Used as the oracle the other
/// strategies are checked against.
#[derive(Debug, Clone)]
pub struct BruteForceSelector<T> {
    sorted: Vec<T>,
}

impl<T: MatrixElement> BruteForceSelector<T> {
    pub fn new<M>(matrix: &M) -> Self
    where
        M: SortedMatrix<Element = T> + ?Sized,
    {
        let (rows, cols) = matrix.dimensions();
        let mut sorted = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                sorted.push(matrix.get(row, col));
            }
        }
        sorted.sort_unstable_by(<T as MatrixElement>::total_cmp);
        Self { sorted }
    }

    /// All entries in ascending order
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }
}

impl<T: MatrixElement> OrderStatistic for BruteForceSelector<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.sorted.len()
    }

    fn kth_smallest(&self, k: usize) -> Result<T> {
        validate_rank(k, self.sorted.len())?;
        Ok(self.sorted[k - 1])
    }
}
