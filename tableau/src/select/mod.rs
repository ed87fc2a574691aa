//! Order-statistic selection strategies
//!
//! Four interchangeable ways to find the k-th smallest entry:
//!
//! - [`BinarySearchSelector`]: bisects the value range, `O((R + C) log V)`
//! - [`FrontierSelector`]: lazy min-heap from the top-left, `O(k log k)`
//! - [`ExtractionSelector`] / [`ExtractableGrid`]: repeated in-place
//!   minimum extraction, `O(k (R + C))` and no auxiliary memory
//! - [`BruteForceSelector`]: flatten and sort, the reference oracle
//!
//! All of them must agree on every input.

pub mod brute;
pub mod extraction;
pub mod frontier;
pub mod search;

pub use brute::BruteForceSelector;
pub use extraction::{DrainSorted, ExtractableGrid, ExtractionSelector};
pub use frontier::{Ascending, FrontierSelector};
pub use search::BinarySearchSelector;

use tableau_core::{MatrixElement, OrderStatistic, Result, SelectorChoice};

use crate::config::EngineConfig;
use crate::grid::Grid;

/// A selector chosen at runtime
pub enum AnySelector<'a, T: MatrixElement> {
    BinarySearch(BinarySearchSelector<'a, Grid<T>>),
    Frontier(FrontierSelector<'a, Grid<T>>),
    Extraction(ExtractionSelector<'a, T>),
    BruteForce(BruteForceSelector<T>),
}

impl<'a, T: MatrixElement> AnySelector<'a, T> {
    /// Build the selector named by `choice`
    pub fn new(grid: &'a Grid<T>, choice: SelectorChoice, config: &EngineConfig) -> Self {
        match choice {
            SelectorChoice::BinarySearch => {
                AnySelector::BinarySearch(BinarySearchSelector::new(grid).with_config(config))
            }
            SelectorChoice::Frontier => {
                AnySelector::Frontier(FrontierSelector::new(grid).with_config(config))
            }
            SelectorChoice::Extraction => {
                AnySelector::Extraction(ExtractionSelector::new(grid).with_config(config))
            }
            SelectorChoice::BruteForce => AnySelector::BruteForce(BruteForceSelector::new(grid)),
        }
    }

    /// Which strategy this is
    pub fn choice(&self) -> SelectorChoice {
        match self {
            AnySelector::BinarySearch(_) => SelectorChoice::BinarySearch,
            AnySelector::Frontier(_) => SelectorChoice::Frontier,
            AnySelector::Extraction(_) => SelectorChoice::Extraction,
            AnySelector::BruteForce(_) => SelectorChoice::BruteForce,
        }
    }
}

impl<T: MatrixElement> OrderStatistic for AnySelector<'_, T> {
    type Element = T;

    fn len(&self) -> usize {
        match self {
            AnySelector::BinarySearch(s) => s.len(),
            AnySelector::Frontier(s) => s.len(),
            AnySelector::Extraction(s) => s.len(),
            AnySelector::BruteForce(s) => s.len(),
        }
    }

    fn kth_smallest(&self, k: usize) -> Result<T> {
        match self {
            AnySelector::BinarySearch(s) => s.kth_smallest(k),
            AnySelector::Frontier(s) => s.kth_smallest(k),
            AnySelector::Extraction(s) => s.kth_smallest(k),
            AnySelector::BruteForce(s) => s.kth_smallest(k),
        }
    }

    fn kth_smallest_pair(&self, k: usize) -> Result<(T, T)> {
        match self {
            AnySelector::BinarySearch(s) => s.kth_smallest_pair(k),
            AnySelector::Frontier(s) => s.kth_smallest_pair(k),
            AnySelector::Extraction(s) => s.kth_smallest_pair(k),
            AnySelector::BruteForce(s) => s.kth_smallest_pair(k),
        }
    }
}

impl<T: MatrixElement> Grid<T> {
    /// Selector of the given kind borrowing this grid
    pub fn selector(&self, choice: SelectorChoice) -> AnySelector<'_, T> {
        AnySelector::new(self, choice, &EngineConfig::default())
    }

    /// The k-th smallest entry using the given strategy
    pub fn kth_smallest(&self, k: usize, choice: SelectorChoice) -> Result<T> {
        self.selector(choice).kth_smallest(k)
    }

    /// The k-th largest entry using the given strategy
    pub fn kth_largest(&self, k: usize, choice: SelectorChoice) -> Result<T> {
        self.selector(choice).kth_largest(k)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_any_selector_dispatch() {
        let grid = scattered();
        for choice in SelectorChoice::ALL {
            let selector = grid.selector(choice);
            assert_eq!(selector.choice(), choice);
            assert_eq!(selector.len(), 25);
            assert_eq!(selector.kth_smallest(13), Ok(13));
            assert_eq!(selector.kth_smallest_pair(12), Ok((12, 13)));
            assert_eq!(grid.kth_largest(1, choice), Ok(55));
        }
    }
}
