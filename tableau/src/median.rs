//! Median of all matrix entries
//!
//! For `n` entries the median is rank `(n + 1) / 2` when `n` is odd and the
//! average of ranks `n / 2` and `n / 2 + 1` when it is even. Any
//! [`OrderStatistic`] strategy can supply those ranks.

use tableau_core::{
    MatrixElement, OrderStatistic, Result, SelectorChoice, SortedMatrix, TableauError,
};
use tracing::{debug, error};

use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::select::{AnySelector, BruteForceSelector};

/// The central order statistic(s) before averaging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MedianPair<T> {
    /// Odd number of entries
    Single(T),
    /// Even number of entries: the lower and upper middle values
    Pair(T, T),
}

impl<T: MatrixElement> MedianPair<T> {
    /// Collapse to one value; integer averages truncate
    pub fn value(self) -> T {
        match self {
            MedianPair::Single(value) => value,
            MedianPair::Pair(lower, upper) => T::average(lower, upper),
        }
    }
}

/// Median computation over a pluggable selector
#[derive(Debug, Clone)]
pub struct MedianEngine<S> {
    selector: S,
    config: EngineConfig,
}

impl<S> MedianEngine<S>
where
    S: OrderStatistic,
    S::Element: MatrixElement,
{
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            config: EngineConfig::default(),
        }
    }

    /// Trace according to an engine configuration
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// The underlying selector
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// The one or two central order statistics
    pub fn median_pair(&self) -> Result<MedianPair<S::Element>> {
        let n = self.selector.len();
        if n == 0 {
            return Err(TableauError::EmptyMatrix);
        }

        let pair = if n % 2 == 1 {
            MedianPair::Single(self.selector.kth_smallest(n.div_ceil(2))?)
        } else {
            let (lower, upper) = self.selector.kth_smallest_pair(n / 2)?;
            MedianPair::Pair(lower, upper)
        };

        if self.config.traces_summary() {
            debug!(n, ?pair, "median located");
        }
        Ok(pair)
    }

    /// The median value
    pub fn median(&self) -> Result<S::Element> {
        self.median_pair().map(MedianPair::value)
    }
}

/// Median of `grid` using the selector and checks described by `config`
///
/// With `cross_check` enabled the answer is compared with the sort-based
/// oracle and a disagreement is reported as
/// [`TableauError::SelectorMismatch`].
pub fn median_with_config<T: MatrixElement>(grid: &Grid<T>, config: &EngineConfig) -> Result<T> {
    let selector = AnySelector::new(grid, config.selector, config);
    let pair = MedianEngine::new(selector).with_config(config).median_pair()?;

    if config.cross_check {
        let expected = MedianEngine::new(BruteForceSelector::new(grid)).median_pair()?;
        if !same_pair(&pair, &expected) {
            let k = grid.len().div_ceil(2);
            error!(selector = %config.selector, ?pair, ?expected, "median disagrees with oracle");
            return Err(TableauError::SelectorMismatch { k });
        }
    }

    Ok(pair.value())
}

fn same_pair<T: MatrixElement>(a: &MedianPair<T>, b: &MedianPair<T>) -> bool {
    use core::cmp::Ordering::Equal;
    match (a, b) {
        (MedianPair::Single(x), MedianPair::Single(y)) => x.total_cmp(y) == Equal,
        (MedianPair::Pair(x1, x2), MedianPair::Pair(y1, y2)) => {
            x1.total_cmp(y1) == Equal && x2.total_cmp(y2) == Equal
        }
        _ => false,
    }
}

impl<T: MatrixElement> Grid<T> {
    /// Median of all entries using the given strategy
    pub fn median(&self, choice: SelectorChoice) -> Result<T> {
        MedianEngine::new(self.selector(choice)).median()
    }
}
