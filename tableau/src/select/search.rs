//! Binary search over the value range
//!
//! The bracket starts at `[min, max]` and is bisected with
//! [`MatrixElement::midpoint`]. Each probe is classified with a rank count;
//! probes need not be matrix entries, the answer always is.

use core::cmp::Ordering;

use tableau_core::{
    validate_rank, BoundFinder, MatrixElement, OrderStatistic, RankCounter, Result, SortedMatrix,
    TableauError,
};
use tracing::{debug, trace};

use crate::config::EngineConfig;

/// Order-statistic selector built on rank counting
///
/// Each probe costs two staircase walks at most, so a query is
/// `O((rows + cols) * log(value range))` and allocates nothing.
#[derive(Debug, Clone, Copy)]
pub struct BinarySearchSelector<'a, M: ?Sized> {
    matrix: &'a M,
    config: EngineConfig,
}

impl<'a, M: SortedMatrix + ?Sized> BinarySearchSelector<'a, M> {
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
}

impl<M: SortedMatrix + ?Sized> OrderStatistic for BinarySearchSelector<'_, M> {
    type Element = M::Element;

    fn len(&self) -> usize {
        self.matrix.len()
    }

    fn kth_smallest(&self, k: usize) -> Result<M::Element> {
        let len = self.matrix.len();
        validate_rank(k, len)?;

        let counter = RankCounter::new(self.matrix);
        let bounds = BoundFinder::new(self.matrix);

        // Exactly this many entries are >= the k-th smallest's first copy
        let target = len + 1 - k;
        let mut first = Some(SortedMatrix::min(self.matrix));
        let mut last = Some(SortedMatrix::max(self.matrix));
        let mut probes = 0usize;
        let mut steps = 0usize;

        while let (Some(lo), Some(hi)) = (first, last) {
            if hi.total_lt(&lo) {
                break;
            }
            probes += 1;

            let mid = <M::Element as MatrixElement>::midpoint(lo, hi);
            let below = counter.walk_less_than(&mid);
            steps += below.steps;
            let not_less = len - below.count;
            if self.config.traces_steps() {
                trace!(
                    k, ?lo, ?hi, ?mid, not_less, target, steps = below.steps,
                    "binary search probe"
                );
            }

            match not_less.cmp(&target) {
                // k - 1 entries lie below mid, so the answer is the first entry at or above it
                Ordering::Equal => {
                    let found = bounds.least_upper_bound(&mid);
                    if self.config.traces_summary() {
                        debug!(k, probes, steps, value = ?found, "binary search finished");
                    }
                    return found.ok_or(TableauError::NotFound);
                }
                // at least k entries lie below mid
                Ordering::Less => last = mid.predecessor(),
                Ordering::Greater => {
                    // fewer than k - 1 below; mid itself wins if its run of copies covers rank k
                    let at_most = counter.walk_not_greater_than(&mid);
                    steps += at_most.steps;
                    if at_most.count >= k {
                        if self.config.traces_summary() {
                            debug!(k, probes, steps, value = ?mid, "binary search finished on a repeated value");
                        }
                        return Ok(mid);
                    }
                    first = mid.successor();
                }
            }
        }

        // Only reachable when the rows or columns are not actually sorted
        debug!(k, probes, steps, "binary search bracket emptied");
        Err(TableauError::NotFound)
    }
}
