//! Cross-checking and timing harness
//!
//! Runs every selection strategy on the same ranks, compares each answer
//! with the sort-based oracle, and records how long each took.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tableau_core::{
    validate_rank, MatrixElement, OrderStatistic, Result, SelectorChoice, SortedMatrix,
    TableauError,
};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::select::{AnySelector, BruteForceSelector};

/// Strategies compared against the oracle
pub const CANDIDATES: [SelectorChoice; 3] = [
    SelectorChoice::BinarySearch,
    SelectorChoice::Frontier,
    SelectorChoice::Extraction,
];

/// One strategy's answer for one rank
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorRun<T> {
    pub selector: SelectorChoice,
    pub outcome: Result<T>,
    pub elapsed: Duration,
}

/// Every strategy's answer for one rank
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCheckReport<T> {
    pub k: usize,
    /// The oracle's answer
    pub expected: T,
    pub runs: Vec<SelectorRun<T>>,
}

impl<T: MatrixElement> CrossCheckReport<T> {
    /// Runs whose outcome differs from the oracle
    pub fn disagreements(&self) -> impl Iterator<Item = &SelectorRun<T>> + '_ {
        self.runs.iter().filter(move |run| match &run.outcome {
            Ok(value) => value.total_cmp(&self.expected) != core::cmp::Ordering::Equal,
            Err(_) => true,
        })
    }

    /// Whether every strategy matched the oracle
    pub fn agreed(&self) -> bool {
        self.disagreements().next().is_none()
    }
}

fn run_candidates<T: MatrixElement>(
    grid: &Grid<T>,
    k: usize,
    expected: T,
    config: &EngineConfig,
) -> CrossCheckReport<T> {
    let runs = CANDIDATES
        .iter()
        .map(|&choice| {
            let selector = AnySelector::new(grid, choice, config);
            let start = Instant::now();
            let outcome = selector.kth_smallest(k);
            SelectorRun {
                selector: choice,
                outcome,
                elapsed: start.elapsed(),
            }
        })
        .collect();

    let report = CrossCheckReport { k, expected, runs };
    for run in report.disagreements() {
        warn!(k, selector = %run.selector, outcome = ?run.outcome, expected = ?report.expected, "selector disagrees with oracle");
    }
    report
}

/// Compare every strategy with the oracle at rank `k`
pub fn cross_check<T: MatrixElement>(grid: &Grid<T>, k: usize) -> Result<CrossCheckReport<T>> {
    let oracle = BruteForceSelector::new(grid);
    let expected = oracle.kth_smallest(k)?;
    Ok(run_candidates(grid, k, expected, &EngineConfig::default()))
}

/// Compare every strategy with the oracle across an inclusive rank range
///
/// Ranks are checked in parallel. The read-only strategies share `grid`;
/// extraction works on a private copy per rank.
pub fn cross_check_range<T>(
    grid: &Grid<T>,
    ks: RangeInclusive<usize>,
    config: &EngineConfig,
) -> Result<Vec<CrossCheckReport<T>>>
where
    T: MatrixElement + Send + Sync,
{
    validate_rank(*ks.start(), grid.len())?;
    validate_rank(*ks.end(), grid.len())?;

    let oracle = BruteForceSelector::new(grid);
    let sorted = oracle.sorted();

    let reports: Vec<CrossCheckReport<T>> = ks
        .into_par_iter()
        .map(|k| run_candidates(grid, k, sorted[k - 1], config))
        .collect();

    let failed = reports.iter().filter(|report| !report.agreed()).count();
    info!(checked = reports.len(), failed, "cross-check finished");
    Ok(reports)
}

/// Compare every strategy with the oracle at every rank
pub fn cross_check_all<T>(grid: &Grid<T>, config: &EngineConfig) -> Result<Vec<CrossCheckReport<T>>>
where
    T: MatrixElement + Send + Sync,
{
    cross_check_range(grid, 1..=grid.len(), config)
}

/// Fail with [`TableauError::SelectorMismatch`] at the first disagreeing rank
pub fn ensure_agreement<T: MatrixElement>(reports: &[CrossCheckReport<T>]) -> Result<()> {
    match reports.iter().find(|report| !report.agreed()) {
        Some(report) => Err(TableauError::SelectorMismatch { k: report.k }),
        None => Ok(()),
    }
}

/// Time one strategy over a list of ranks
///
/// Returns the total elapsed time and a one-line summary.
pub fn time_selector<T: MatrixElement>(
    grid: &Grid<T>,
    choice: SelectorChoice,
    ks: &[usize],
) -> Result<(Duration, String)> {
    let selector = AnySelector::new(grid, choice, &EngineConfig::default());
    let start = Instant::now();

    for &k in ks {
        selector.kth_smallest(k)?;
    }

    let duration = start.elapsed();
    let (rows, cols) = grid.dimensions();
    Ok((
        duration,
        format!(
            "{choice}: {} queries on {rows}x{cols} in {duration:.2?}",
            ks.len()
        ),
    ))
}
