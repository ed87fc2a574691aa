//! Tableau - Order Statistics over Row/Column Sorted Matrices
//!
//! This library finds the k-th smallest entry, rank counts and the median of
//! a matrix whose rows and columns are each non-decreasing, without sorting
//! the matrix.
//!
//! ## Architecture
//!
//! Tableau follows a definitions/implementation split:
//!
//! - **tableau-core**: element and matrix traits, errors, and the
//!   allocation-free staircase walks (rank counting, bound finding)
//! - **tableau**: owned storage, the selection strategies, the median
//!   engine, and the cross-checking harness
//!
//! ## Quick Start
//!
//! ```rust
//! use tableau::{Grid, SelectorChoice};
//!
//! fn example() -> tableau::Result<()> {
//!     let grid: Grid<i32> = "1, 2, 3; 4, 5, 6; 7, 8, 9".parse()?;
//!
//!     assert_eq!(grid.count_less_than(5), 4);
//!     assert_eq!(grid.kth_smallest(7, SelectorChoice::Frontier)?, 7);
//!     assert_eq!(grid.median(SelectorChoice::BinarySearch)?, 5);
//!
//!     // Extraction consumes the grid; clone first to keep querying it
//!     let third = grid.clone().into_extractable().kth_smallest(3)?;
//!     assert_eq!(third, 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Strategies
//!
//! - **Binary search**: bisects the value range using rank counts
//! - **Frontier**: lazy min-heap expansion from the top-left corner
//! - **Extraction**: repeated in-place minimum removal (destructive)
//! - **Brute force**: flatten and sort, used as the reference oracle

// Re-export core abstractions
pub use tableau_core::{
    // Core traits
    MatrixElement, OrderStatistic, SelectorChoice, SortedMatrix,
    // Staircase walks
    BoundFinder, Corner, RankCounter, RankSummary, Threshold,
    // Error handling
    ErrorCategory, Result, TableauError,
    // Positions and validation utilities
    parse_rank_range, validate_rank, CellRef,
};

pub mod config;
pub mod grid;
pub mod harness;
pub mod median;
pub mod select;

pub use config::EngineConfig;
pub use grid::Grid;
pub use harness::{cross_check, cross_check_all, cross_check_range, CrossCheckReport};
pub use median::{median_with_config, MedianEngine, MedianPair};
pub use select::{
    AnySelector, Ascending, BinarySearchSelector, BruteForceSelector, ExtractableGrid,
    ExtractionSelector, FrontierSelector,
};
