#![allow(dead_code)]

use proptest::prelude::*;
use tableau::Grid;

/// Build a sorted grid from non-negative increments
///
/// Each cell is the larger of its upper and left neighbours plus its
/// increment, so rows and columns are non-decreasing by construction. Zero
/// increments produce runs of repeated values.
pub fn grid_from_increments(rows: usize, cols: usize, increments: &[i64]) -> Grid<i64> {
    let mut data = vec![0i64; rows * cols];
    for row in 0..rows {
        for col in 0..cols {
            let up = if row > 0 { data[(row - 1) * cols + col] } else { i64::MIN };
            let left = if col > 0 { data[row * cols + col - 1] } else { i64::MIN };
            let base = up.max(left);
            let base = if base == i64::MIN { -50 } else { base };
            data[row * cols + col] = base + increments[row * cols + col];
        }
    }
    Grid::from_vec(rows, cols, data).expect("shape is valid by construction")
}

/// Strategy producing sorted grids up to 8x8 with values clustered enough to repeat
pub fn arb_sorted_grid() -> impl Strategy<Value = Grid<i64>> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0i64..4, rows * cols)
            .prop_map(move |increments| grid_from_increments(rows, cols, &increments))
    })
}

/// Sorted grid together with a valid rank
pub fn arb_grid_and_rank() -> impl Strategy<Value = (Grid<i64>, usize)> {
    arb_sorted_grid().prop_flat_map(|grid| {
        let len = grid.as_slice().len();
        (Just(grid), 1..=len)
    })
}

pub fn sorted_entries(grid: &Grid<i64>) -> Vec<i64> {
    let mut entries = grid.as_slice().to_vec();
    entries.sort_unstable();
    entries
}

pub fn scattered() -> Grid<i32> {
    Grid::from_rows(vec![
        vec![1, 2, 3, 13, 15],
        vec![4, 5, 6, 24, 25],
        vec![7, 8, 9, 34, 35],
        vec![10, 11, 13, 44, 45],
        vec![12, 13, 53, 54, 55],
    ])
    .expect("rectangular")
}

pub fn banded() -> Grid<i32> {
    Grid::from_rows(vec![
        vec![1, 2, 3, 4, 5],
        vec![6, 7, 8, 9, 10],
        vec![11, 12, 13, 34, 35],
        vec![41, 42, 43, 44, 45],
        vec![51, 52, 53, 54, 55],
    ])
    .expect("rectangular")
}
