//! Median and order statistics of a random sorted matrix, timed per strategy

use rand::Rng;
use std::time::Instant;
use tableau::{Grid, OrderStatistic, Result, SelectorChoice, SortedMatrix};

fn main() -> Result<()> {
    let (rows, cols) = (300, 200);
    println!("Building a {rows} x {cols} sorted matrix...");
    let grid = build_sorted_grid(rows, cols);

    let n = grid.len();
    println!("Entries: {n}, min: {}, max: {}", grid.min(), grid.max());

    for choice in SelectorChoice::ALL {
        let start = Instant::now();
        let median = grid.median(choice)?;
        let elapsed = start.elapsed();
        println!("{choice:>14}: median = {median} in {elapsed:?}");
    }

    // Where the median lives
    let frontier = tableau::FrontierSelector::new(&grid);
    let (value, cell) = frontier.kth_smallest_cell(n.div_ceil(2))?;
    println!("Median entry {value} sits at {cell}");

    let summary = grid.rank_counter().summary(&value);
    println!(
        "Below: {}, equal: {}, above: {}",
        summary.less, summary.equal, summary.greater
    );

    let largest = grid.selector(SelectorChoice::BinarySearch).kth_largest(10)?;
    println!("10th largest: {largest}");
    Ok(())
}

/// Each cell exceeds both its upper and left neighbours by a small random step
fn build_sorted_grid(rows: usize, cols: usize) -> Grid<u32> {
    let mut rng = rand::thread_rng();
    let mut cells = vec![0u32; rows * cols];
    for row in 0..rows {
        for col in 0..cols {
            let up = if row > 0 { cells[(row - 1) * cols + col] } else { 0 };
            let left = if col > 0 { cells[row * cols + col - 1] } else { 0 };
            cells[row * cols + col] = up.max(left) + rng.gen_range(0..5);
        }
    }
    // dimensions are non-zero and match the buffer
    Grid::from_vec(rows, cols, cells).unwrap()
}
