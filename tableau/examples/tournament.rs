//! Repeated minimum extraction ("tournament") on a small matrix

use tableau::{Grid, Result};

fn main() -> Result<()> {
    let grid: Grid<i32> = "1, 2, 3, 13, 15;
                           4, 5, 6, 24, 25;
                           7, 8, 9, 34, 35;
                           10, 11, 13, 44, 45;
                           12, 13, 53, 54, 55"
        .parse()?;

    // Keep a copy for read-only queries; extraction consumes its input
    let mut extractable = grid.clone().into_extractable();

    print!("Extraction order:");
    for value in extractable.drain_sorted().take(10) {
        print!(" {value}");
    }
    println!();
    println!("Remaining after ten extractions: {}", extractable.remaining());
    println!("Next minimum: {:?}", extractable.peek_min());

    let thirteenth = grid.into_extractable().kth_smallest(13)?;
    println!("13th smallest by extraction: {thirteenth}");
    Ok(())
}
