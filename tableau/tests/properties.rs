//! Property tests: every strategy agrees with a full sort on random sorted grids

mod common;

use common::{arb_grid_and_rank, arb_sorted_grid, sorted_entries};
use proptest::prelude::*;
use tableau::{
    BinarySearchSelector, BruteForceSelector, ExtractionSelector, FrontierSelector,
    MatrixElement, OrderStatistic, SelectorChoice, SortedMatrix,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn strategies_match_full_sort((grid, k) in arb_grid_and_rank()) {
        let expected = sorted_entries(&grid)[k - 1];
        prop_assert_eq!(BinarySearchSelector::new(&grid).kth_smallest(k), Ok(expected));
        prop_assert_eq!(FrontierSelector::new(&grid).kth_smallest(k), Ok(expected));
        prop_assert_eq!(ExtractionSelector::new(&grid).kth_smallest(k), Ok(expected));
        prop_assert_eq!(BruteForceSelector::new(&grid).kth_smallest(k), Ok(expected));
        prop_assert_eq!(grid.clone().into_extractable().kth_smallest(k), Ok(expected));
    }

    #[test]
    fn kth_largest_is_mirrored_rank((grid, k) in arb_grid_and_rank()) {
        let n = grid.len();
        let expected = sorted_entries(&grid)[n - k];
        for choice in SelectorChoice::ALL {
            prop_assert_eq!(grid.kth_largest(k, choice), Ok(expected));
        }
    }

    #[test]
    fn rank_partitions_are_exhaustive(grid in arb_sorted_grid(), probe in -60i64..120) {
        let entries = sorted_entries(&grid);
        let counter = grid.rank_counter();
        let summary = counter.summary(&probe);

        prop_assert_eq!(summary.total(), grid.len());
        prop_assert_eq!(summary.less, entries.iter().filter(|&&x| x < probe).count());
        prop_assert_eq!(summary.equal, entries.iter().filter(|&&x| x == probe).count());
        prop_assert_eq!(counter.count_not_less_than(&probe), summary.equal + summary.greater);
    }

    #[test]
    fn counts_and_bounds_are_monotone(grid in arb_sorted_grid(), a in -60i64..120, b in -60i64..120) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(grid.count_less_than(lo) <= grid.count_less_than(hi));

        let finder = grid.bound_finder();
        match (finder.least_upper_bound(&lo), finder.least_upper_bound(&hi)) {
            (Some(x), Some(y)) => prop_assert!(x <= y),
            (None, Some(_)) => prop_assert!(false, "bound vanished then reappeared"),
            _ => {}
        }

        let expected = sorted_entries(&grid).into_iter().find(|&x| x >= lo);
        prop_assert_eq!(finder.least_upper_bound(&lo), expected);
    }

    #[test]
    fn median_parity(grid in arb_sorted_grid()) {
        let entries = sorted_entries(&grid);
        let n = entries.len();
        let expected = if n % 2 == 1 {
            entries[n / 2]
        } else {
            <i64 as MatrixElement>::average(entries[n / 2 - 1], entries[n / 2])
        };
        for choice in SelectorChoice::ALL {
            prop_assert_eq!(grid.median(choice), Ok(expected));
        }
    }

    #[test]
    fn drain_sorted_matches_full_sort(grid in arb_sorted_grid()) {
        let expected = sorted_entries(&grid);
        prop_assert_eq!(grid.into_extractable().into_sorted_vec(), expected);
    }
}
