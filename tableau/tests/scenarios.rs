//! End-to-end scenarios on small hand-written matrices

mod common;

use common::{banded, scattered};
use tableau::{
    cross_check_all, median_with_config, BinarySearchSelector, EngineConfig, ErrorCategory,
    FrontierSelector, Grid, MedianEngine, MedianPair, OrderStatistic, SelectorChoice,
    SortedMatrix, TableauError,
};

#[test]
fn scattered_matrix_median_and_middle_rank() {
    let grid = scattered();
    for choice in SelectorChoice::ALL {
        assert_eq!(grid.median(choice), Ok(13), "{choice}");
        assert_eq!(grid.kth_smallest(13, choice), Ok(13), "{choice}");
    }
}

#[test]
fn banded_matrix_median_and_count() {
    let grid = banded();
    for choice in SelectorChoice::ALL {
        assert_eq!(grid.median(choice), Ok(13), "{choice}");
    }
    assert_eq!(grid.count_less_than(13), 12);
    assert_eq!(grid.count_greater_than(13), 12);
}

#[test]
fn extreme_ranks_are_corners() {
    for grid in [scattered(), banded()] {
        let n = grid.len();
        for choice in SelectorChoice::ALL {
            assert_eq!(grid.kth_smallest(1, choice), Ok(grid.get(0, 0)));
            assert_eq!(grid.kth_smallest(n, choice), Ok(grid.get(4, 4)));
        }
        assert_eq!(grid.clone().into_extractable().kth_smallest(1), Ok(1));
        assert_eq!(grid.clone().into_extractable().kth_smallest(n), Ok(55));
    }
}

#[test]
fn one_by_one_matrix() {
    let grid = Grid::from_rows(vec![vec![17u32]]).unwrap();
    for choice in SelectorChoice::ALL {
        assert_eq!(grid.kth_smallest(1, choice), Ok(17));
        assert_eq!(grid.kth_largest(1, choice), Ok(17));
        assert_eq!(grid.median(choice), Ok(17));
    }
    assert_eq!(grid.into_extractable().kth_smallest(1), Ok(17));
}

#[test]
fn single_row_and_single_column() {
    let row = Grid::from_rows(vec![vec![1, 1, 2, 3, 5, 8]]).unwrap();
    let col = Grid::from_rows(vec![vec![1], vec![1], vec![2], vec![3], vec![5], vec![8]]).unwrap();
    for grid in [row, col] {
        for choice in SelectorChoice::ALL {
            assert_eq!(grid.kth_smallest(2, choice), Ok(1));
            assert_eq!(grid.kth_smallest(5, choice), Ok(5));
            assert_eq!(grid.median(choice), Ok(2));
        }
    }
}

#[test]
fn out_of_range_ranks_are_domain_errors() {
    let grid = banded();
    for choice in SelectorChoice::ALL {
        for k in [0, 26] {
            let err = grid.kth_smallest(k, choice).unwrap_err();
            assert_eq!(err, TableauError::RankOutOfRange { k, len: 25 });
            assert_eq!(err.category(), ErrorCategory::Domain);
        }
    }
}

#[test]
fn shape_errors_at_construction() {
    let err = Grid::<i32>::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Shape);
    assert_eq!(err.to_string(), "Row 1 has 2 columns, expected 3");
    assert_eq!(
        Grid::<i32>::from_rows(vec![]).unwrap_err(),
        TableauError::EmptyMatrix
    );
}

#[test]
fn read_only_queries_are_idempotent() {
    let grid = scattered();
    let before = grid.clone();

    let selector = BinarySearchSelector::new(&grid);
    let frontier = FrontierSelector::new(&grid);
    for k in 1..=25 {
        assert_eq!(selector.kth_smallest(k), selector.kth_smallest(k));
        assert_eq!(frontier.kth_smallest(k), frontier.kth_smallest(k));
    }
    assert_eq!(grid.count_less_than(13), grid.count_less_than(13));
    assert_eq!(grid, before);
}

#[test]
fn median_engine_over_any_selector() {
    let grid = Grid::from_rows(vec![vec![2, 4], vec![6, 8]]).unwrap();
    let engine = MedianEngine::new(FrontierSelector::new(&grid));
    assert_eq!(engine.median_pair(), Ok(MedianPair::Pair(4, 6)));
    assert_eq!(engine.median(), Ok(5));

    let config = EngineConfig::default()
        .with_selector(SelectorChoice::Extraction)
        .with_cross_check(true);
    assert_eq!(median_with_config(&grid, &config), Ok(5));
}

#[test]
fn all_strategies_agree_on_fixtures() {
    for grid in [scattered(), banded()] {
        let reports = cross_check_all(&grid, &EngineConfig::default()).unwrap();
        assert!(reports.iter().all(|report| report.agreed()));
    }
}

#[test]
fn float_matrix_with_negative_zero() {
    let grid = Grid::from_rows(vec![vec![-1.5f64, -0.0, 0.0], vec![-0.5, 0.0, 2.25]]).unwrap();
    for choice in SelectorChoice::ALL {
        assert_eq!(grid.kth_smallest(1, choice), Ok(-1.5));
        assert_eq!(grid.kth_smallest(6, choice), Ok(2.25));
        let third = grid.kth_smallest(3, choice).unwrap();
        assert!(third.is_sign_negative() && third == 0.0, "{choice}: {third}");
    }
}
