//! Staircase walks over a sorted matrix
//!
//! Every rank and bound query here walks from one corner toward the
//! opposite edge, moving exactly one row or one column per step, so each
//! costs at most `rows + cols` element reads and never allocates.

use crate::cell::CellRef;
use crate::traits::{MatrixElement, SortedMatrix};
use core::cmp::Ordering;

/// Starting corner of a staircase walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Start at `(rows - 1, 0)`, moving up or right
    BottomLeft,
    /// Start at `(0, cols - 1)`, moving down or left
    TopRight,
}

/// Which entries a counting walk accepts relative to the probe value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Entries strictly less than the probe
    Below,
    /// Entries less than or equal to the probe
    AtMost,
}

impl Threshold {
    fn accepts<T: MatrixElement>(&self, entry: &T, probe: &T) -> bool {
        match self {
            Threshold::Below => entry.total_lt(probe),
            Threshold::AtMost => entry.total_le(probe),
        }
    }
}

/// Result of a counting walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Number of accepted entries
    pub count: usize,
    /// Number of cells inspected
    pub steps: usize,
}

/// Count the entries accepted by `threshold` with a single staircase walk
///
/// Both corners give the same count; they differ only in which cells they
/// inspect. Accepted entries always form a top-left "staircase" region
/// because rows and columns are non-decreasing.
pub fn staircase_count<M>(
    matrix: &M,
    probe: &M::Element,
    threshold: Threshold,
    corner: Corner,
) -> WalkOutcome
where
    M: SortedMatrix + ?Sized,
{
    let (rows, cols) = matrix.dimensions();
    let mut count = 0;
    let mut steps = 0;

    match corner {
        Corner::BottomLeft => {
            // `row` is one past the current row so it can reach zero
            let mut row = rows;
            let mut col = 0;
            while row > 0 && col < cols {
                steps += 1;
                if threshold.accepts(&matrix.get(row - 1, col), probe) {
                    count += row;
                    col += 1;
                } else {
                    row -= 1;
                }
            }
        }
        Corner::TopRight => {
            let mut row = 0;
            let mut col = cols;
            while row < rows && col > 0 {
                steps += 1;
                if threshold.accepts(&matrix.get(row, col - 1), probe) {
                    count += col;
                    row += 1;
                } else {
                    col -= 1;
                }
            }
        }
    }

    WalkOutcome { count, steps }
}

/// Partition of the matrix relative to a probe value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankSummary {
    pub less: usize,
    pub equal: usize,
    pub greater: usize,
}

impl RankSummary {
    /// Total entries accounted for; always the matrix size
    pub const fn total(&self) -> usize {
        self.less + self.equal + self.greater
    }
}

/// Rank queries against a borrowed sorted matrix
#[derive(Debug, Clone, Copy)]
pub struct RankCounter<'a, M: ?Sized> {
    matrix: &'a M,
}

impl<'a, M: SortedMatrix + ?Sized> RankCounter<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        Self { matrix }
    }

    /// Entries strictly less than `value`
    pub fn count_less_than(&self, value: &M::Element) -> usize {
        self.walk_less_than(value).count
    }

    /// Entries less than or equal to `value`
    pub fn count_not_greater_than(&self, value: &M::Element) -> usize {
        self.walk_not_greater_than(value).count
    }

    /// [`RankCounter::count_less_than`] with the number of cells inspected
    pub fn walk_less_than(&self, value: &M::Element) -> WalkOutcome {
        staircase_count(self.matrix, value, Threshold::Below, Corner::TopRight)
    }

    /// [`RankCounter::count_not_greater_than`] with the number of cells inspected
    pub fn walk_not_greater_than(&self, value: &M::Element) -> WalkOutcome {
        staircase_count(self.matrix, value, Threshold::AtMost, Corner::BottomLeft)
    }

    /// Entries strictly greater than `value`
    pub fn count_greater_than(&self, value: &M::Element) -> usize {
        self.matrix.len() - self.count_not_greater_than(value)
    }

    /// Entries greater than or equal to `value`
    pub fn count_not_less_than(&self, value: &M::Element) -> usize {
        self.matrix.len() - self.count_less_than(value)
    }

    /// Entries equal to `value`, derived from the two walks
    pub fn count_equal_to(&self, value: &M::Element) -> usize {
        self.summary(value).equal
    }

    /// Less / equal / greater partition using two walks
    pub fn summary(&self, value: &M::Element) -> RankSummary {
        let less = self.count_less_than(value);
        let not_greater = self.count_not_greater_than(value);
        RankSummary {
            less,
            equal: not_greater - less,
            greater: self.matrix.len() - not_greater,
        }
    }
}

/// Bound queries against a borrowed sorted matrix
#[derive(Debug, Clone, Copy)]
pub struct BoundFinder<'a, M: ?Sized> {
    matrix: &'a M,
}

impl<'a, M: SortedMatrix + ?Sized> BoundFinder<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        Self { matrix }
    }

    /// Smallest entry `>= value`, or `None` when `value` exceeds the maximum
    pub fn least_upper_bound(&self, value: &M::Element) -> Option<M::Element> {
        self.least_upper_bound_cell(value).map(|(entry, _)| entry)
    }

    /// Like [`BoundFinder::least_upper_bound`], with the entry's position
    pub fn least_upper_bound_cell(&self, value: &M::Element) -> Option<(M::Element, CellRef)> {
        let (rows, cols) = self.matrix.dimensions();
        let mut best: Option<(M::Element, CellRef)> = None;
        let mut row = rows;
        let mut col = 0;

        while row > 0 && col < cols {
            let entry = self.matrix.get(row - 1, col);
            match entry.total_cmp(value) {
                Ordering::Equal => return Some((entry, CellRef::new(row - 1, col))),
                Ordering::Greater => {
                    if best.map_or(true, |(current, _)| entry.total_lt(&current)) {
                        best = Some((entry, CellRef::new(row - 1, col)));
                    }
                    // a tighter bound may sit above in this column
                    row -= 1;
                }
                Ordering::Less => col += 1,
            }
        }

        best
    }

    /// Largest entry `<= value`, or `None` when `value` is below the minimum
    pub fn greatest_lower_bound(&self, value: &M::Element) -> Option<M::Element> {
        let (rows, cols) = self.matrix.dimensions();
        let mut best: Option<M::Element> = None;
        let mut row = 0;
        let mut col = cols;

        while row < rows && col > 0 {
            let entry = self.matrix.get(row, col - 1);
            match entry.total_cmp(value) {
                Ordering::Equal => return Some(entry),
                Ordering::Less => {
                    if best.map_or(true, |current| current.total_lt(&entry)) {
                        best = Some(entry);
                    }
                    row += 1;
                }
                Ordering::Greater => col -= 1,
            }
        }

        best
    }
}
