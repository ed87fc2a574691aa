//! Dense row-major storage for sorted matrices
//!
//! [`Grid`] is the queryable handle: it implements [`SortedMatrix`] and hands
//! out rank counters, bound finders and selectors that borrow it read-only.
//! Destructive extraction is only reachable by converting it into an
//! [`ExtractableGrid`](crate::select::ExtractableGrid).

use std::str::FromStr;

use tableau_core::{
    checked_len, validate_shape, BoundFinder, CellRef, MatrixElement, RankCounter, Result,
    SortedMatrix, TableauError,
};

use crate::select::{Ascending, ExtractableGrid};

/// Owned rectangular matrix with non-decreasing rows and columns
///
/// Construction checks the shape only. The ordering is trusted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "GridDocument<T>",
        into = "GridDocument<T>",
        bound(
            serialize = "T: MatrixElement + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: MatrixElement> Grid<T> {
    /// Build from a vector of rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let (nrows, ncols) = validate_shape(rows.iter().map(Vec::len))?;
        let data: Vec<T> = rows.into_iter().flatten().collect();

        tracing::trace!(rows = nrows, cols = ncols, "built grid from rows");
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Build from row-major flat storage
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(TableauError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`, or `None` when out of bounds
    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Row-major flat view of all entries
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Rank queries against this grid
    pub fn rank_counter(&self) -> RankCounter<'_, Self> {
        RankCounter::new(self)
    }

    /// Bound queries against this grid
    pub fn bound_finder(&self) -> BoundFinder<'_, Self> {
        BoundFinder::new(self)
    }

    /// Entries strictly less than `value`
    pub fn count_less_than(&self, value: T) -> usize {
        self.rank_counter().count_less_than(&value)
    }

    /// Entries strictly greater than `value`
    pub fn count_greater_than(&self, value: T) -> usize {
        self.rank_counter().count_greater_than(&value)
    }

    /// Smallest entry `>= value`
    pub fn least_upper_bound(&self, value: T) -> Option<T> {
        self.bound_finder().least_upper_bound(&value)
    }

    /// Lazy ascending traversal yielding each entry with its position
    pub fn ascending(&self) -> Ascending<'_, Self> {
        Ascending::new(self)
    }

    /// Give up read-only access in exchange for destructive extraction
    pub fn into_extractable(self) -> ExtractableGrid<T> {
        ExtractableGrid::from(self)
    }

    pub(crate) fn into_parts(self) -> (usize, usize, Vec<T>) {
        (self.rows, self.cols, self.data)
    }
}

impl<T: MatrixElement + FromStr> Grid<T> {
    /// Parse a textual matrix such as `"1, 2, 3; 4, 5, 6"`
    ///
    /// Rows are separated by `;` or newlines, cells by commas or whitespace.
    /// Blank rows are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for line in text.split(|c: char| c == ';' || c == '\n') {
            let row = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .map(|cell| cell.parse::<T>().map_err(|_| TableauError::InvalidValue))
                .collect::<Result<Vec<T>>>()?;

            if !row.is_empty() {
                rows.push(row);
            }
        }

        Self::from_rows(rows)
    }
}

impl<T: MatrixElement + FromStr> FromStr for Grid<T> {
    type Err = TableauError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T: MatrixElement> SortedMatrix for Grid<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, cell: CellRef) -> T {
        self.data[cell.index(self.cols)]
    }
}

impl<T: MatrixElement> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = TableauError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

/// On-disk JSON shapes accepted for a grid
///
/// Either `{"rows": [[1, 2], [3, 4]]}` or a bare `[[1, 2], [3, 4]]`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum GridDocument<T> {
    Object { rows: Vec<Vec<T>> },
    Bare(Vec<Vec<T>>),
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<GridDocument<T>> for Grid<T> {
    type Error = TableauError;

    fn try_from(document: GridDocument<T>) -> Result<Self> {
        match document {
            GridDocument::Object { rows } | GridDocument::Bare(rows) => Self::from_rows(rows),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> From<Grid<T>> for GridDocument<T> {
    fn from(grid: Grid<T>) -> Self {
        GridDocument::Object {
            rows: grid.to_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(
            Grid::<i32>::from_rows(vec![vec![1, 2], vec![3]]),
            Err(TableauError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::<i32>::from_rows(vec![]),
            Err(TableauError::EmptyMatrix)
        );
        assert_eq!(
            Grid::<i32>::from_rows(vec![vec![], vec![]]),
            Err(TableauError::EmptyMatrix)
        );
        assert_eq!(
            Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5]),
            Err(TableauError::LengthMismatch {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn test_accessors() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(1, 2), 6);
        assert_eq!(grid.try_get(2, 0), None);
        assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.min(), 1);
        assert_eq!(grid.max(), 6);
        assert_eq!(grid.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_parse_text() {
        let grid: Grid<i64> = "1, 2, 3; 4 5 6\n7,8,9\n\n".parse().unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.get(2, 1), 8);

        let floats = Grid::<f64>::parse("0.5 1.5; 2.5 3.5").unwrap();
        assert_eq!(floats.max(), 3.5);

        assert_eq!(
            Grid::<i32>::parse("1, x; 3, 4"),
            Err(TableauError::InvalidValue)
        );
        assert_eq!(Grid::<i32>::parse(" ; \n"), Err(TableauError::EmptyMatrix));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_documents() {
        let grid: Grid<i32> = serde_json::from_str(r#"{"rows": [[1, 2], [3, 4]]}"#).unwrap();
        assert_eq!(grid.get(1, 0), 3);

        let bare: Grid<i32> = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(bare, grid);

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"rows":[[1,2],[3,4]]}"#);

        assert!(serde_json::from_str::<Grid<i32>>("[[1, 2], [3]]").is_err());
    }
}
