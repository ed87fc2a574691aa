//! Cell references into a row-major matrix

/// A (row, column) position in a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major linear index (`row * cols + col`)
    pub const fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`CellRef::index`]
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// The cell one column to the right, if it lies inside `cols`
    pub const fn right(&self, cols: usize) -> Option<Self> {
        if self.col + 1 < cols {
            Some(Self::new(self.row, self.col + 1))
        } else {
            None
        }
    }

    /// The cell one row below, if it lies inside `rows`
    pub const fn down(&self, rows: usize) -> Option<Self> {
        if self.row + 1 < rows {
            Some(Self::new(self.row + 1, self.col))
        } else {
            None
        }
    }
}

impl core::fmt::Display for CellRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
