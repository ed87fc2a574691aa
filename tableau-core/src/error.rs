//! Error types for sorted matrix selection

/// Errors that can occur while building or querying a sorted matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableauError {
    /// Matrix has zero rows or zero columns
    EmptyMatrix,
    /// A row's length differs from the first row's length
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat storage length differs from rows * cols
    LengthMismatch { expected: usize, found: usize },
    /// rows * cols does not fit in usize
    SizeOverflow,
    /// Requested rank is outside `1..=len`
    RankOutOfRange { k: usize, len: usize },
    /// No matrix entry satisfies the query
    NotFound,
    /// Two selection strategies returned different answers
    SelectorMismatch { k: usize },
    /// Malformed range string
    InvalidRange,
    /// A cell value could not be parsed
    InvalidValue,
    /// Selector name not recognised
    UnknownSelector,
}

/// Broad classes of [`TableauError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The matrix itself is malformed
    Shape,
    /// A query argument is outside the valid domain
    Domain,
    /// Textual input could not be interpreted
    Input,
}

impl TableauError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            TableauError::EmptyMatrix
            | TableauError::RaggedRow { .. }
            | TableauError::LengthMismatch { .. }
            | TableauError::SizeOverflow => ErrorCategory::Shape,
            TableauError::RankOutOfRange { .. }
            | TableauError::NotFound
            | TableauError::SelectorMismatch { .. } => ErrorCategory::Domain,
            TableauError::InvalidRange | TableauError::InvalidValue | TableauError::UnknownSelector => {
                ErrorCategory::Input
            }
        }
    }
}

impl core::fmt::Display for TableauError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableauError::EmptyMatrix => write!(f, "Matrix must have at least one row and one column"),
            TableauError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "Row {row} has {found} columns, expected {expected}"),
            TableauError::LengthMismatch { expected, found } => {
                write!(f, "Expected {expected} elements, found {found}")
            }
            TableauError::SizeOverflow => write!(f, "Matrix size overflows usize"),
            TableauError::RankOutOfRange { k, len } => {
                write!(f, "Rank {k} out of range, expected 1..={len}")
            }
            TableauError::NotFound => write!(f, "No matching matrix entry"),
            TableauError::SelectorMismatch { k } => {
                write!(f, "Selectors disagree on rank {k}")
            }
            TableauError::InvalidRange => write!(f, "Invalid range"),
            TableauError::InvalidValue => write!(f, "Invalid cell value"),
            TableauError::UnknownSelector => write!(f, "Unknown selector"),
        }
    }
}

impl core::error::Error for TableauError {}

/// Result type for tableau operations
pub type Result<T> = core::result::Result<T, TableauError>;
