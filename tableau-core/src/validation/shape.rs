//! Matrix shape validation
//!
//! Row/column ordering is deliberately not checked here; only the shape is.

use crate::TableauError;

/// Compute `rows * cols`, rejecting empty and overflowing shapes
pub const fn checked_len(rows: usize, cols: usize) -> Result<usize, TableauError> {
    if rows == 0 || cols == 0 {
        return Err(TableauError::EmptyMatrix);
    }

    match rows.checked_mul(cols) {
        Some(len) => Ok(len),
        None => Err(TableauError::SizeOverflow),
    }
}

/// Validate that every row has the same, non-zero length
///
/// Returns `(rows, cols)` on success. The first row fixes the expected width.
pub fn validate_shape<I>(row_lengths: I) -> Result<(usize, usize), TableauError>
where
    I: IntoIterator<Item = usize>,
{
    let mut rows = 0;
    let mut cols = 0;

    for (row, found) in row_lengths.into_iter().enumerate() {
        if row == 0 {
            cols = found;
        } else if found != cols {
            return Err(TableauError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    checked_len(rows, cols)?;
    Ok((rows, cols))
}
