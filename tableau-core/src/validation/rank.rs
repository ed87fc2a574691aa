//! Rank argument validation

use crate::TableauError;

/// Check that `k` is a valid 1-based rank for `len` entries
pub const fn validate_rank(k: usize, len: usize) -> Result<(), TableauError> {
    if k == 0 || k > len {
        return Err(TableauError::RankOutOfRange { k, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rank() {
        assert_eq!(validate_rank(1, 1), Ok(()));
        assert_eq!(validate_rank(25, 25), Ok(()));
        assert_eq!(
            validate_rank(0, 25),
            Err(TableauError::RankOutOfRange { k: 0, len: 25 })
        );
        assert_eq!(
            validate_rank(26, 25),
            Err(TableauError::RankOutOfRange { k: 26, len: 25 })
        );
    }
}
