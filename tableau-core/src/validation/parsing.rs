//! Parsing utilities for rank arguments
//!
//! Rank ranges are written `start:end` or `start-end` and are inclusive on
//! both ends, matching the 1-based ranks the selectors accept.

use crate::TableauError;
use core::num::IntErrorKind;
use core::ops::RangeInclusive;

/// Parse an inclusive rank range such as `"1:25"` or `"3-7"`
///
/// A single number `"k"` yields `k..=k`.
pub fn parse_rank_range(range_str: &str) -> Result<RangeInclusive<usize>, TableauError> {
    let range_str = range_str.trim();
    if range_str.is_empty() {
        return Err(TableauError::InvalidRange);
    }

    let (start, end) = match range_str.find(|c: char| c == ':' || c == '-') {
        Some(pos) => (
            parse_usize(&range_str[..pos])?,
            parse_usize(&range_str[pos + 1..])?,
        ),
        None => {
            let k = parse_usize(range_str)?;
            (k, k)
        }
    };

    if start > end {
        return Err(TableauError::InvalidRange);
    }

    Ok(start..=end)
}

/// Parse a usize, telling overflow apart from malformed input
fn parse_usize(s: &str) -> Result<usize, TableauError> {
    s.trim().parse::<usize>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => TableauError::SizeOverflow,
        _ => TableauError::InvalidRange,
    })
}
