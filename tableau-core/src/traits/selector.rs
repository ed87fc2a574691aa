//! Order-statistic selector interface
//!
//! Every selection strategy answers the same question, so the median engine
//! and the cross-checking harness can be written once against this trait.

use crate::error::{Result, TableauError};
use crate::validation::validate_rank;

/// Strategy that finds the k-th smallest entry of a sorted matrix
pub trait OrderStatistic {
    /// The element type returned by this selector
    type Element;

    /// Number of entries the selector ranks over
    fn len(&self) -> usize;

    /// Always false for a constructed matrix
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value of rank `k` in ascending order, `1 <= k <= len`
    fn kth_smallest(&self, k: usize) -> Result<Self::Element>;

    /// The value of rank `k` in descending order, `1 <= k <= len`
    fn kth_largest(&self, k: usize) -> Result<Self::Element> {
        let len = self.len();
        validate_rank(k, len)?;
        self.kth_smallest(len + 1 - k)
    }

    /// Ranks `k` and `k + 1` together
    ///
    /// Strategies that produce ranks in order can answer both in one pass.
    fn kth_smallest_pair(&self, k: usize) -> Result<(Self::Element, Self::Element)> {
        validate_rank(k, self.len())?;
        validate_rank(k + 1, self.len())?;
        Ok((self.kth_smallest(k)?, self.kth_smallest(k + 1)?))
    }
}

/// Which selection strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectorChoice {
    /// Binary search over the value range using rank counts
    #[default]
    BinarySearch,
    /// Lazy min-heap frontier from the top-left corner
    Frontier,
    /// Repeated in-place minimum extraction on a private copy
    Extraction,
    /// Flatten and sort; the reference oracle
    BruteForce,
}

impl SelectorChoice {
    /// Every strategy, oracle last
    pub const ALL: [SelectorChoice; 4] = [
        SelectorChoice::BinarySearch,
        SelectorChoice::Frontier,
        SelectorChoice::Extraction,
        SelectorChoice::BruteForce,
    ];

    /// Stable kebab-case name
    pub const fn name(&self) -> &'static str {
        match self {
            SelectorChoice::BinarySearch => "binary-search",
            SelectorChoice::Frontier => "frontier",
            SelectorChoice::Extraction => "extraction",
            SelectorChoice::BruteForce => "brute-force",
        }
    }
}

impl core::fmt::Display for SelectorChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

impl core::str::FromStr for SelectorChoice {
    type Err = TableauError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "binary-search" | "binary" | "search" => Ok(SelectorChoice::BinarySearch),
            "frontier" | "heap" => Ok(SelectorChoice::Frontier),
            "extraction" | "youngify" | "tournament" => Ok(SelectorChoice::Extraction),
            "brute-force" | "brute" | "sort" => Ok(SelectorChoice::BruteForce),
            _ => Err(TableauError::UnknownSelector),
        }
    }
}
