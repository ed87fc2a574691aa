//! Validation utilities for sorted matrices
//!
//! Pure functions with no allocation: shape checks, rank checks and parsing
//! of rank-range strings.

pub mod parsing;
pub mod rank;
pub mod shape;

pub use parsing::parse_rank_range;
pub use rank::validate_rank;
pub use shape::{checked_len, validate_shape};
