#![no_std]

//! Tableau Core - Sorted Matrix Selection Definitions
//!
//! This crate provides the element and matrix traits, the error taxonomy and
//! the allocation-free staircase walks (rank counting and bound finding) that
//! the selection engine in `tableau` is built on.

pub mod cell;
pub mod error;
pub mod staircase;
pub mod traits;
pub mod validation;

pub use cell::*;
pub use error::*;
pub use staircase::{
    staircase_count, BoundFinder, Corner, RankCounter, RankSummary, Threshold, WalkOutcome,
};
pub use traits::*;
pub use validation::{checked_len, parse_rank_range, validate_rank, validate_shape};
