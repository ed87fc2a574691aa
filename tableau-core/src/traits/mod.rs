//! Abstract interfaces for sorted matrix selection
//!
//! Element constraints, the read-only matrix view, and the selector
//! interface shared by every order-statistic strategy.

pub mod element;
pub mod matrix;
pub mod selector;

pub use element::MatrixElement;
pub use matrix::SortedMatrix;
pub use selector::{OrderStatistic, SelectorChoice};
