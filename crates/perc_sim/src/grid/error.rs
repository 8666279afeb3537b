//! Error types for the percolation grid.

use thiserror::Error;

/// Errors surfaced by grid construction and site operations.
///
/// Both variants are programmer errors in the sense of the grid contract:
/// they are reported immediately, nothing is retried, and a failed call
/// leaves the grid state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Side length outside the valid range (must be at least 1).
    #[error("grid side length must be greater than 0, got {0}")]
    InvalidSideLength(usize),

    /// Row or column outside `[1, side]`.
    #[error("site ({row}, {col}) is outside the grid; both coordinates must be in [1, {side}]")]
    SiteOutOfBounds {
        /// 1-indexed row passed by the caller.
        row: usize,
        /// 1-indexed column passed by the caller.
        col: usize,
        /// Side length of the grid that rejected the site.
        side: usize,
    },
}
