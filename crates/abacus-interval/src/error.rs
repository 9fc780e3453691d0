//! Error types for the interval crate.

use thiserror::Error;

/// Errors produced while configuring or running a merge.
#[derive(Debug, Error, PartialEq)]
pub enum IntervalError {
    /// The merge threshold is outside `[0, 1)` or not finite.
    #[error("invalid merge threshold {0}: expected a finite value in [0, 1)")]
    InvalidThreshold(f64),

    /// An interval has `left > right` or a non-finite edge.
    #[error("invalid interval at index {index}: [{left}, {right}]")]
    InvalidInterval { index: usize, left: f64, right: f64 },

    /// An interval has `left == right` and the policy rejects it.
    #[error("zero-width interval at index {index}: [{position}, {position}]")]
    ZeroWidth { index: usize, position: f64 },
}

/// Convenience alias for interval results.
pub type IntervalResult<T> = Result<T, IntervalError>;
