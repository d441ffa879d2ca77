// File: crates/stats/src/error.rs
// Summary: Error type for density estimation and polynomial fitting.

use thiserror::Error;

/// Errors surfaced by the estimators.
///
/// All variants are precondition or solvability failures detected before or
/// during computation; a given invalid input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Sample or observation set contained no usable points.
    #[error("input is empty")]
    EmptyInput,

    /// Bandwidth must be positive and finite.
    #[error("invalid bandwidth: {0} (must be > 0 and finite)")]
    InvalidBandwidth(f64),

    /// Polynomial degree of zero terms is not a fit.
    #[error("invalid degree: {0}")]
    InvalidDegree(usize),

    /// The x and y inputs must have the same number of elements.
    #[error("length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs { x_len: usize, y_len: usize },

    /// The normal-equations matrix is singular or numerically near-singular.
    ///
    /// Typical cause: fewer distinct x-values than `degree + 1`.
    #[error("singular system: no usable pivot in column {column}")]
    SingularSystem { column: usize },
}
