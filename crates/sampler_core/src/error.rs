//! Error types for structured error handling.
//!
//! This module provides:
//! - `LinalgError`: Errors from matrix construction and factorisation
//! - `StatisticsError`: Errors from array reductions

use thiserror::Error;

/// Linear algebra errors.
///
/// # Variants
/// - `InvalidDimensions`: Flat data length does not match `rows * cols`
/// - `NotSquare`: Operation requires a square matrix
/// - `NotPositiveDefinite`: Cholesky factorisation met a non-positive pivot
/// - `LengthMismatch`: Vector length does not match the matrix dimension
///
/// # Examples
/// ```
/// use sampler_core::error::LinalgError;
///
/// let err = LinalgError::NotPositiveDefinite { pivot_index: 1 };
/// assert_eq!(format!("{}", err), "Matrix is not positive definite (pivot 1)");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinalgError {
    /// Flat data length does not match the requested shape.
    #[error("Invalid matrix dimensions: expected {expected} elements, got {got}")]
    InvalidDimensions {
        /// Expected number of elements
        expected: usize,
        /// Number of elements supplied
        got: usize,
    },

    /// Operation requires a square matrix.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Cholesky factorisation encountered a zero, negative or non-finite pivot.
    #[error("Matrix is not positive definite (pivot {pivot_index})")]
    NotPositiveDefinite {
        /// Diagonal index at which the factorisation failed
        pivot_index: usize,
    },

    /// Vector length does not match the matrix dimension.
    #[error("Vector length {got} does not match matrix dimension {expected}")]
    LengthMismatch {
        /// Matrix dimension
        expected: usize,
        /// Vector length supplied
        got: usize,
    },
}

/// Array reduction errors.
///
/// Reductions over empty or zero-sum data fail explicitly rather than
/// propagating NaN or infinity.
///
/// # Examples
/// ```
/// use sampler_core::error::StatisticsError;
///
/// let err = StatisticsError::EmptyInput;
/// assert_eq!(format!("{}", err), "Empty input: reduction needs at least one element");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatisticsError {
    /// Input sequence is empty.
    #[error("Empty input: reduction needs at least one element")]
    EmptyInput,

    /// Input sequence sums to zero, so it cannot be normalised.
    #[error("Degenerate normalisation: input sums to zero")]
    ZeroSum,

    /// Too few observations for the requested estimator.
    #[error("Insufficient data: need at least {required} observations, got {got}")]
    InsufficientData {
        /// Minimum number of observations
        required: usize,
        /// Number of observations supplied
        got: usize,
    },

    /// Observations have inconsistent lengths.
    #[error("Ragged input: observation {index} has length {got}, expected {expected}")]
    RaggedInput {
        /// Index of the offending observation
        index: usize,
        /// Expected length (taken from the first observation)
        expected: usize,
        /// Actual length
        got: usize,
    },
}
