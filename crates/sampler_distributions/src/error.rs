//! Error types for distribution construction and sampling.

use sampler_core::LinalgError;
use thiserror::Error;

/// Errors raised by distribution constructors and samplers.
///
/// All errors are raised synchronously where they are detected; none are
/// retried. A failed multivariate draw never yields a partial vector.
///
/// # Examples
/// ```
/// use sampler_distributions::DistributionError;
///
/// let err = DistributionError::InvalidRange { min: 5, max: 1 };
/// assert_eq!(format!("{}", err), "Invalid range: max (1) is less than min (5)");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Discrete uniform requested with `max < min`.
    #[error("Invalid range: max ({max}) is less than min ({min})")]
    InvalidRange {
        /// Lower bound supplied
        min: i64,
        /// Upper bound supplied
        max: i64,
    },

    /// A distribution parameter is outside its domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Mean vector length differs from the covariance dimension.
    #[error("Dimension mismatch: covariance is {expected}x{expected}, mean has length {got}")]
    DimensionMismatch {
        /// Covariance dimension
        expected: usize,
        /// Mean vector length
        got: usize,
    },

    /// Covariance matrix is not square.
    #[error("Covariance matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Covariance matrix is not symmetric within tolerance.
    #[error("Covariance matrix is not symmetric at ({row}, {col})")]
    NotSymmetric {
        /// Row of the first asymmetric entry
        row: usize,
        /// Column of the first asymmetric entry
        col: usize,
    },

    /// Cholesky factorisation of the covariance failed.
    #[error("Covariance matrix is not positive definite (pivot {pivot_index})")]
    NonPositiveDefiniteCovariance {
        /// Diagonal index at which factorisation failed
        pivot_index: usize,
    },

    /// Unknown distribution family name.
    #[error("Unknown distribution family: {0}")]
    UnknownFamily(String),

    /// Wrong number of parameters for a family.
    #[error("Family '{family}' takes {expected} parameter(s), got {got}")]
    WrongParameterCount {
        /// Family name
        family: &'static str,
        /// Expected parameter count
        expected: usize,
        /// Supplied parameter count
        got: usize,
    },
}

impl From<LinalgError> for DistributionError {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::NotPositiveDefinite { pivot_index } => {
                DistributionError::NonPositiveDefiniteCovariance { pivot_index }
            }
            LinalgError::NotSquare { rows, cols } => DistributionError::NotSquare { rows, cols },
            LinalgError::LengthMismatch { expected, got }
            | LinalgError::InvalidDimensions { expected, got } => {
                DistributionError::DimensionMismatch { expected, got }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_linalg_error() {
        assert_eq!(
            DistributionError::from(LinalgError::NotPositiveDefinite { pivot_index: 2 }),
            DistributionError::NonPositiveDefiniteCovariance { pivot_index: 2 }
        );
        assert_eq!(
            DistributionError::from(LinalgError::LengthMismatch {
                expected: 3,
                got: 2
            }),
            DistributionError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            DistributionError::from(LinalgError::NotSquare { rows: 2, cols: 3 }),
            DistributionError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_display() {
        let err = DistributionError::InvalidParameter {
            name: "std_dev",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid parameter 'std_dev': -1");

        let err = DistributionError::NonPositiveDefiniteCovariance { pivot_index: 0 };
        assert!(err.to_string().contains("not positive definite"));
    }
}
