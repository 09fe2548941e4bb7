//! Dense linear algebra for covariance handling.
//!
//! ## Mathematical Background
//!
//! A symmetric positive-definite matrix `Σ` admits a unique factorisation
//!
//! ```text
//! Σ = L * L^T
//! ```
//!
//! where `L` is lower triangular with a strictly positive diagonal. Given
//! independent standard normals `Z`, the vector `L * Z` has covariance `Σ`.
//!
//! All routines here are written from scratch over a row-major [`Matrix`];
//! no external linear-algebra library is involved.
//!
//! ## Usage
//!
//! ```
//! use sampler_core::math::linalg::{lower_triangular_mul_in_place, Matrix};
//!
//! let cov = Matrix::new(2, 2, vec![1.0_f64, 0.5, 0.5, 1.0]).unwrap();
//! let factor = cov.cholesky().unwrap();
//!
//! let mut z = [0.5_f64, 0.8];
//! lower_triangular_mul_in_place(&factor, &mut z).unwrap();
//! assert_eq!(z[0], 0.5);
//! ```

use crate::error::LinalgError;
use crate::traits::Float;

/// Dense matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use sampler_core::math::linalg::Matrix;
///
/// let m = Matrix::<f64>::identity(3);
/// assert_eq!(m.rows(), 3);
/// assert_eq!(m.get(1, 1), 1.0);
/// assert_eq!(m.get(0, 2), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T: Float> {
    /// Elements in row-major order
    data: Vec<T>,
    /// Row count
    rows: usize,
    /// Column count
    cols: usize,
}

impl<T: Float> Matrix<T> {
    /// Creates a matrix from flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimensions` if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(LinalgError::InvalidDimensions {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// An empty slice yields a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimensions` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, LinalgError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(LinalgError::InvalidDimensions {
                    expected: n_rows * n_cols,
                    got: rows.iter().map(Vec::len).sum(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(n_rows, n_cols, data)
    }

    /// Creates an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Creates the n x n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (i, j).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        self.data[i * self.cols + j]
    }

    /// Set element at (i, j).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        self.data[i * self.cols + j] = value;
    }

    /// Elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the first off-diagonal pair `(i, j)` with `i < j` whose
    /// entries differ by more than `tolerance` relative to their magnitude.
    ///
    /// Returns `None` for symmetric (and for non-square) matrices; callers
    /// check squareness separately.
    pub fn find_asymmetry(&self, tolerance: T) -> Option<(usize, usize)> {
        if !self.is_square() {
            return None;
        }
        let n = self.rows;
        for i in 0..n {
            for j in (i + 1)..n {
                let a = self.get(i, j);
                let b = self.get(j, i);
                let scale = a.abs().max(b.abs()).max(T::min_positive_value());
                // NaN entries fail the comparison and count as asymmetric.
                if !((a - b).abs() <= tolerance * scale) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Whether the matrix is square and symmetric within `tolerance`.
    pub fn is_symmetric(&self, tolerance: T) -> bool {
        self.is_square() && self.find_asymmetry(tolerance).is_none()
    }

    /// Overwrites this matrix with its lower-triangular Cholesky factor.
    ///
    /// Only the lower triangle (including the diagonal) is read; the strict
    /// upper triangle is zeroed on success. On failure the contents are
    /// partially overwritten and must be discarded.
    ///
    /// # Errors
    ///
    /// - `LinalgError::NotSquare` for non-square input
    /// - `LinalgError::NotPositiveDefinite` when a pivot is zero, negative or
    ///   non-finite
    pub fn cholesky_in_place(&mut self) -> Result<(), LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let a = &mut self.data;

        for j in 0..n {
            let mut diag = a[j * n + j];
            for k in 0..j {
                let l_jk = a[j * n + k];
                diag = diag - l_jk * l_jk;
            }
            if !(diag > T::zero()) || !diag.is_finite() {
                return Err(LinalgError::NotPositiveDefinite { pivot_index: j });
            }
            let l_jj = diag.sqrt();
            a[j * n + j] = l_jj;

            for i in (j + 1)..n {
                let mut sum = a[i * n + j];
                for k in 0..j {
                    sum = sum - a[i * n + k] * a[j * n + k];
                }
                a[i * n + j] = sum / l_jj;
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                a[i * n + j] = T::zero();
            }
        }

        Ok(())
    }

    /// Returns the lower-triangular Cholesky factor, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// See [`Matrix::cholesky_in_place`].
    pub fn cholesky(&self) -> Result<Self, LinalgError> {
        let mut factor = self.clone();
        factor.cholesky_in_place()?;
        Ok(factor)
    }

    /// Matrix product `self * other^T`.
    ///
    /// Used to reconstruct `L * L^T` from a Cholesky factor.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::LengthMismatch` if column counts differ.
    pub fn mul_transpose(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.cols != other.cols {
            return Err(LinalgError::LengthMismatch {
                expected: self.cols,
                got: other.cols,
            });
        }
        let mut out = Self::zeros(self.rows, other.rows);
        for i in 0..self.rows {
            for j in 0..other.rows {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.get(i, k) * other.get(j, k);
                }
                out.data[i * other.rows + j] = sum;
            }
        }
        Ok(out)
    }
}

fn check_length<T: Float>(factor: &Matrix<T>, len: usize) -> Result<(), LinalgError> {
    if !factor.is_square() {
        return Err(LinalgError::NotSquare {
            rows: factor.rows(),
            cols: factor.cols(),
        });
    }
    if len != factor.rows() {
        return Err(LinalgError::LengthMismatch {
            expected: factor.rows(),
            got: len,
        });
    }
    Ok(())
}

/// Computes `x <- L * x` for a lower-triangular `L` (no transpose, non-unit
/// diagonal).
///
/// Entries above the diagonal of `lower` are ignored. Rows are processed from
/// last to first so every row reads inputs that have not been overwritten.
///
/// # Errors
///
/// Returns `LinalgError::NotSquare` or `LinalgError::LengthMismatch` when the
/// shapes disagree.
///
/// # Examples
///
/// ```
/// use sampler_core::math::linalg::{lower_triangular_mul_in_place, Matrix};
///
/// let l = Matrix::new(2, 2, vec![2.0_f64, 0.0, 1.0, 3.0]).unwrap();
/// let mut x = [1.0_f64, 1.0];
/// lower_triangular_mul_in_place(&l, &mut x).unwrap();
/// assert_eq!(x, [2.0, 4.0]);
/// ```
pub fn lower_triangular_mul_in_place<T: Float>(
    lower: &Matrix<T>,
    x: &mut [T],
) -> Result<(), LinalgError> {
    check_length(lower, x.len())?;

    let n = x.len();
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in 0..=i {
            sum = sum + lower.get(i, j) * x[j];
        }
        x[i] = sum;
    }
    Ok(())
}

/// Solves `L * y = b` in place by forward substitution (`b` is overwritten
/// with `y`).
///
/// # Errors
///
/// Returns `LinalgError::NotSquare` or `LinalgError::LengthMismatch` when the
/// shapes disagree.
pub fn forward_substitute<T: Float>(lower: &Matrix<T>, b: &mut [T]) -> Result<(), LinalgError> {
    check_length(lower, b.len())?;

    let n = b.len();
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - lower.get(i, j) * b[j];
        }
        b[i] = sum / lower.get(i, i);
    }
    Ok(())
}

/// Elementwise `x <- x + y`.
///
/// # Errors
///
/// Returns `LinalgError::LengthMismatch` if the slices differ in length.
pub fn add_in_place<T: Float>(x: &mut [T], y: &[T]) -> Result<(), LinalgError> {
    if x.len() != y.len() {
        return Err(LinalgError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    for (xi, &yi) in x.iter_mut().zip(y) {
        *xi = *xi + yi;
    }
    Ok(())
}
