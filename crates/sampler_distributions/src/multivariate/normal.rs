//! Multivariate Gaussian sampling via Cholesky factorisation.
//!
//! ## Mathematical Background
//!
//! If `Z = [Z1, ..., Zn]` are independent standard normals and `L` is the
//! lower-triangular Cholesky factor of `Σ` (`Σ = L * L^T`), then
//!
//! ```text
//! X = μ + L * Z  ~  N(μ, Σ)
//! ```
//!
//! so a correlated draw needs only univariate standard-normal draws and a
//! triangular matrix-vector product.
//!
//! ## Ownership
//!
//! Covariance matrices are borrowed immutably. Factorisation happens on a
//! private clone owned by the call (or by a [`MultivariateNormal`]), so one
//! caller-owned matrix can be reused across any number of draws and threads.

use rand::Rng;
use sampler_core::math::linalg::{
    add_in_place, forward_substitute, lower_triangular_mul_in_place, Matrix,
};
use tracing::{debug, trace};

use crate::error::DistributionError;
use crate::traits::Sampleable;
use crate::univariate::normal::sample_standard;

/// Default relative tolerance for the covariance symmetry check.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-10;

/// ln(2π)
const LN_2PI: f64 = 1.837_877_066_409_345_5;

/// Checks shape, mean finiteness and symmetry before any numeric work.
fn validate(
    mean: &[f64],
    covariance: &Matrix<f64>,
    symmetry_tolerance: f64,
) -> Result<(), DistributionError> {
    if !covariance.is_square() {
        return Err(DistributionError::NotSquare {
            rows: covariance.rows(),
            cols: covariance.cols(),
        });
    }
    if mean.len() != covariance.rows() {
        return Err(DistributionError::DimensionMismatch {
            expected: covariance.rows(),
            got: mean.len(),
        });
    }
    if let Some(&value) = mean.iter().find(|m| !m.is_finite()) {
        return Err(DistributionError::InvalidParameter {
            name: "mean",
            value,
        });
    }
    if let Some((row, col)) = covariance.find_asymmetry(symmetry_tolerance) {
        debug!(row, col, "covariance matrix is not symmetric");
        return Err(DistributionError::NotSymmetric { row, col });
    }
    Ok(())
}

/// Clones the covariance into working storage and factorises the clone.
fn factorise(covariance: &Matrix<f64>) -> Result<Matrix<f64>, DistributionError> {
    let mut working = covariance.clone();
    working.cholesky_in_place().map_err(|err| {
        debug!(error = %err, "covariance factorisation failed");
        DistributionError::from(err)
    })?;
    Ok(working)
}

/// Fills a fresh vector with standard normals, transforms it by `factor` and
/// shifts it by `mean`.
fn draw<R: Rng + ?Sized>(
    rng: &mut R,
    mean: &[f64],
    factor: &Matrix<f64>,
) -> Result<Vec<f64>, DistributionError> {
    let mut x: Vec<f64> = (0..mean.len()).map(|_| sample_standard(rng)).collect();
    lower_triangular_mul_in_place(factor, &mut x)?;
    add_in_place(&mut x, mean)?;
    Ok(x)
}

/// Draws one vector from N(mean, covariance).
///
/// The covariance is copied, the copy is factorised, `n` standard normals are
/// drawn in index order, multiplied by the lower factor and shifted by the
/// mean. The working copy is dropped before returning.
///
/// # Errors
///
/// - `DistributionError::NotSquare` / `DimensionMismatch` when the shapes
///   disagree (checked first)
/// - `DistributionError::InvalidParameter` when a mean entry is NaN or
///   infinite
/// - `DistributionError::NotSymmetric` when `covariance` is asymmetric beyond
///   [`DEFAULT_SYMMETRY_TOLERANCE`]
/// - `DistributionError::NonPositiveDefiniteCovariance` when factorisation
///   fails
///
/// No vector is returned on failure.
///
/// # Examples
///
/// ```
/// use sampler_core::math::linalg::Matrix;
/// use sampler_distributions::multivariate::normal;
/// use sampler_distributions::rng::SamplerRng;
///
/// let cov = Matrix::from_rows(&[vec![1.0, 0.8], vec![0.8, 1.0]]).unwrap();
/// let mut rng = SamplerRng::from_seed(42);
///
/// let x = normal::sample(&mut rng, &[10.0, -10.0], &cov).unwrap();
/// assert_eq!(x.len(), 2);
/// ```
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    mean: &[f64],
    covariance: &Matrix<f64>,
) -> Result<Vec<f64>, DistributionError> {
    sample_with_tolerance(rng, mean, covariance, DEFAULT_SYMMETRY_TOLERANCE)
}

/// [`sample`] with an explicit symmetry tolerance.
///
/// # Errors
///
/// See [`sample`].
pub fn sample_with_tolerance<R: Rng + ?Sized>(
    rng: &mut R,
    mean: &[f64],
    covariance: &Matrix<f64>,
    symmetry_tolerance: f64,
) -> Result<Vec<f64>, DistributionError> {
    trace!(dim = mean.len(), "multivariate normal draw");
    validate(mean, covariance, symmetry_tolerance)?;
    let factor = factorise(covariance)?;
    draw(rng, mean, &factor)
}

/// Draws `n` vectors from N(mean, covariance), factorising once.
///
/// # Errors
///
/// See [`sample`].
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: &[f64],
    covariance: &Matrix<f64>,
) -> Result<Vec<Vec<f64>>, DistributionError> {
    let dist = MultivariateNormal::new(mean, covariance)?;
    Ok(dist.sample_n(rng, n))
}

/// Multivariate normal with a validated mean and a cached Cholesky factor.
///
/// Use this when drawing repeatedly from the same distribution; the free
/// [`sample`] function refactorises on every call.
///
/// # Examples
///
/// ```
/// use sampler_core::math::linalg::Matrix;
/// use sampler_distributions::multivariate::MultivariateNormal;
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::Sampleable;
///
/// let cov = Matrix::identity(3);
/// let mvn = MultivariateNormal::new(&[0.0, 1.0, 2.0], &cov).unwrap();
///
/// let mut rng = SamplerRng::from_seed(7);
/// let draws = mvn.sample_n(&mut rng, 100);
/// assert_eq!(draws.len(), 100);
/// assert!(mvn.pdf(&[0.0, 1.0, 2.0]).unwrap() > mvn.pdf(&[1.0, 1.0, 2.0]).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MultivariateNormal {
    mean: Vec<f64>,
    factor: Matrix<f64>,
    /// Σ ln L_ii, i.e. half of ln|Σ|
    half_log_det: f64,
}

impl MultivariateNormal {
    /// Validates and factorises `covariance` with the default symmetry
    /// tolerance. The caller's matrix is not modified.
    ///
    /// # Errors
    ///
    /// See [`sample`].
    pub fn new(mean: &[f64], covariance: &Matrix<f64>) -> Result<Self, DistributionError> {
        Self::with_tolerance(mean, covariance, DEFAULT_SYMMETRY_TOLERANCE)
    }

    /// Like [`MultivariateNormal::new`] with an explicit symmetry tolerance.
    ///
    /// # Errors
    ///
    /// See [`sample`].
    pub fn with_tolerance(
        mean: &[f64],
        covariance: &Matrix<f64>,
        symmetry_tolerance: f64,
    ) -> Result<Self, DistributionError> {
        validate(mean, covariance, symmetry_tolerance)?;
        let factor = factorise(covariance)?;
        let half_log_det = (0..factor.rows()).map(|i| factor.get(i, i).ln()).sum();
        debug!(dim = mean.len(), "prepared multivariate normal");
        Ok(Self {
            mean: mean.to_vec(),
            factor,
            half_log_det,
        })
    }

    /// Dimension n.
    #[inline]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Mean vector.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Lower-triangular Cholesky factor of the covariance.
    #[inline]
    pub fn cholesky_factor(&self) -> &Matrix<f64> {
        &self.factor
    }

    /// Covariance matrix reconstructed as `L * L^T`.
    pub fn covariance(&self) -> Matrix<f64> {
        self.factor
            .mul_transpose(&self.factor)
            .expect("Cholesky factor is square")
    }

    /// Log-density at `x`.
    ///
    /// Uses `ln|Σ| = 2 Σ ln L_ii` and the Mahalanobis term `|y|²` where
    /// `L y = x - μ`.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::DimensionMismatch` if `x.len() != dim()`.
    pub fn ln_pdf(&self, x: &[f64]) -> Result<f64, DistributionError> {
        if x.len() != self.dim() {
            return Err(DistributionError::DimensionMismatch {
                expected: self.dim(),
                got: x.len(),
            });
        }
        let mut y: Vec<f64> = x.iter().zip(&self.mean).map(|(a, m)| a - m).collect();
        forward_substitute(&self.factor, &mut y)?;
        let mahalanobis: f64 = y.iter().map(|v| v * v).sum();
        let n = self.dim() as f64;
        Ok(-0.5 * (n * LN_2PI + mahalanobis) - self.half_log_det)
    }

    /// Density at `x`.
    ///
    /// # Errors
    ///
    /// See [`MultivariateNormal::ln_pdf`].
    pub fn pdf(&self, x: &[f64]) -> Result<f64, DistributionError> {
        Ok(self.ln_pdf(x)?.exp())
    }
}

impl Sampleable for MultivariateNormal {
    type Value = Vec<f64>;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        draw(rng, &self.mean, &self.factor).expect("mean length matches the Cholesky factor")
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use rayon::prelude::*;

    use super::MultivariateNormal;
    use crate::rng::SamplerRng;
    use crate::traits::Sampleable;

    /// Draws per worker task.
    const CHUNK_SIZE: usize = 1024;

    impl MultivariateNormal {
        /// Draws `n` vectors in parallel.
        ///
        /// One child generator is forked from `rng` per chunk of 1024 draws
        /// before any work starts, so the output is
        /// reproducible for a seeded `rng` regardless of thread count. The
        /// stream differs from [`Sampleable::sample_n`] with the same seed.
        pub fn par_sample_n(&self, rng: &mut SamplerRng, n: usize) -> Vec<Vec<f64>> {
            let chunks: Vec<(usize, SamplerRng)> = (0..n)
                .step_by(CHUNK_SIZE)
                .map(|start| (CHUNK_SIZE.min(n - start), rng.fork()))
                .collect();

            chunks
                .into_par_iter()
                .flat_map_iter(|(len, mut child)| self.sample_n(&mut child, len))
                .collect()
        }
    }
}
