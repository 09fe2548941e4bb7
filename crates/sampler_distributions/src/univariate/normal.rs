//! Gaussian (normal) distribution adapter.
//!
//! Sampling delegates to `rand_distr::Normal`, density evaluation to
//! `statrs::distribution::Normal`.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use statrs::distribution::Continuous;

use super::{require_finite, require_positive};
use crate::error::DistributionError;
use crate::traits::{Density, Moments, Sampleable};

/// Normal distribution with bound mean and standard deviation.
///
/// # Examples
///
/// ```
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::univariate::Normal;
/// use sampler_distributions::{Density, Sampleable};
///
/// let normal = Normal::new(1.0, 2.0).unwrap();
/// let mut rng = SamplerRng::from_seed(42);
///
/// let draws = normal.sample_n(&mut rng, 10);
/// assert_eq!(draws.len(), 10);
/// assert!(normal.pdf(1.0) > normal.pdf(3.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
    sampler: rand_distr::Normal<f64>,
    density: statrs::distribution::Normal,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` if `mean` is not finite
    /// or `std_dev` is not strictly positive and finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        let mean = require_finite("mean", mean)?;
        let std_dev = require_positive("std_dev", std_dev)?;
        let sampler = rand_distr::Normal::new(mean, std_dev).map_err(|_| {
            DistributionError::InvalidParameter {
                name: "std_dev",
                value: std_dev,
            }
        })?;
        let density = statrs::distribution::Normal::new(mean, std_dev).map_err(|_| {
            DistributionError::InvalidParameter {
                name: "std_dev",
                value: std_dev,
            }
        })?;
        Ok(Self {
            mean,
            std_dev,
            sampler,
            density,
        })
    }
}

impl PartialEq for Normal {
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean && self.std_dev == other.std_dev
    }
}

impl Sampleable for Normal {
    type Value = f64;

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

impl Density for Normal {
    type Support = f64;

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    #[inline]
    fn ln_pdf(&self, x: f64) -> f64 {
        self.density.ln_pdf(x)
    }
}

impl Moments for Normal {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

/// Draws one standard normal variate (mean 0, std 1).
///
/// This is the building block the multivariate sampler feeds through the
/// Cholesky transform.
#[inline]
pub fn sample_standard<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Draws one variate from N(mean, std_dev²).
///
/// # Errors
///
/// See [`Normal::new`].
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
) -> Result<f64, DistributionError> {
    Ok(Normal::new(mean, std_dev)?.sample(rng))
}

/// Draws `n` variates from N(mean, std_dev²).
///
/// # Errors
///
/// See [`Normal::new`].
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Vec<f64>, DistributionError> {
    Ok(Normal::new(mean, std_dev)?.sample_n(rng, n))
}

/// Density of N(mean, std_dev²) at `x`.
///
/// # Errors
///
/// See [`Normal::new`].
pub fn pdf(x: f64, mean: f64, std_dev: f64) -> Result<f64, DistributionError> {
    Ok(Normal::new(mean, std_dev)?.pdf(x))
}
