//! Poisson distribution adapter with mean `mu`.

use rand::Rng;
use rand_distr::Distribution;
use statrs::distribution::Discrete;

use super::require_positive;
use crate::error::DistributionError;
use crate::traits::{Density, Moments, Sampleable};

/// Poisson distribution over the non-negative integers.
///
/// # Examples
///
/// ```
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::univariate::Poisson;
/// use sampler_distributions::{Density, Sampleable};
///
/// let poisson = Poisson::new(3.0).unwrap();
/// let mut rng = SamplerRng::from_seed(9);
///
/// // Batch draws yield exactly n values.
/// assert_eq!(poisson.sample_n(&mut rng, 5).len(), 5);
/// assert!((poisson.pdf(0) - (-3.0_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Poisson {
    mu: f64,
    sampler: rand_distr::Poisson<f64>,
    mass: statrs::distribution::Poisson,
}

impl Poisson {
    /// Creates a Poisson distribution with mean `mu`.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `mu` is strictly
    /// positive and finite.
    pub fn new(mu: f64) -> Result<Self, DistributionError> {
        let mu = require_positive("mu", mu)?;
        let sampler = rand_distr::Poisson::new(mu)
            .map_err(|_| DistributionError::InvalidParameter { name: "mu", value: mu })?;
        let mass = statrs::distribution::Poisson::new(mu)
            .map_err(|_| DistributionError::InvalidParameter { name: "mu", value: mu })?;
        Ok(Self { mu, sampler, mass })
    }

    /// Mean parameter.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }
}

impl PartialEq for Poisson {
    fn eq(&self, other: &Self) -> bool {
        self.mu == other.mu
    }
}

impl Sampleable for Poisson {
    type Value = u64;

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        // The primitive yields integral floats.
        let k: f64 = Distribution::<f64>::sample(&self.sampler, rng);
        k as u64
    }
}

impl Density for Poisson {
    type Support = u64;

    /// Probability mass at `k`.
    #[inline]
    fn pdf(&self, k: u64) -> f64 {
        self.mass.pmf(k)
    }

    #[inline]
    fn ln_pdf(&self, k: u64) -> f64 {
        self.mass.ln_pmf(k)
    }
}

impl Moments for Poisson {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.mu
    }
}

/// Draws one variate with mean `mu`.
///
/// # Errors
///
/// See [`Poisson::new`].
pub fn sample<R: Rng + ?Sized>(rng: &mut R, mu: f64) -> Result<u64, DistributionError> {
    Ok(Poisson::new(mu)?.sample(rng))
}

/// Draws exactly `n` variates with mean `mu`.
///
/// # Errors
///
/// See [`Poisson::new`].
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mu: f64,
) -> Result<Vec<u64>, DistributionError> {
    Ok(Poisson::new(mu)?.sample_n(rng, n))
}

/// Probability mass at `k` for mean `mu`.
///
/// # Errors
///
/// See [`Poisson::new`].
pub fn pdf(k: u64, mu: f64) -> Result<f64, DistributionError> {
    Ok(Poisson::new(mu)?.pdf(k))
}
