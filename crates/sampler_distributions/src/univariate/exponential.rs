//! Exponential distribution adapter, parameterised by its mean `mu`.
//!
//! The primitives take a rate, so `rate = 1 / mu` is derived once at
//! construction. Density is `exp(-x / mu) / mu` for `x >= 0` and zero
//! otherwise.

use rand::Rng;
use rand_distr::{Distribution, Exp};
use statrs::distribution::Continuous;

use super::require_positive;
use crate::error::DistributionError;
use crate::traits::{Density, Moments, Sampleable};

/// Exponential distribution with mean `mu`.
///
/// # Examples
///
/// ```
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::univariate::Exponential;
/// use sampler_distributions::{Density, Sampleable};
///
/// let exp = Exponential::new(2.0).unwrap();
/// let mut rng = SamplerRng::from_seed(3);
/// assert!(exp.sample(&mut rng) >= 0.0);
/// assert_eq!(exp.pdf(0.0), 0.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Exponential {
    mu: f64,
    sampler: Exp<f64>,
    density: statrs::distribution::Exp,
}

impl Exponential {
    /// Creates an exponential distribution with mean `mu`.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `mu` is strictly
    /// positive and finite.
    pub fn new(mu: f64) -> Result<Self, DistributionError> {
        let mu = require_positive("mu", mu)?;
        let rate = 1.0 / mu;
        let sampler = Exp::new(rate).map_err(|_| DistributionError::InvalidParameter {
            name: "mu",
            value: mu,
        })?;
        let density = statrs::distribution::Exp::new(rate).map_err(|_| {
            DistributionError::InvalidParameter {
                name: "mu",
                value: mu,
            }
        })?;
        Ok(Self {
            mu,
            sampler,
            density,
        })
    }

    /// Mean parameter.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Rate `1 / mu` handed to the primitives.
    #[inline]
    pub fn rate(&self) -> f64 {
        1.0 / self.mu
    }
}

impl PartialEq for Exponential {
    fn eq(&self, other: &Self) -> bool {
        self.mu == other.mu
    }
}

impl Sampleable for Exponential {
    type Value = f64;

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

impl Density for Exponential {
    type Support = f64;

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }
}

impl Moments for Exponential {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.mu * self.mu
    }
}

/// Draws one variate with mean `mu`.
///
/// # Errors
///
/// See [`Exponential::new`].
pub fn sample<R: Rng + ?Sized>(rng: &mut R, mu: f64) -> Result<f64, DistributionError> {
    Ok(Exponential::new(mu)?.sample(rng))
}

/// Draws `n` variates with mean `mu`.
///
/// # Errors
///
/// See [`Exponential::new`].
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mu: f64,
) -> Result<Vec<f64>, DistributionError> {
    Ok(Exponential::new(mu)?.sample_n(rng, n))
}

/// Density at `x` for mean `mu`.
///
/// # Errors
///
/// See [`Exponential::new`].
pub fn pdf(x: f64, mu: f64) -> Result<f64, DistributionError> {
    Ok(Exponential::new(mu)?.pdf(x))
}
