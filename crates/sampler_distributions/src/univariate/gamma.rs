//! Gamma distribution adapter in shape/scale form.
//!
//! The density primitive (`statrs`) is parameterised by shape and *rate*, so
//! `rate = 1 / scale` is derived before delegating. Swapping rate and scale
//! would silently change the distribution; the mean is always
//! `shape * scale`. Sampling goes through `rand_distr::Gamma`, which takes
//! shape and scale directly.

use rand::Rng;
use rand_distr::Distribution;
use statrs::distribution::Continuous;

use super::require_positive;
use crate::error::DistributionError;
use crate::traits::{Density, Moments, Sampleable};

/// Gamma distribution with bound shape `k` and scale `θ`.
///
/// # Examples
///
/// ```
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::univariate::Gamma;
/// use sampler_distributions::{Moments, Sampleable};
///
/// let gamma = Gamma::new(2.0, 3.0).unwrap();
/// assert_eq!(gamma.mean(), 6.0);
/// assert_eq!(gamma.rate(), 1.0 / 3.0);
///
/// let mut rng = SamplerRng::from_seed(1);
/// assert!(gamma.sample(&mut rng) > 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Gamma {
    shape: f64,
    scale: f64,
    sampler: rand_distr::Gamma<f64>,
    density: statrs::distribution::Gamma,
}

impl Gamma {
    /// Creates a Gamma distribution from shape and scale.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless both parameters
    /// are strictly positive and finite.
    pub fn new(shape: f64, scale: f64) -> Result<Self, DistributionError> {
        let shape = require_positive("shape", shape)?;
        let scale = require_positive("scale", scale)?;
        let rate = 1.0 / scale;

        let sampler = rand_distr::Gamma::new(shape, scale).map_err(|_| {
            DistributionError::InvalidParameter {
                name: "shape",
                value: shape,
            }
        })?;
        let density = statrs::distribution::Gamma::new(shape, rate).map_err(|_| {
            DistributionError::InvalidParameter {
                name: "scale",
                value: scale,
            }
        })?;

        Ok(Self {
            shape,
            scale,
            sampler,
            density,
        })
    }

    /// Shape parameter `k`.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter `θ`.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rate `1 / θ` handed to the density primitive.
    #[inline]
    pub fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

impl PartialEq for Gamma {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.scale == other.scale
    }
}

impl Sampleable for Gamma {
    type Value = f64;

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

impl Density for Gamma {
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

impl Moments for Gamma {
    fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }
}

/// Draws one variate from Gamma(shape, scale).
///
/// # Errors
///
/// See [`Gamma::new`].
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    shape: f64,
    scale: f64,
) -> Result<f64, DistributionError> {
    Ok(Gamma::new(shape, scale)?.sample(rng))
}

/// Draws `n` variates from Gamma(shape, scale).
///
/// # Errors
///
/// See [`Gamma::new`].
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    shape: f64,
    scale: f64,
) -> Result<Vec<f64>, DistributionError> {
    Ok(Gamma::new(shape, scale)?.sample_n(rng, n))
}

/// Density of Gamma(shape, scale) at `x`.
///
/// # Errors
///
/// See [`Gamma::new`].
pub fn pdf(x: f64, shape: f64, scale: f64) -> Result<f64, DistributionError> {
    Ok(Gamma::new(shape, scale)?.pdf(x))
}
