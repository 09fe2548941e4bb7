//! Scalar distribution families.
//!
//! Each family is an immutable value type that binds its parameters once and
//! delegates to an external primitive:
//!
//! | Family | Parameters | Sampling | Density |
//! |---|---|---|---|
//! | [`DiscreteUniform`] | `min`, `max` | `rand::distributions::Uniform` | closed form |
//! | [`Exponential`] | `mu` (mean) | `rand_distr::Exp` | `statrs::distribution::Exp` |
//! | [`Normal`] | `mean`, `std_dev` | `rand_distr::Normal` | `statrs::distribution::Normal` |
//! | [`Poisson`] | `mu` | `rand_distr::Poisson` | `statrs::distribution::Poisson` |
//! | [`Gamma`] | `shape`, `scale` | `rand_distr::Gamma` | `statrs::distribution::Gamma` (rate = 1/scale) |
//!
//! Every family module also exposes free functions (`sample`, `sample_n`,
//! `pdf`) that take the parameters per call; they are equivalent to building
//! the instance and calling the trait method.
//!
//! [`Univariate`] wraps all families in one tagged enum for by-name dispatch.

pub mod discrete_uniform;
pub mod exponential;
pub mod gamma;
pub mod normal;
pub mod poisson;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

pub use discrete_uniform::DiscreteUniform;
pub use exponential::Exponential;
pub use gamma::Gamma;
pub use normal::Normal;
pub use poisson::Poisson;

use crate::error::DistributionError;
use crate::traits::{Density, Moments, Sampleable};

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter { name, value })
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter { name, value })
    }
}

/// Converts an integral float to `i64`, rejecting fractions and values
/// outside the `i64` range.
fn require_integer(name: &'static str, value: f64) -> Result<i64, DistributionError> {
    // 2^63 is exactly representable; anything at or above it overflows.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if value.is_finite() && value.fract() == 0.0 && value >= -LIMIT && value < LIMIT {
        Ok(value as i64)
    } else {
        Err(DistributionError::InvalidParameter { name, value })
    }
}

/// Distribution family identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Family {
    /// Integers uniform on `min..=max`
    DiscreteUniform,
    /// Exponential with mean `mu`
    Exponential,
    /// Gaussian with `mean`, `std_dev`
    Normal,
    /// Poisson with mean `mu`
    Poisson,
    /// Gamma with `shape`, `scale`
    Gamma,
}

impl Family {
    /// All families, in declaration order.
    pub const ALL: [Family; 5] = [
        Family::DiscreteUniform,
        Family::Exponential,
        Family::Normal,
        Family::Poisson,
        Family::Gamma,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Family::DiscreteUniform => "discrete-uniform",
            Family::Exponential => "exponential",
            Family::Normal => "normal",
            Family::Poisson => "poisson",
            Family::Gamma => "gamma",
        }
    }

    /// Parameter names in the order [`Univariate::from_params`] expects.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Family::DiscreteUniform => &["min", "max"],
            Family::Exponential => &["mu"],
            Family::Normal => &["mean", "std_dev"],
            Family::Poisson => &["mu"],
            Family::Gamma => &["shape", "scale"],
        }
    }

    /// Whether variates are integers.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Family::DiscreteUniform | Family::Poisson)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "discrete-uniform" | "uniform-int" | "randint" => Ok(Family::DiscreteUniform),
            "exponential" | "exp" => Ok(Family::Exponential),
            "normal" | "gaussian" => Ok(Family::Normal),
            "poisson" => Ok(Family::Poisson),
            "gamma" => Ok(Family::Gamma),
            _ => Err(DistributionError::UnknownFamily(s.to_string())),
        }
    }
}

/// Any scalar distribution, selected at runtime.
///
/// Variates and density arguments are widened to `f64`; integer families
/// report zero mass at non-integral points.
///
/// # Examples
///
/// ```
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::univariate::{Family, Univariate};
/// use sampler_distributions::{Density, Sampleable};
///
/// let dist = Univariate::from_params(Family::Poisson, &[2.0]).unwrap();
/// let mut rng = SamplerRng::from_seed(1);
/// assert_eq!(dist.sample_n(&mut rng, 4).len(), 4);
/// assert_eq!(dist.pdf(1.5), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Univariate {
    /// Discrete uniform
    DiscreteUniform(DiscreteUniform),
    /// Exponential
    Exponential(Exponential),
    /// Normal
    Normal(Normal),
    /// Poisson
    Poisson(Poisson),
    /// Gamma
    Gamma(Gamma),
}

impl Univariate {
    /// Builds a distribution from a family and positional parameters
    /// (see [`Family::parameter_names`]).
    ///
    /// # Errors
    ///
    /// - `DistributionError::WrongParameterCount` for the wrong arity
    /// - `DistributionError::InvalidParameter` / `InvalidRange` from the
    ///   family constructor
    pub fn from_params(family: Family, params: &[f64]) -> Result<Self, DistributionError> {
        let expected = family.parameter_names().len();
        if params.len() != expected {
            return Err(DistributionError::WrongParameterCount {
                family: family.name(),
                expected,
                got: params.len(),
            });
        }

        let dist = match family {
            Family::DiscreteUniform => {
                let min = require_integer("min", params[0])?;
                let max = require_integer("max", params[1])?;
                Univariate::DiscreteUniform(DiscreteUniform::new(min, max)?)
            }
            Family::Exponential => Univariate::Exponential(Exponential::new(params[0])?),
            Family::Normal => Univariate::Normal(Normal::new(params[0], params[1])?),
            Family::Poisson => Univariate::Poisson(Poisson::new(params[0])?),
            Family::Gamma => Univariate::Gamma(Gamma::new(params[0], params[1])?),
        };
        Ok(dist)
    }

    /// Family of the wrapped distribution.
    pub fn family(&self) -> Family {
        match self {
            Univariate::DiscreteUniform(_) => Family::DiscreteUniform,
            Univariate::Exponential(_) => Family::Exponential,
            Univariate::Normal(_) => Family::Normal,
            Univariate::Poisson(_) => Family::Poisson,
            Univariate::Gamma(_) => Family::Gamma,
        }
    }
}

impl Sampleable for Univariate {
    type Value = f64;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Univariate::DiscreteUniform(d) => d.sample(rng) as f64,
            Univariate::Exponential(d) => d.sample(rng),
            Univariate::Normal(d) => d.sample(rng),
            Univariate::Poisson(d) => d.sample(rng) as f64,
            Univariate::Gamma(d) => d.sample(rng),
        }
    }
}

impl Density for Univariate {
    type Support = f64;

    fn pdf(&self, x: f64) -> f64 {
        match self {
            Univariate::DiscreteUniform(d) => match require_integer("x", x) {
                Ok(k) => d.pdf(k),
                Err(_) => 0.0,
            },
            Univariate::Exponential(d) => d.pdf(x),
            Univariate::Normal(d) => d.pdf(x),
            Univariate::Poisson(d) => {
                if x >= 0.0 && x.fract() == 0.0 && x < u64::MAX as f64 {
                    d.pdf(x as u64)
                } else {
                    0.0
                }
            }
            Univariate::Gamma(d) => d.pdf(x),
        }
    }
}

impl Moments for Univariate {
    fn mean(&self) -> f64 {
        match self {
            Univariate::DiscreteUniform(d) => d.mean(),
            Univariate::Exponential(d) => d.mean(),
            Univariate::Normal(d) => d.mean(),
            Univariate::Poisson(d) => d.mean(),
            Univariate::Gamma(d) => d.mean(),
        }
    }

    fn variance(&self) -> f64 {
        match self {
            Univariate::DiscreteUniform(d) => d.variance(),
            Univariate::Exponential(d) => d.variance(),
            Univariate::Normal(d) => d.variance(),
            Univariate::Poisson(d) => d.variance(),
            Univariate::Gamma(d) => d.variance(),
        }
    }
}
