//! Sampler configuration.
//!
//! [`SamplerConfig`] bundles the knobs shared by every sampling entry point:
//! the seed, the covariance symmetry tolerance and an upper bound on batch
//! sizes. Use [`SamplerConfigBuilder`] to construct instances.

use thiserror::Error;

use crate::multivariate::DEFAULT_SYMMETRY_TOLERANCE;
use crate::rng::SamplerRng;

/// Default upper bound on a single batch request.
pub const DEFAULT_MAX_BATCH: usize = 10_000_000;

/// Configuration validation error.
///
/// # Variants
///
/// - `InvalidTolerance`: symmetry tolerance negative or non-finite
/// - `InvalidMaxBatch`: batch bound of zero
/// - `BatchTooLarge`: a request exceeded the configured bound
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Symmetry tolerance must be finite and non-negative.
    #[error("Invalid symmetry tolerance {0}: must be finite and >= 0")]
    InvalidTolerance(f64),

    /// Batch bound must be at least one.
    #[error("Invalid max batch {0}: must be >= 1")]
    InvalidMaxBatch(usize),

    /// Requested batch exceeds the configured bound.
    #[error("Batch of {requested} exceeds the maximum of {max}")]
    BatchTooLarge {
        /// Requested draw count
        requested: usize,
        /// Configured bound
        max: usize,
    },
}

/// Validated sampler configuration.
///
/// # Examples
///
/// ```rust
/// use sampler_distributions::config::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .max_batch(1_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.check_batch(1_000).is_ok());
/// assert!(config.check_batch(1_001).is_err());
///
/// let mut rng = config.rng();
/// assert_eq!(rng.seed(), 42);
/// # let _ = rng.gen_uniform();
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SamplerConfigBuilder"))]
pub struct SamplerConfig {
    /// Seed for reproducible runs; `None` draws from OS entropy.
    seed: Option<u64>,
    /// Relative tolerance for covariance symmetry.
    symmetry_tolerance: f64,
    /// Upper bound on a single batch request.
    max_batch: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            symmetry_tolerance: DEFAULT_SYMMETRY_TOLERANCE,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the symmetry tolerance.
    #[inline]
    pub fn symmetry_tolerance(&self) -> f64 {
        self.symmetry_tolerance
    }

    /// Returns the batch bound.
    #[inline]
    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// Creates a generator: seeded if a seed is configured, otherwise from
    /// entropy (the chosen seed is still recoverable via
    /// [`SamplerRng::seed`]).
    pub fn rng(&self) -> SamplerRng {
        match self.seed {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `symmetry_tolerance` is negative or non-finite
    /// - `max_batch` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.symmetry_tolerance.is_finite() && self.symmetry_tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.symmetry_tolerance));
        }
        if self.max_batch == 0 {
            return Err(ConfigError::InvalidMaxBatch(self.max_batch));
        }
        Ok(())
    }

    /// Checks a requested draw count against the batch bound.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BatchTooLarge` if `n > max_batch`.
    pub fn check_batch(&self, n: usize) -> Result<(), ConfigError> {
        if n > self.max_batch {
            return Err(ConfigError::BatchTooLarge {
                requested: n,
                max: self.max_batch,
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Unset fields fall back to the [`SamplerConfig`] defaults. With the `serde`
/// feature, deserialised configurations pass through this builder and are
/// validated the same way.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfigBuilder {
    seed: Option<u64>,
    symmetry_tolerance: Option<f64>,
    max_batch: Option<usize>,
}

impl SamplerConfigBuilder {
    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed if one is given; `None` leaves the builder unchanged.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Sets the relative symmetry tolerance for covariance matrices.
    #[inline]
    pub fn symmetry_tolerance(mut self, tolerance: f64) -> Self {
        self.symmetry_tolerance = Some(tolerance);
        self
    }

    /// Sets the batch bound.
    #[inline]
    pub fn max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = Some(max_batch);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// See [`SamplerConfig::validate`].
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let defaults = SamplerConfig::default();
        let config = SamplerConfig {
            seed: self.seed,
            symmetry_tolerance: self
                .symmetry_tolerance
                .unwrap_or(defaults.symmetry_tolerance),
            max_batch: self.max_batch.unwrap_or(defaults.max_batch),
        };
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<SamplerConfigBuilder> for SamplerConfig {
    type Error = ConfigError;

    fn try_from(builder: SamplerConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::builder().build().unwrap();
        assert_eq!(config, SamplerConfig::default());
        assert_eq!(config.seed(), None);
        assert_eq!(config.symmetry_tolerance(), 1e-10);
        assert_eq!(config.max_batch(), DEFAULT_MAX_BATCH);
    }

    #[test]
    fn test_invalid_tolerance() {
        for tol in [-1e-3, f64::NAN, f64::INFINITY] {
            let err = SamplerConfig::builder()
                .symmetry_tolerance(tol)
                .build()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTolerance(_)));
        }
        assert!(SamplerConfig::builder()
            .symmetry_tolerance(0.0)
            .build()
            .is_ok());
    }

    #[test]
    fn test_invalid_max_batch() {
        assert_eq!(
            SamplerConfig::builder().max_batch(0).build(),
            Err(ConfigError::InvalidMaxBatch(0))
        );
    }

    #[test]
    fn test_check_batch() {
        let config = SamplerConfig::builder().max_batch(10).build().unwrap();
        assert!(config.check_batch(0).is_ok());
        assert!(config.check_batch(10).is_ok());
        assert_eq!(
            config.check_batch(11),
            Err(ConfigError::BatchTooLarge {
                requested: 11,
                max: 10
            })
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SamplerConfig::builder().seed(77).build().unwrap();
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.seed(), 77);
        assert_eq!(a.gen_uniform(), b.gen_uniform());
    }

    #[test]
    fn test_maybe_seed() {
        let config = SamplerConfig::builder()
            .seed(1)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), Some(1));

        let config = SamplerConfig::builder().maybe_seed(Some(2)).build().unwrap();
        assert_eq!(config.seed(), Some(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_validates() {
        let config: SamplerConfig =
            serde_json::from_str(r#"{"seed": 9, "max_batch": 50}"#).unwrap();
        assert_eq!(config.seed(), Some(9));
        assert_eq!(config.max_batch(), 50);
        assert_eq!(config.symmetry_tolerance(), DEFAULT_SYMMETRY_TOLERANCE);

        let err = serde_json::from_str::<SamplerConfig>(r#"{"max_batch": 0}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid max batch 0"));

        let err = serde_json::from_str::<SamplerConfig>(r#"{"symmetry_tolerance": -1.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid symmetry tolerance"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialise_round_trips_through_validation() {
        let config = SamplerConfig::builder().seed(4).max_batch(12).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: SamplerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_try_from_builder() {
        let builder = SamplerConfig::builder().max_batch(0);
        assert_eq!(
            SamplerConfig::try_from(builder),
            Err(ConfigError::InvalidMaxBatch(0))
        );
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::BatchTooLarge {
            requested: 5,
            max: 4,
        };
        assert_eq!(err.to_string(), "Batch of 5 exceeds the maximum of 4");
    }
}
