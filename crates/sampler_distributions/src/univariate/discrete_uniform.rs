//! Discrete uniform distribution over an inclusive integer range.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::DistributionError;
use crate::traits::{Density, Moments, Sampleable};

/// Uniform distribution over the integers `min..=max`.
///
/// # Examples
///
/// ```
/// use sampler_distributions::rng::SamplerRng;
/// use sampler_distributions::univariate::DiscreteUniform;
/// use sampler_distributions::{DistributionError, Sampleable};
///
/// let die = DiscreteUniform::new(1, 6).unwrap();
/// let mut rng = SamplerRng::from_seed(6);
/// let roll = die.sample(&mut rng);
/// assert!((1..=6).contains(&roll));
///
/// assert_eq!(
///     DiscreteUniform::new(6, 1),
///     Err(DistributionError::InvalidRange { min: 6, max: 1 })
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DiscreteUniform {
    min: i64,
    max: i64,
    sampler: Uniform<i64>,
}

impl DiscreteUniform {
    /// Creates a discrete uniform distribution on `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidRange` when `max < min`. The bounds
    /// are never swapped.
    pub fn new(min: i64, max: i64) -> Result<Self, DistributionError> {
        if max < min {
            return Err(DistributionError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            sampler: Uniform::new_inclusive(min, max),
        })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of support points, computed without overflow.
    fn width(&self) -> f64 {
        (i128::from(self.max) - i128::from(self.min) + 1) as f64
    }

    /// Whether `k` lies in the support.
    #[inline]
    pub fn contains(&self, k: i64) -> bool {
        (self.min..=self.max).contains(&k)
    }
}

impl PartialEq for DiscreteUniform {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl Sampleable for DiscreteUniform {
    type Value = i64;

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.sampler.sample(rng)
    }
}

impl Density for DiscreteUniform {
    type Support = i64;

    /// Probability mass `1 / (max - min + 1)` inside the range, zero outside.
    fn pdf(&self, k: i64) -> f64 {
        if self.contains(k) {
            1.0 / self.width()
        } else {
            0.0
        }
    }
}

impl Moments for DiscreteUniform {
    fn mean(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }

    fn variance(&self) -> f64 {
        let n = self.width();
        (n * n - 1.0) / 12.0
    }
}

/// Draws one integer uniformly from `min..=max`.
///
/// # Errors
///
/// Returns `DistributionError::InvalidRange` when `max < min`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64, DistributionError> {
    Ok(DiscreteUniform::new(min, max)?.sample(rng))
}

/// Draws `n` integers uniformly from `min..=max`, in index order.
///
/// # Errors
///
/// Returns `DistributionError::InvalidRange` when `max < min`, even for
/// `n == 0`.
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, DistributionError> {
    Ok(DiscreteUniform::new(min, max)?.sample_n(rng, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;
    use proptest::prelude::*;

    #[test]
    fn test_invalid_range_is_error() {
        let mut rng = SamplerRng::from_seed(0);
        assert_eq!(
            sample(&mut rng, 10, 9),
            Err(DistributionError::InvalidRange { min: 10, max: 9 })
        );
        assert!(sample_n(&mut rng, 0, 1, 0).is_err());
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = SamplerRng::from_seed(0);
        let draws = sample_n(&mut rng, 50, 4, 4).unwrap();
        assert!(draws.iter().all(|&k| k == 4));
    }

    #[test]
    fn test_full_range_does_not_overflow() {
        let full = DiscreteUniform::new(i64::MIN, i64::MAX).unwrap();
        let mut rng = SamplerRng::from_seed(1);
        let _ = full.sample(&mut rng);
        assert!(full.pdf(0) > 0.0);
        assert!(full.mean().abs() < 1.0);
    }

    #[test]
    fn test_every_value_hit() {
        let die = DiscreteUniform::new(-2, 2).unwrap();
        let mut rng = SamplerRng::from_seed(17);
        let mut counts = [0usize; 5];
        for k in die.sample_n(&mut rng, 5_000) {
            counts[(k + 2) as usize] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            assert!(c > 850 && c < 1150, "value {} drawn {} times", i as i64 - 2, c);
        }
    }

    #[test]
    fn test_pmf() {
        let die = DiscreteUniform::new(1, 4).unwrap();
        assert_eq!(die.pdf(2), 0.25);
        assert_eq!(die.pdf(0), 0.0);
        assert_eq!(die.pdf(5), 0.0);
        assert_eq!(die.variance(), 15.0 / 12.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_draw_within_bounds(
            seed in any::<u64>(),
            min in -1_000_000i64..1_000_000,
            width in 0i64..1_000,
        ) {
            let max = min + width;
            let mut rng = SamplerRng::from_seed(seed);
            let v = sample(&mut rng, min, max).unwrap();
            prop_assert!(min <= v && v <= max);
        }

        #[test]
        fn prop_reversed_range_rejected(
            min in -1_000_000i64..1_000_000,
            gap in 1i64..1_000,
        ) {
            let mut rng = SamplerRng::from_seed(0);
            prop_assert_eq!(
                sample(&mut rng, min, min - gap),
                Err(DistributionError::InvalidRange { min, max: min - gap })
            );
        }

        #[test]
        fn prop_batch_length(n in 0usize..200) {
            let mut rng = SamplerRng::from_seed(n as u64);
            prop_assert_eq!(sample_n(&mut rng, n, -5, 5).unwrap().len(), n);
        }
    }
}
