//! Sampling and density interfaces shared by every distribution family.
//!
//! Each family is a small value type implementing these traits, so new
//! families are added without touching a shared base type. Dispatch is
//! static; the [`Univariate`](crate::univariate::Univariate) enum covers the
//! by-name case.

use rand::Rng;

/// Draws variates from a distribution.
pub trait Sampleable {
    /// Type of a single variate.
    type Value;

    /// Draws one variate.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Value;

    /// Draws exactly `n` independent variates by calling
    /// [`Sampleable::sample`] `n` times in order.
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Self::Value> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

/// Evaluates a probability density (continuous) or mass (discrete) function.
///
/// Evaluation is pure and independent of any RNG state.
pub trait Density {
    /// Point type the density is evaluated at.
    type Support;

    /// Density or mass at `x`.
    fn pdf(&self, x: Self::Support) -> f64;

    /// Natural logarithm of the density or mass at `x`.
    fn ln_pdf(&self, x: Self::Support) -> f64 {
        self.pdf(x).ln()
    }
}

/// Analytic first and second moments.
pub trait Moments {
    /// Expected value.
    fn mean(&self) -> f64;

    /// Variance.
    fn variance(&self) -> f64;

    /// Standard deviation.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}
