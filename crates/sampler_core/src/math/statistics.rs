//! Array reductions over finite sequences of reals.
//!
//! All functions are pure: inputs are borrowed and never modified.
//!
//! ## Degenerate Inputs
//!
//! - [`mean`] of an empty slice fails with [`StatisticsError::EmptyInput`]
//! - [`normalise`] of a zero-sum slice fails with [`StatisticsError::ZeroSum`]
//! - [`cumulative_sum`] of an empty slice is an empty vector
//!
//! No reduction returns NaN for a degenerate input; NaN only appears when the
//! input itself contains NaN. Totals of finite inputs that overflow `f64` are
//! recomputed on values divided by the largest magnitude, so [`mean`] and
//! [`normalise`] stay finite for any finite input.

use crate::error::StatisticsError;
use crate::math::linalg::Matrix;

/// Arithmetic mean: sum of elements divided by count.
///
/// # Errors
///
/// Returns `StatisticsError::EmptyInput` for an empty slice.
///
/// # Examples
///
/// ```
/// use sampler_core::math::statistics::mean;
///
/// assert_eq!(mean(&[3.0]).unwrap(), 3.0);
/// assert_eq!(mean(&[1.0, 2.0]).unwrap(), 1.5);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64, StatisticsError> {
    if data.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }
    let n = data.len() as f64;
    let (scale, total) = scaled_total(data);
    Ok(scale * (total / n))
}

/// Running totals: `out[0] = data[0]`, `out[i] = out[i-1] + data[i]`.
///
/// # Examples
///
/// ```
/// use sampler_core::math::statistics::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
/// assert!(cumulative_sum(&[]).is_empty());
/// ```
pub fn cumulative_sum(data: &[f64]) -> Vec<f64> {
    data.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Divides every element by the total of all elements.
///
/// The result sums to one (up to rounding) whenever the total is non-zero.
/// Negative elements are allowed; only a zero total is rejected.
///
/// # Errors
///
/// - `StatisticsError::EmptyInput` for an empty slice
/// - `StatisticsError::ZeroSum` when the elements sum to exactly zero
///
/// # Examples
///
/// ```
/// use sampler_core::math::statistics::normalise;
///
/// assert_eq!(normalise(&[1.0, 3.0]).unwrap(), vec![0.25, 0.75]);
/// assert!(normalise(&[1.0, -1.0]).is_err());
/// ```
pub fn normalise(data: &[f64]) -> Result<Vec<f64>, StatisticsError> {
    if data.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }
    let (scale, total) = scaled_total(data);
    if total == 0.0 {
        return Err(StatisticsError::ZeroSum);
    }
    Ok(data.iter().map(|&x| (x / scale) / total).collect())
}

/// Sum of `data` as `scale * total`.
///
/// `scale` is one unless the plain sum of finite elements overflows, in which
/// case it is the largest magnitude and `total` sums the divided elements.
fn scaled_total(data: &[f64]) -> (f64, f64) {
    let total: f64 = data.iter().sum();
    if total.is_finite() || !data.iter().all(|x| x.is_finite()) {
        return (1.0, total);
    }
    let scale = data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    (scale, data.iter().map(|&x| x / scale).sum())
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// # Errors
///
/// Returns `StatisticsError::InsufficientData` for fewer than two points.
pub fn variance(data: &[f64]) -> Result<f64, StatisticsError> {
    if data.len() < 2 {
        return Err(StatisticsError::InsufficientData {
            required: 2,
            got: data.len(),
        });
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / (data.len() - 1) as f64)
}

/// Componentwise mean of a set of equal-length observations.
///
/// # Errors
///
/// - `StatisticsError::EmptyInput` when there are no observations
/// - `StatisticsError::RaggedInput` when lengths differ
pub fn mean_vector(observations: &[Vec<f64>]) -> Result<Vec<f64>, StatisticsError> {
    let dim = check_observations(observations)?;
    let n = observations.len() as f64;
    let mut acc = vec![0.0; dim];
    for obs in observations {
        for (a, &x) in acc.iter_mut().zip(obs) {
            *a += x;
        }
    }
    Ok(acc.into_iter().map(|a| a / n).collect())
}

/// Unbiased empirical covariance matrix of a set of observations.
///
/// Each observation is one draw of a d-dimensional vector; the result is a
/// d x d symmetric matrix.
///
/// # Errors
///
/// - `StatisticsError::InsufficientData` for fewer than two observations
/// - `StatisticsError::RaggedInput` when lengths differ
pub fn covariance_matrix(observations: &[Vec<f64>]) -> Result<Matrix<f64>, StatisticsError> {
    if observations.len() < 2 {
        return Err(StatisticsError::InsufficientData {
            required: 2,
            got: observations.len(),
        });
    }
    let centre = mean_vector(observations)?;
    let dim = centre.len();
    let mut cov = Matrix::zeros(dim, dim);
    for obs in observations {
        for i in 0..dim {
            let di = obs[i] - centre[i];
            for j in 0..=i {
                let dj = obs[j] - centre[j];
                cov.set(i, j, cov.get(i, j) + di * dj);
            }
        }
    }

    let denom = (observations.len() - 1) as f64;
    for i in 0..dim {
        for j in 0..=i {
            let value = cov.get(i, j) / denom;
            cov.set(i, j, value);
            cov.set(j, i, value);
        }
    }
    Ok(cov)
}

fn check_observations(observations: &[Vec<f64>]) -> Result<usize, StatisticsError> {
    let first = observations.first().ok_or(StatisticsError::EmptyInput)?;
    let dim = first.len();
    for (index, obs) in observations.iter().enumerate() {
        if obs.len() != dim {
            return Err(StatisticsError::RaggedInput {
                index,
                expected: dim,
                got: obs.len(),
            });
        }
    }
    Ok(dim)
}
