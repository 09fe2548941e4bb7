//! Mvn command implementation
//!
//! Draws correlated vectors from a multivariate normal, or evaluates its
//! density at a point.

use sampler_core::math::linalg::Matrix;
use sampler_distributions::config::SamplerConfig;
use sampler_distributions::multivariate::MultivariateNormal;
use sampler_distributions::Sampleable;
use tracing::info;

use super::Output;
use crate::{CliError, Result};

/// Arguments of the mvn command
#[derive(Debug, Clone, Default)]
pub struct MvnArgs {
    /// Mean vector
    pub mean: Vec<f64>,
    /// Covariance entries in row-major order
    pub cov: Vec<f64>,
    /// Number of vectors to draw
    pub n: usize,
    /// Evaluate the density here instead of sampling
    pub at: Option<Vec<f64>>,
    /// Draw on the rayon pool
    pub parallel: bool,
}

/// Reshapes flat row-major entries into a square matrix.
fn square_matrix(entries: &[f64]) -> Result<Matrix<f64>> {
    let side = (entries.len() as f64).sqrt().round() as usize;
    if side * side != entries.len() {
        return Err(CliError::InvalidArgument(format!(
            "covariance needs a square number of entries, got {}",
            entries.len()
        )));
    }
    Ok(Matrix::new(side, side, entries.to_vec())?)
}

/// Run the mvn command
pub fn run(args: &MvnArgs, config: &SamplerConfig) -> Result<Output> {
    let cov = square_matrix(&args.cov)?;
    let dist = MultivariateNormal::with_tolerance(&args.mean, &cov, config.symmetry_tolerance())?;

    if let Some(x) = &args.at {
        info!(dim = dist.dim(), "evaluating multivariate density");
        return Ok(Output::Scalar(dist.pdf(x)?));
    }

    config.check_batch(args.n)?;
    let mut rng = config.rng();
    info!(dim = dist.dim(), n = args.n, seed = rng.seed(), "sampling multivariate normal");

    let draws = if args.parallel {
        dist.par_sample_n(&mut rng, args.n)
    } else {
        dist.sample_n(&mut rng, args.n)
    };
    Ok(Output::Vectors(draws))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_distributions::DistributionError;

    fn seeded() -> SamplerConfig {
        SamplerConfig::builder().seed(4).build().unwrap()
    }

    fn args(mean: &[f64], cov: &[f64], n: usize) -> MvnArgs {
        MvnArgs {
            mean: mean.to_vec(),
            cov: cov.to_vec(),
            n,
            ..Default::default()
        }
    }

    #[test]
    fn test_draw_shape() {
        let out = run(&args(&[0.0, 0.0], &[1.0, 0.3, 0.3, 1.0], 5), &seeded()).unwrap();
        match out {
            Output::Vectors(rows) => {
                assert_eq!(rows.len(), 5);
                assert!(rows.iter().all(|r| r.len() == 2));
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_parallel_flag() {
        let mut a = args(&[1.0], &[4.0], 3000);
        a.parallel = true;
        match run(&a, &seeded()).unwrap() {
            Output::Vectors(rows) => assert_eq!(rows.len(), 3000),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_non_square_entries() {
        assert!(matches!(
            run(&args(&[0.0, 0.0], &[1.0, 0.0, 1.0], 1), &seeded()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        assert!(matches!(
            run(&args(&[0.0], &[1.0, 0.0, 0.0, 1.0], 1), &seeded()),
            Err(CliError::Distribution(DistributionError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_not_positive_definite() {
        assert!(matches!(
            run(&args(&[0.0, 0.0], &[1.0, 2.0, 2.0, 1.0], 1), &seeded()),
            Err(CliError::Distribution(
                DistributionError::NonPositiveDefiniteCovariance { .. }
            ))
        ));
    }

    #[test]
    fn test_density_at_point() {
        let mut a = args(&[0.0, 0.0], &[1.0, 0.0, 0.0, 1.0], 0);
        a.at = Some(vec![0.0, 0.0]);
        match run(&a, &seeded()).unwrap() {
            Output::Scalar(v) => {
                assert!((v - 1.0 / (2.0 * std::f64::consts::PI)).abs() < 1e-12)
            }
            other => panic!("unexpected output {:?}", other),
        }
    }
}
