//! # sampler_distributions: Seeded Random Variate Generation
//!
//! ## Engine Layer Role
//!
//! sampler_distributions sits on top of `sampler_core` and provides:
//! - An explicit, seedable RNG handle (`rng::SamplerRng`)
//! - Scalar distribution families with sampling, density and moments
//!   (`univariate`): discrete uniform, exponential, normal, Poisson, gamma
//! - Multivariate Gaussian sampling via Cholesky factorisation
//!   (`multivariate`)
//! - Shared sampling configuration (`config`)
//!
//! Random draws delegate to `rand` / `rand_distr`; densities to `statrs`.
//! The covariance factorisation and triangular transforms are implemented in
//! `sampler_core::math::linalg`.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::math::linalg::Matrix;
//! use sampler_distributions::multivariate::normal;
//! use sampler_distributions::rng::SamplerRng;
//! use sampler_distributions::univariate::Gamma;
//! use sampler_distributions::{Density, DistributionError, Moments, Sampleable};
//!
//! let mut rng = SamplerRng::from_seed(42);
//!
//! let gamma = Gamma::new(2.0, 3.0).unwrap();
//! let draws = gamma.sample_n(&mut rng, 10);
//! assert_eq!(draws.len(), 10);
//! assert_eq!(gamma.mean(), 6.0);
//! assert!(gamma.pdf(1.0) > 0.0);
//!
//! let cov = Matrix::from_rows(&[vec![1.0, 0.5], vec![0.5, 2.0]]).unwrap();
//! let x = normal::sample(&mut rng, &[0.0, 1.0], &cov).unwrap();
//! assert_eq!(x.len(), 2);
//!
//! let bad = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
//! assert!(matches!(
//!     normal::sample(&mut rng, &[0.0, 0.0], &bad),
//!     Err(DistributionError::NonPositiveDefiniteCovariance { .. })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): `MultivariateNormal::par_sample_n` via rayon
//! - `serde`: Serialisation for `SamplerConfig`, `Family` and `Matrix`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod multivariate;
pub mod rng;
pub mod traits;
pub mod univariate;

pub use error::DistributionError;
pub use traits::{Density, Moments, Sampleable};
