//! Vector-valued distributions.
//!
//! - [`normal`]: multivariate Gaussian via Cholesky factorisation, as free
//!   functions (factorise per call) and as [`MultivariateNormal`] (factor
//!   cached).

pub mod normal;

pub use normal::{MultivariateNormal, DEFAULT_SYMMETRY_TOLERANCE};
