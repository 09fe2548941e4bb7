//! # sampler_core: Numerical Foundation for the Sampling Workspace
//!
//! ## Foundation Layer Role
//!
//! sampler_core is the bottom layer of the workspace, providing:
//! - Dense row-major matrices with Cholesky factorisation and triangular
//!   transforms (`math::linalg`)
//! - Array reductions: mean, cumulative sum, normalisation (`math::statistics`)
//! - Error types: `LinalgError`, `StatisticsError` (`error`)
//! - The generic `Float` trait re-export (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other workspace crates and does not
//! touch randomness. External dependencies are kept minimal:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::math::linalg::Matrix;
//! use sampler_core::math::statistics::{cumulative_sum, mean};
//!
//! let mut cov = Matrix::from_rows(&[vec![4.0_f64, 2.0], vec![2.0, 3.0]]).unwrap();
//! cov.cholesky_in_place().unwrap();
//! assert_eq!(cov.get(0, 0), 2.0);
//!
//! assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
//! assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Matrix`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod math;
pub mod traits;

pub use error::{LinalgError, StatisticsError};
