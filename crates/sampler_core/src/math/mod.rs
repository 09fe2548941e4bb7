//! Numerical routines.
//!
//! - [`linalg`]: Dense matrices, Cholesky factorisation, triangular transforms
//! - [`statistics`]: Array reductions over sequences of reals

pub mod linalg;
pub mod statistics;
