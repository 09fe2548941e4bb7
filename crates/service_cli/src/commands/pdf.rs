//! Pdf command implementation
//!
//! Evaluates the density (or mass) of a named scalar family at one point.

use sampler_distributions::univariate::{Family, Univariate};
use sampler_distributions::Density;
use tracing::info;

use super::Output;
use crate::Result;

/// Run the pdf command
pub fn run(family: &str, x: f64, params: &[f64]) -> Result<Output> {
    let family: Family = family.parse()?;
    let dist = Univariate::from_params(family, params)?;
    info!(%family, x, "evaluating density");
    Ok(Output::Scalar(dist.pdf(x)))
}
