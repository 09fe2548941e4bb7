//! Sample command implementation
//!
//! Draws `n` variates from a named scalar family.

use sampler_distributions::config::SamplerConfig;
use sampler_distributions::univariate::{Family, Univariate};
use sampler_distributions::Sampleable;
use tracing::info;

use super::Output;
use crate::Result;

/// Run the sample command
pub fn run(family: &str, n: usize, params: &[f64], config: &SamplerConfig) -> Result<Output> {
    let family: Family = family.parse()?;
    config.check_batch(n)?;
    let dist = Univariate::from_params(family, params)?;

    let mut rng = config.rng();
    info!(%family, n, seed = rng.seed(), "sampling");

    Ok(Output::Values(dist.sample_n(&mut rng, n)))
}
