//! Stats command implementation
//!
//! Runs an array reduction over values given on the command line.

use sampler_core::math::statistics::{cumulative_sum, mean, normalise};
use tracing::info;

use super::Output;
use crate::Result;

/// Reduction to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Reduction {
    /// Arithmetic mean
    Mean,
    /// Running total
    Cumsum,
    /// Divide each value by the total
    #[value(alias = "normalize")]
    Normalise,
}

/// Run the stats command
pub fn run(reduction: Reduction, values: &[f64]) -> Result<Output> {
    info!(?reduction, len = values.len(), "reducing");
    let output = match reduction {
        Reduction::Mean => Output::Scalar(mean(values)?),
        Reduction::Cumsum => Output::Values(cumulative_sum(values)),
        Reduction::Normalise => Output::Values(normalise(values)?),
    };
    Ok(output)
}
