//! CLI error types.

use sampler_core::{LinalgError, StatisticsError};
use sampler_distributions::config::ConfigError as SamplerConfigError;
use sampler_distributions::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sampler limits rejected the request.
    #[error("Sampler configuration error: {0}")]
    SamplerConfig(#[from] SamplerConfigError),

    /// Distribution construction or sampling failed.
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// A reduction rejected its input.
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    /// Matrix input was malformed.
    #[error("Matrix error: {0}")]
    Linalg(#[from] LinalgError),

    /// Argument combination not expressible in clap alone.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialisation failed.
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
