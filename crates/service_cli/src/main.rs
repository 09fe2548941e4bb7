//! Sampler CLI - Command Line Access to the Sampling Library
//!
//! # Commands
//!
//! - `sampler sample <family> --n N [params]` - Draw scalar variates
//! - `sampler pdf <family> --x X [params]` - Evaluate a density or mass
//! - `sampler mvn --mean 0,0 --cov 1,0,0,1 --n N` - Draw correlated vectors
//! - `sampler stats mean|cumsum|normalise 1,2,3` - Run an array reduction
//!
//! # Configuration
//!
//! Settings come from (highest priority first) command line flags, the
//! `SAMPLER_SEED` / `SAMPLER_LOG_LEVEL` environment variables, the TOML file
//! given by `--config`, and built-in defaults. Logs go to stderr so stdout
//! carries only results.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::mvn::MvnArgs;
use commands::stats::Reduction;
use config::{build_config, CliArgs, OutputFormat};

/// Seeded random sampling from the command line
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw variates from a scalar distribution
    Sample {
        /// Family: discrete-uniform, exponential, normal, poisson, gamma
        family: String,

        /// Number of draws
        #[arg(short, long, default_value = "1")]
        n: usize,

        /// Positional parameters, e.g. `mean std_dev` for normal
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,
    },

    /// Evaluate the density (or mass) of a scalar distribution
    Pdf {
        /// Family: discrete-uniform, exponential, normal, poisson, gamma
        family: String,

        /// Evaluation point
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,

        /// Positional parameters, e.g. `shape scale` for gamma
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,
    },

    /// Draw from a multivariate normal distribution
    Mvn {
        /// Mean vector, comma separated
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        mean: Vec<f64>,

        /// Covariance entries in row-major order, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        cov: Vec<f64>,

        /// Number of vectors
        #[arg(short, long, default_value = "1")]
        n: usize,

        /// Evaluate the density at this point instead of sampling
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        at: Option<Vec<f64>>,

        /// Draw on all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Run an array reduction
    Stats {
        /// Reduction to apply
        #[arg(value_enum)]
        reduction: Reduction,

        /// Input values, comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        seed: cli.seed,
        format: cli.format,
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
    };
    let config = build_config(&args).context("failed to load configuration")?;

    // Initialise tracing; RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "configuration loaded");
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let sampler = config.sampler_config()?;

    let output = match cli.command {
        Commands::Sample { family, n, params } => {
            commands::sample::run(&family, n, &params, &sampler)
        }
        Commands::Pdf { family, x, params } => commands::pdf::run(&family, x, &params),
        Commands::Mvn {
            mean,
            cov,
            n,
            at,
            parallel,
        } => commands::mvn::run(
            &MvnArgs {
                mean,
                cov,
                n,
                at,
                parallel,
            },
            &sampler,
        ),
        Commands::Stats { reduction, values } => commands::stats::run(reduction, &values),
    }?;

    println!("{}", output.render(config.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sample_with_negative_params() {
        let cli = Cli::try_parse_from([
            "sampler", "--seed", "3", "sample", "normal", "-n", "5", "--", "-1", "2",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(3));
        match cli.command {
            Commands::Sample { family, n, params } => {
                assert_eq!(family, "normal");
                assert_eq!(n, 5);
                assert_eq!(params, vec![-1.0, 2.0]);
            }
            _ => panic!("expected sample"),
        }
    }

    #[test]
    fn test_parse_mvn_lists() {
        let cli = Cli::try_parse_from([
            "sampler", "mvn", "--mean", "0,-1", "--cov", "1,0.5,0.5,2", "-n", "10", "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Mvn { mean, cov, n, at, .. } => {
                assert_eq!(mean, vec![0.0, -1.0]);
                assert_eq!(cov, vec![1.0, 0.5, 0.5, 2.0]);
                assert_eq!(n, 10);
                assert!(at.is_none());
            }
            _ => panic!("expected mvn"),
        }
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from(["sampler", "stats", "normalise", "1,2,-3.5"]).unwrap();
        match cli.command {
            Commands::Stats { reduction, values } => {
                assert_eq!(reduction, Reduction::Normalise);
                assert_eq!(values, vec![1.0, 2.0, -3.5]);
            }
            _ => panic!("expected stats"),
        }
    }
}
