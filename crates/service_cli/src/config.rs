//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use sampler_distributions::config::{
    ConfigError as SamplerConfigError, SamplerConfig, DEFAULT_MAX_BATCH,
};
use sampler_distributions::multivariate::DEFAULT_SYMMETRY_TOLERANCE;

/// Environment variable holding the seed.
pub const ENV_SEED: &str = "SAMPLER_SEED";

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "SAMPLER_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name.
    #[error("Invalid output format: {0}. Must be one of: json, plain")]
    InvalidFormat(String),

    /// Seed is not an unsigned 64-bit integer.
    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in config and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-draw events
    Trace,
    /// Validation and factorisation events
    Debug,
    /// Progress messages
    Info,
    /// Warnings only
    #[default]
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One value (or comma-separated vector) per line
    #[default]
    Plain,
    /// A single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Relative tolerance for covariance symmetry
    pub symmetry_tolerance: f64,
    /// Upper bound on `--n`
    pub max_batch: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: LogLevel::Warn,
            format: OutputFormat::Plain,
            symmetry_tolerance: DEFAULT_SYMMETRY_TOLERANCE,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            let parsed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
            self.seed = Some(parsed);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(level.trim())?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose && !matches!(self.log_level, LogLevel::Trace | LogLevel::Debug) {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Library-side configuration for this run
    pub fn sampler_config(&self) -> Result<SamplerConfig, SamplerConfigError> {
        SamplerConfig::builder()
            .maybe_seed(self.seed)
            .symmetry_tolerance(self.symmetry_tolerance)
            .max_batch(self.max_batch)
            .build()
    }
}

/// Flags that override file and environment settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to at least debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.symmetry_tolerance, 1e-10);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let config = CliConfig::from_toml(
            r#"
            seed = 42
            log_level = "debug"
            format = "json"
            symmetry_tolerance = 1e-6
            max_batch = 500
        "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.symmetry_tolerance, 1e-6);
        assert_eq!(config.max_batch, 500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CliConfig::from_toml("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH);
    }

    #[test]
    fn test_bad_toml_is_file_error() {
        assert!(matches!(
            CliConfig::from_toml("log_level = \"shout\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            CliConfig::from_file(Path::new("/nonexistent/sampler.toml")),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = CliConfig::from_toml("seed = 1\nlog_level = \"error\"").unwrap();
        config
            .apply_env(env(&[(ENV_SEED, "2"), (ENV_LOG_LEVEL, "info")]))
            .unwrap();
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_invalid_env_seed() {
        let mut config = CliConfig::default();
        assert!(matches!(
            config.apply_env(env(&[(ENV_SEED, "-3")])),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = CliArgs {
            seed: Some(3),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let config = build_config_with_env(&cli, env(&[(ENV_SEED, "2")])).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_used_without_flag() {
        let config = build_config_with_env(&CliArgs::default(), env(&[(ENV_SEED, "9")])).unwrap();
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_verbose_raises_level() {
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        let config = build_config_with_env(&cli, env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        let cli = CliArgs {
            verbose: true,
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let config = build_config_with_env(&cli, env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_sampler_config_carries_limits() {
        let config = CliConfig {
            seed: Some(5),
            max_batch: 10,
            ..Default::default()
        };
        let sampler = config.sampler_config().unwrap();
        assert_eq!(sampler.seed(), Some(5));
        assert!(sampler.check_batch(11).is_err());
    }
}
