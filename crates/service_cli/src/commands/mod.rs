//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns an
//! [`Output`]; `main` renders it in the configured [`OutputFormat`].

pub mod mvn;
pub mod pdf;
pub mod sample;
pub mod stats;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Result of a command, independent of how it is printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// A single number (density, mean)
    Scalar(f64),
    /// A sequence of numbers (draws, cumulative sums)
    Values(Vec<f64>),
    /// A sequence of vectors (multivariate draws)
    Vectors(Vec<Vec<f64>>),
}

impl Output {
    /// Renders the output.
    ///
    /// Plain output prints one scalar per line and one comma-separated
    /// vector per line; JSON output is a single document.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Plain => Ok(match self {
                Output::Scalar(x) => x.to_string(),
                Output::Values(xs) => join(xs, "\n"),
                Output::Vectors(rows) => rows
                    .iter()
                    .map(|row| join(row, ","))
                    .collect::<Vec<_>>()
                    .join("\n"),
            }),
        }
    }
}

fn join(values: &[f64], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        assert_eq!(Output::Scalar(0.5).render(OutputFormat::Plain).unwrap(), "0.5");
        assert_eq!(
            Output::Values(vec![1.0, 2.5]).render(OutputFormat::Plain).unwrap(),
            "1\n2.5"
        );
        assert_eq!(
            Output::Vectors(vec![vec![1.0, -1.0], vec![0.0, 2.0]])
                .render(OutputFormat::Plain)
                .unwrap(),
            "1,-1\n0,2"
        );
        assert_eq!(Output::Values(vec![]).render(OutputFormat::Plain).unwrap(), "");
    }

    #[test]
    fn test_json_rendering() {
        assert_eq!(Output::Scalar(0.5).render(OutputFormat::Json).unwrap(), "0.5");
        assert_eq!(
            Output::Values(vec![1.0, 2.5]).render(OutputFormat::Json).unwrap(),
            "[1.0,2.5]"
        );
        assert_eq!(
            Output::Vectors(vec![vec![1.0], vec![2.0]])
                .render(OutputFormat::Json)
                .unwrap(),
            "[[1.0],[2.0]]"
        );
    }
}
