//! Command-line arguments and validated benchmark configuration.

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

/// Positional arguments of the benchmark binary.
#[derive(Parser, Clone, Debug)]
#[command(name = "bulkload-bench")]
#[command(about = "Measure bulk-insert throughput of an in-memory SQLite database")]
#[command(long_about = None)]
pub struct BenchArgs {
    /// Number of random columns after the identifier column
    #[arg(value_name = "WIDTH")]
    pub width: usize,

    /// Number of rows written per trial
    #[arg(value_name = "DEPTH")]
    pub depth: usize,

    /// Number of trials to average over
    #[arg(value_name = "TRIALS")]
    pub trials: usize,
}

/// Errors raised while validating the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// At least one trial is required to report an average.
    #[error("Trial count must be at least 1")]
    NoTrials,
}

/// Validated process-wide benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchConfig {
    /// Random columns per schema, excluding the identifier column.
    pub width: usize,
    /// Rows per dataset.
    pub depth: usize,
    /// Number of trials.
    pub trials: usize,
}

impl BenchConfig {
    /// Create a configuration, rejecting a zero trial count.
    pub fn new(width: usize, depth: usize, trials: usize) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(Self {
            width,
            depth,
            trials,
        })
    }
}

impl TryFrom<BenchArgs> for BenchConfig {
    type Error = ConfigError;

    fn try_from(args: BenchArgs) -> Result<Self, Self::Error> {
        Self::new(args.width, args.depth, args.trials)
    }
}
