//! Run report: per-trial metrics and the averaged write rate.

use crate::config::BenchConfig;
use bench_loader::TrialMetrics;
use serde::Serialize;
use std::fmt;

/// Results of a complete benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Configuration the run used.
    pub config: BenchConfig,
    /// Metrics of every trial, in execution order.
    pub trials: Vec<TrialMetrics>,
    /// Mean of the defined per-trial rates, or `None` if no trial produced one.
    pub average_rate: Option<f64>,
}

impl RunReport {
    /// Build the report, computing the average once.
    pub fn new(config: BenchConfig, trials: Vec<TrialMetrics>) -> Self {
        let average_rate = mean(trials.iter().filter_map(|t| t.rate));
        Self {
            config,
            trials,
            average_rate,
        }
    }

    /// Per-trial rates that contribute to the average.
    pub fn rates(&self) -> Vec<f64> {
        self.trials.iter().filter_map(|t| t.rate).collect()
    }

    /// Number of trials excluded from the average.
    pub fn excluded_trials(&self) -> usize {
        self.trials.iter().filter(|t| t.rate.is_none()).count()
    }

    /// Total rows written across all trials.
    pub fn total_rows(&self) -> u64 {
        self.trials.iter().map(|t| t.rows).sum()
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Arithmetic mean, computed as a running mean `mean += (x - mean) / n`.
///
/// Returns `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut count = 0u64;
    let mut mean = 0.0;
    for value in values {
        count += 1;
        mean += (value - mean) / count as f64;
    }
    (count > 0).then_some(mean)
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.trials.len();
        for (i, trial) in self.trials.iter().enumerate() {
            write!(
                f,
                "Trial {}/{}: {} rows in {:.3} ms",
                i + 1,
                total,
                trial.rows,
                trial.elapsed_millis()
            )?;
            match trial.rate {
                Some(rate) => writeln!(f, " ({rate:.2} rows/sec)")?,
                None => writeln!(f, " (no rate, excluded from average)")?,
            }
        }

        let counted = total - self.excluded_trials();
        match self.average_rate {
            Some(rate) => write!(
                f,
                "Average: {rate:.2} rows/sec over {counted} of {total} trials"
            ),
            None => write!(f, "Average: n/a (no trial wrote rows in a measurable time)"),
        }
    }
}
