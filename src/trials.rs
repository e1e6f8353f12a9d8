//! Trial runner: repeated generate → load → measure cycles.

use crate::config::BenchConfig;
use crate::report::RunReport;
use bench_core::Dataset;
use bench_generator::{synthesize, DatasetGenerator};
use bench_loader::{BulkLoader, LoadError, StorageEngine, TrialMetrics};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info};

/// Errors that abort a benchmark run.
#[derive(Error, Debug)]
pub enum TrialError {
    /// The bulk load of a trial failed.
    #[error("Trial {trial} failed: {source}")]
    Load {
        /// Zero-based trial number
        trial: usize,
        /// Loader error
        #[source]
        source: LoadError,
    },

    /// The blocking load task panicked or was cancelled.
    #[error("Trial {trial} did not complete: {source}")]
    Join {
        /// Zero-based trial number
        trial: usize,
        /// Task join error
        #[source]
        source: JoinError,
    },
}

/// Runs the configured number of independent trials, one after another.
///
/// Each trial gets a fresh schema, a fresh dataset and a fresh storage
/// instance. The load runs on tokio's blocking pool and is awaited before
/// the next trial starts generating, so trials never overlap.
pub struct TrialRunner<E> {
    loader: Arc<BulkLoader<E>>,
    config: BenchConfig,
    rng: StdRng,
}

impl<E> TrialRunner<E>
where
    E: StorageEngine + 'static,
{
    /// Create a runner drawing randomness from an OS-seeded generator.
    pub fn new(engine: E, config: BenchConfig) -> Self {
        Self {
            loader: Arc::new(BulkLoader::new(engine)),
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Pin the random source so schemas and datasets are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Run every trial and average the resulting rates.
    ///
    /// The first failing trial aborts the whole run.
    pub async fn run(mut self) -> Result<RunReport, TrialError> {
        let total = self.config.trials;
        let mut trials = Vec::with_capacity(total);

        for trial in 0..total {
            let metrics = self.run_trial(trial).await?;
            match metrics.rate {
                Some(rate) => info!(
                    "Trial {}/{}: {} rows in {:.3} ms ({:.2} rows/sec)",
                    trial + 1,
                    total,
                    metrics.rows,
                    metrics.elapsed_millis(),
                    rate
                ),
                None => info!(
                    "Trial {}/{}: {} rows in {:.3} ms (no rate)",
                    trial + 1,
                    total,
                    metrics.rows,
                    metrics.elapsed_millis()
                ),
            }
            trials.push(metrics);
        }

        Ok(RunReport::new(self.config, trials))
    }

    /// Run a single trial: generate a dataset, then load and time it.
    pub async fn run_trial(&mut self, trial: usize) -> Result<TrialMetrics, TrialError> {
        let dataset = self.generate_dataset();
        debug!("Trial {}: schema {:?}", trial + 1, dataset.schema().columns());

        let loader = Arc::clone(&self.loader);
        tokio::task::spawn_blocking(move || loader.load(&dataset))
            .await
            .map_err(|source| TrialError::Join { trial, source })?
            .map_err(|source| TrialError::Load { trial, source })
    }

    fn generate_dataset(&mut self) -> Dataset {
        let schema = synthesize(self.config.width, &mut self.rng);
        DatasetGenerator::new(&mut self.rng).generate(schema, self.config.depth)
    }
}
