//! Command-line interface for bulkload-bench
//!
//! # Usage
//!
//! ```bash
//! bulkload-bench <WIDTH> <DEPTH> <TRIALS>
//!
//! # Progress goes to stderr; show per-trial SQL and schemas too
//! RUST_LOG=debug bulkload-bench 4 1000 3
//! ```

use anyhow::Context;
use bench_loader::SqliteEngine;
use bulkload_bench::{BenchArgs, BenchConfig, TrialRunner};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulkload_bench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BenchArgs::parse();
    let config = BenchConfig::try_from(args).context("Invalid benchmark configuration")?;

    println!(
        "Generating {} rows with {} columns, {} trials",
        config.depth, config.width, config.trials
    );

    let report = TrialRunner::new(SqliteEngine::new(), config)
        .run()
        .await
        .context("Benchmark run failed")?;

    println!("{report}");
    Ok(())
}
