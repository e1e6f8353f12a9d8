//! bulkload-bench library
//!
//! A micro-benchmark harness that measures sustained write throughput of an
//! embedded SQLite database under bulk-insert workloads.
//!
//! # Workflow
//!
//! Each trial:
//!
//! 1. Synthesizes a schema: an identifier column plus `width` columns of
//!    random type (text, number, datetime, logical)
//! 2. Generates `depth` rows of random values for that schema
//! 3. Opens a fresh in-memory database, creates the table, and inserts every
//!    row through one prepared statement inside one transaction
//! 4. Times only the write: from the first row submitted to commit
//!
//! The runner repeats this `trials` times, strictly one after another, and
//! reports the mean rows/second.
//!
//! # Crates
//!
//! - `bench_core` - column types, values, rows, schemas, datasets
//! - `bench_generator` - schema synthesis and dataset generation
//! - `bench_loader` - storage engine interface, SQLite engine, bulk loader
//!
//! # CLI Usage
//!
//! ```bash
//! # 10 random columns, 100000 rows, averaged over 5 trials
//! bulkload-bench 10 100000 5
//! ```

pub mod config;
pub mod report;
pub mod trials;

pub use config::{BenchArgs, BenchConfig, ConfigError};
pub use report::{mean, RunReport};
pub use trials::{TrialError, TrialRunner};
