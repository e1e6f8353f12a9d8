//! Bulk loader: writes one dataset into a fresh table and times the write.

use crate::error::LoadError;
use crate::insert::{generate_create_table, generate_insert};
use crate::storage::{PreparedInsert, StorageConnection, StorageEngine};
use bench_core::Dataset;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Name of the table every trial creates.
pub const TABLE_NAME: &str = "bench";

/// Measurements from one bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialMetrics {
    /// Number of rows written.
    pub rows: u64,
    /// Time from first row submitted to commit acknowledged.
    pub elapsed: Duration,
    /// Rows per second, or `None` when there were no rows or no
    /// measurable elapsed time.
    pub rate: Option<f64>,
}

impl TrialMetrics {
    /// Build metrics from a row count and the measured write interval.
    pub fn new(rows: u64, elapsed: Duration) -> Self {
        Self {
            rows,
            elapsed,
            rate: rows_per_second(rows, elapsed),
        }
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Calculate rows per second.
///
/// Returns `None` for an empty write or a zero-length interval; both would
/// otherwise yield NaN or infinity.
pub fn rows_per_second(rows: u64, elapsed: Duration) -> Option<f64> {
    if rows == 0 || elapsed.is_zero() {
        return None;
    }
    Some(rows as f64 / elapsed.as_secs_f64())
}

/// Loads datasets into fresh storage instances and times the write phase.
pub struct BulkLoader<E> {
    engine: E,
}

impl<E: StorageEngine> BulkLoader<E> {
    /// Create a new bulk loader over `engine`.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Load `dataset` into a fresh table and measure the write.
    ///
    /// The timed interval starts after `BEGIN`, immediately before the first
    /// row is bound, and ends once `COMMIT` returns. Opening the instance,
    /// creating the table, preparing the statement, staging the rows,
    /// verifying the row count and closing the instance are all outside it.
    pub fn load(&self, dataset: &Dataset) -> Result<TrialMetrics, LoadError> {
        let schema = dataset.schema();
        let conn = self.engine.open().map_err(LoadError::Open)?;

        let create_sql = generate_create_table(schema, TABLE_NAME);
        debug!("DDL: {}", create_sql);
        conn.execute_ddl(&create_sql).map_err(LoadError::CreateTable)?;

        let insert_sql = generate_insert(schema, TABLE_NAME);
        debug!("Insert: {}", insert_sql);

        let elapsed = {
            let mut stmt = conn.prepare(&insert_sql).map_err(LoadError::Prepare)?;
            let staged: Vec<_> = dataset.rows().iter().map(|row| stmt.stage(row)).collect();
            conn.begin().map_err(LoadError::Begin)?;

            let start = Instant::now();
            for (row, values) in staged.iter().enumerate() {
                stmt.bind_and_execute(values)
                    .map_err(|source| LoadError::Insert { row, source })?;
            }
            conn.commit().map_err(LoadError::Commit)?;
            let elapsed = start.elapsed();

            stmt.finalize().map_err(LoadError::Finalize)?;
            elapsed
        };

        let expected = dataset.depth() as u64;
        let actual = conn.count_rows(TABLE_NAME).map_err(LoadError::Verify)?;
        if actual != expected {
            return Err(LoadError::RowCountMismatch { expected, actual });
        }

        conn.close().map_err(LoadError::Close)?;

        let metrics = TrialMetrics::new(expected, elapsed);
        debug!(
            "Loaded {} rows x {} columns in {:?}",
            metrics.rows,
            schema.len(),
            metrics.elapsed
        );
        Ok(metrics)
    }
}
