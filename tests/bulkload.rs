//! End-to-end benchmark tests against in-memory SQLite.
//!
//! These drive the full generate -> load -> measure pipeline:
//! 1. Synthesize a schema and dataset with a fixed seed
//! 2. Load it through the bulk loader into a fresh database
//! 3. Check row counts, trial counts and the averaged rate

use bench_core::{ColumnType, Schema};
use bench_generator::{synthesize, DatasetGenerator};
use bench_loader::testing::{Event, RecordingEngine};
use bench_loader::{BulkLoader, SqliteEngine};
use bulkload_bench::{mean, BenchConfig, TrialRunner};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 42;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("bulkload_bench=debug,bench_loader=debug")
        .try_init()
        .ok();
}

/// width=2, depth=3, trials=1: three columns, three rows, one transaction.
#[test]
fn test_width_two_depth_three() {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(SEED);
    let schema = synthesize(2, &mut rng);
    assert_eq!(schema.len(), 3);
    assert_eq!(schema.column(0), Some(ColumnType::Identifier));

    let dataset = DatasetGenerator::new(rng).generate(schema, 3);
    assert_eq!(dataset.depth(), 3);
    assert!(dataset.rows().iter().all(|row| row.len() == 3));

    let engine = RecordingEngine::new();
    let metrics = BulkLoader::new(engine.clone()).load(&dataset).unwrap();
    assert_eq!(metrics.rows, 3);

    let events = engine.events();
    let begins = events.iter().filter(|e| **e == Event::Begin).count();
    let commits = events.iter().filter(|e| **e == Event::Commit).count();
    let inserts: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::Insert(_)))
        .collect();
    assert_eq!(begins, 1);
    assert_eq!(commits, 1);
    assert_eq!(inserts, vec![&Event::Insert(3); 3]);

    let metrics = BulkLoader::new(SqliteEngine::new()).load(&dataset).unwrap();
    assert_eq!(metrics.rows, 3);
    assert!(metrics.elapsed_millis() >= 0.0);
}

/// width=0, depth=5, trials=2: identifier-only rows, two metrics, mean average.
#[tokio::test]
async fn test_identifier_only_two_trials() {
    init_tracing();

    let config = BenchConfig::new(0, 5, 2).unwrap();
    let engine = RecordingEngine::new();
    let report = TrialRunner::new(engine.clone(), config)
        .with_seed(SEED)
        .run()
        .await
        .unwrap();

    assert_eq!(report.trials.len(), 2);
    assert!(engine
        .events()
        .iter()
        .filter(|e| matches!(e, Event::Insert(_)))
        .all(|e| *e == Event::Insert(1)));
    assert_eq!(report.average_rate, mean(report.rates()));

    let report = TrialRunner::new(SqliteEngine::new(), config)
        .with_seed(SEED)
        .run()
        .await
        .unwrap();
    assert_eq!(report.trials.len(), 2);
    assert!(report.trials.iter().all(|t| t.rows == 5));
}

/// width=0, depth=0: identifier-only schema, no rows, no crash.
#[tokio::test]
async fn test_empty_workload() {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(SEED);
    let schema = synthesize(0, &mut rng);
    assert_eq!(schema.len(), 1);
    let dataset = DatasetGenerator::new(rng).generate(schema, 0);
    assert!(dataset.is_empty());

    let metrics = BulkLoader::new(SqliteEngine::new()).load(&dataset).unwrap();
    assert_eq!(metrics.rows, 0);
    assert_eq!(metrics.rate, None);

    let config = BenchConfig::new(0, 0, 3).unwrap();
    let report = TrialRunner::new(SqliteEngine::new(), config)
        .with_seed(SEED)
        .run()
        .await
        .unwrap();
    assert_eq!(report.trials.len(), 3);
    assert_eq!(report.excluded_trials(), 3);
    assert_eq!(report.average_rate, None);
}

/// Average equals the arithmetic mean of the per-trial rates.
#[tokio::test]
async fn test_average_is_mean_of_trials() {
    init_tracing();

    let config = BenchConfig::new(4, 500, 4).unwrap();
    let report = TrialRunner::new(SqliteEngine::new(), config)
        .with_seed(SEED)
        .run()
        .await
        .unwrap();

    assert_eq!(report.trials.len(), 4);
    let rates = report.rates();
    assert_eq!(rates.len(), 4 - report.excluded_trials());

    if let Some(average) = report.average_rate {
        let expected = rates.iter().sum::<f64>() / rates.len() as f64;
        assert!((average - expected).abs() <= expected.abs() * 1e-9);
    }
}

/// Consecutive trials with identical width/depth start from a clean engine.
#[tokio::test]
async fn test_trials_are_isolated() {
    init_tracing();

    let config = BenchConfig::new(3, 50, 3).unwrap();
    let report = TrialRunner::new(SqliteEngine::new(), config)
        .with_seed(SEED)
        .run()
        .await
        .unwrap();

    // The loader reads the row count back after every commit, so a row or
    // table left over from an earlier trial would have failed the run.
    assert!(report.trials.iter().all(|t| t.rows == 50));
    assert_eq!(report.total_rows(), 150);
}

/// Every supported column type survives a load into SQLite.
#[test]
fn test_all_column_types_load() {
    init_tracing();

    let schema = Schema::with_columns(ColumnType::GENERATED);
    let dataset = DatasetGenerator::new(StdRng::seed_from_u64(SEED)).generate(schema, 200);

    let metrics = BulkLoader::new(SqliteEngine::new()).load(&dataset).unwrap();
    assert_eq!(metrics.rows, 200);
}
