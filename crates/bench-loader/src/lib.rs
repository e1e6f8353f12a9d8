//! Transactional bulk loader for the bulkload-bench harness.
//!
//! The loader consumes a storage engine through the narrow interface in
//! [`storage`]: open, execute DDL, prepare, begin, bind-and-execute per row,
//! commit, finalize, close. [`sqlite::SqliteEngine`] implements it on top of
//! an in-memory SQLite database.
//!
//! Only the write phase is timed: the clock starts after `BEGIN`, right
//! before the first row is bound, and stops once `COMMIT` returns.

pub mod error;
pub mod insert;
pub mod loader;
pub mod sqlite;
pub mod storage;
pub mod testing;

pub use error::{LoadError, StorageError};
pub use loader::{BulkLoader, TrialMetrics, TABLE_NAME};
pub use sqlite::SqliteEngine;
pub use storage::{PreparedInsert, StorageConnection, StorageEngine};
