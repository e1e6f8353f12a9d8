//! Storage engine interface consumed by the bulk loader.
//!
//! The loader depends only on these traits, so a recording engine can stand
//! in for SQLite in tests.

use crate::error::StorageError;
use bench_core::Row;

/// Factory for fresh, empty storage instances.
pub trait StorageEngine: Send + Sync {
    /// Connection type for one storage instance.
    type Connection: StorageConnection;

    /// Open a fresh, empty storage instance.
    fn open(&self) -> Result<Self::Connection, StorageError>;
}

/// One open storage instance.
///
/// Every method takes `&self` so a prepared statement borrowed from the
/// connection can stay alive across `begin` and `commit`.
pub trait StorageConnection {
    /// Prepared statement bound to this connection.
    type Statement<'conn>: PreparedInsert
    where
        Self: 'conn;

    /// Execute a DDL statement.
    fn execute_ddl(&self, sql: &str) -> Result<(), StorageError>;

    /// Prepare a parameterized statement for repeated execution.
    fn prepare(&self, sql: &str) -> Result<Self::Statement<'_>, StorageError>;

    /// Begin a write transaction.
    fn begin(&self) -> Result<(), StorageError>;

    /// Commit the open transaction. Returns once the engine acknowledges it.
    fn commit(&self) -> Result<(), StorageError>;

    /// Count the rows currently held by `table`.
    fn count_rows(&self, table: &str) -> Result<u64, StorageError>;

    /// Close the storage instance, discarding its contents.
    fn close(self) -> Result<(), StorageError>;
}

/// A reusable parameterized INSERT.
///
/// Rows are converted to the engine's bind form with [`stage`] before the
/// write transaction starts, so `bind_and_execute` does no value conversion.
///
/// [`stage`]: PreparedInsert::stage
pub trait PreparedInsert {
    /// A row in the form the engine binds directly.
    type Staged;

    /// Convert one row's values to their bind form.
    fn stage(&self, row: &Row) -> Self::Staged;

    /// Bind one staged row positionally and execute the statement.
    fn bind_and_execute(&mut self, row: &Self::Staged) -> Result<(), StorageError>;

    /// Release the statement.
    fn finalize(self) -> Result<(), StorageError>;
}
