//! Error types for the bulk loader.

use thiserror::Error;

/// Errors reported by a storage engine.
#[derive(Error, Debug)]
pub enum StorageError {
    /// SQLite error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Engine-specific failure that carries only a message.
    #[error("Storage engine error: {0}")]
    Engine(String),
}

/// Errors that abort a bulk load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to open the storage instance.
    #[error("Failed to open storage: {0}")]
    Open(#[source] StorageError),

    /// CREATE TABLE failed.
    #[error("Failed to create table: {0}")]
    CreateTable(#[source] StorageError),

    /// Preparing the INSERT statement failed.
    #[error("Failed to prepare insert: {0}")]
    Prepare(#[source] StorageError),

    /// BEGIN failed.
    #[error("Failed to begin transaction: {0}")]
    Begin(#[source] StorageError),

    /// Executing the INSERT for one row failed.
    #[error("Failed to insert row {row}: {source}")]
    Insert {
        /// Row position within the dataset
        row: usize,
        /// Underlying engine error
        #[source]
        source: StorageError,
    },

    /// COMMIT failed.
    #[error("Failed to commit transaction: {0}")]
    Commit(#[source] StorageError),

    /// Finalizing the prepared statement failed.
    #[error("Failed to finalize insert: {0}")]
    Finalize(#[source] StorageError),

    /// The row count read back after commit differs from the dataset depth.
    #[error("Table holds {actual} rows after commit, expected {expected}")]
    RowCountMismatch {
        /// Rows in the dataset
        expected: u64,
        /// Rows found in the table
        actual: u64,
    },

    /// Reading back the row count failed.
    #[error("Failed to verify row count: {0}")]
    Verify(#[source] StorageError),

    /// Closing the storage instance failed.
    #[error("Failed to close storage: {0}")]
    Close(#[source] StorageError),
}
