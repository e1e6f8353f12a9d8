//! Core types for the bulkload-bench framework.
//!
//! This crate provides the foundational types shared by the generator and
//! loader crates:
//!
//! - [`ColumnType`] - The closed catalog of column semantic types
//! - [`Value`] - A single generated cell value
//! - [`Row`] - One record, positionally matching a [`Schema`]
//! - [`Schema`] - Ordered column types, always led by an identifier column
//! - [`Dataset`] - A schema plus its generated rows
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── bench-generator  (synthesizes schemas and rows)
//!    │
//!    └─── bench-loader     (derives DDL, writes rows into the engine)
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_core::{ColumnType, Schema, SqliteDdl, ToDdl};
//!
//! let schema = Schema::with_columns(vec![ColumnType::Text, ColumnType::Logical]);
//! assert_eq!(schema.len(), 3);
//! assert_eq!(schema.column(0), Some(ColumnType::Identifier));
//! assert_eq!(SqliteDdl.to_ddl(ColumnType::Identifier), "CHAR(36)");
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{ColumnDefinition, Dataset, Schema, SchemaError};
pub use types::{ColumnType, SqliteDdl, ToDdl, UnknownColumnType};
pub use values::{Row, Value};
