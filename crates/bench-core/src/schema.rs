//! Schema and dataset definitions for synthetic benchmark tables.
//!
//! A [`Schema`] is an ordered list of column types whose first entry is
//! always [`ColumnType::Identifier`]. A [`Dataset`] pairs a schema with rows
//! that match it positionally; the constructor enforces that shape so the
//! loader never sees a malformed row.

use crate::types::{ColumnType, ToDdl};
use crate::values::Row;
use serde::Serialize;

/// Errors raised when rows do not match their schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// A row has the wrong number of cells
    #[error("Row {row} has {actual} cells, schema has {expected} columns")]
    RowShape {
        /// Row position within the dataset
        row: usize,
        /// Schema length
        expected: usize,
        /// Cells found in the row
        actual: usize,
    },

    /// A cell's runtime type differs from its column's declared type
    #[error("Row {row} column {column}: expected {expected}, got {actual}")]
    CellType {
        /// Row position within the dataset
        row: usize,
        /// Column position within the row
        column: usize,
        /// Declared column type
        expected: ColumnType,
        /// Type of the generated value
        actual: ColumnType,
    },
}

/// Ordered column types of a synthetic table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnType>,
}

impl Schema {
    /// Create a schema of an identifier column followed by `columns`.
    pub fn with_columns(columns: impl IntoIterator<Item = ColumnType>) -> Self {
        let mut all = vec![ColumnType::Identifier];
        all.extend(columns);
        Self { columns: all }
    }

    /// Number of columns, including the identifier column.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: every schema carries its identifier column.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of columns after the identifier column.
    pub fn width(&self) -> usize {
        self.columns.len() - 1
    }

    /// Column type at the given position.
    pub fn column(&self, index: usize) -> Option<ColumnType> {
        self.columns.get(index).copied()
    }

    /// All column types in order.
    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Column names, unique per position: `<type>_<ordinal>`.
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, t)| column_name(*t, i))
            .collect()
    }

    /// Column definitions for table creation using the given DDL mapping.
    pub fn column_definitions(&self, ddl: &impl ToDdl) -> Vec<ColumnDefinition> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, t)| ColumnDefinition {
                name: column_name(*t, i),
                column_type: *t,
                storage_type: ddl.to_ddl(*t),
            })
            .collect()
    }

    /// Check that a row matches this schema positionally.
    pub fn check_row(&self, index: usize, row: &Row) -> Result<(), SchemaError> {
        if row.len() != self.columns.len() {
            return Err(SchemaError::RowShape {
                row: index,
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        for (column, (expected, value)) in self.columns.iter().zip(row.iter()).enumerate() {
            let actual = value.column_type();
            if actual != *expected {
                return Err(SchemaError::CellType {
                    row: index,
                    column,
                    expected: *expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

fn column_name(column_type: ColumnType, ordinal: usize) -> String {
    format!("{}_{ordinal}", column_type.name())
}

/// A named, typed column ready for DDL generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Unique column name
    pub name: String,
    /// Semantic type
    pub column_type: ColumnType,
    /// Storage engine type
    pub storage_type: &'static str,
}

/// A schema plus the rows generated for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset, rejecting rows that do not match the schema.
    pub fn new(schema: Schema, rows: Vec<Row>) -> Result<Self, SchemaError> {
        for (index, row) in rows.iter().enumerate() {
            schema.check_row(index, row)?;
        }
        Ok(Self { schema, rows })
    }

    /// The dataset's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Rows in generation order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
