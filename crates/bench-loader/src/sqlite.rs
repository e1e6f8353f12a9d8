//! In-memory SQLite storage engine.

use crate::error::StorageError;
use crate::insert::generate_count;
use crate::storage::{PreparedInsert, StorageConnection, StorageEngine};
use bench_core::{Row, Value};
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection, Statement};
use tracing::debug;

/// PRAGMAs applied to every fresh instance.
///
/// `journal_mode` and `synchronous` have no effect on `:memory:` databases
/// and are left at their defaults.
pub const DEFAULT_PRAGMAS: &str = "PRAGMA temp_store = MEMORY;
     PRAGMA cache_size = -64000;";

/// Timestamp layout understood by SQLite's date and time functions.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage engine that opens a new `:memory:` SQLite database per instance.
#[derive(Debug, Clone)]
pub struct SqliteEngine {
    pragmas: String,
}

impl SqliteEngine {
    /// Create an engine using [`DEFAULT_PRAGMAS`].
    pub fn new() -> Self {
        Self {
            pragmas: DEFAULT_PRAGMAS.to_string(),
        }
    }

    /// Replace the PRAGMA batch executed after each open.
    pub fn with_pragmas(mut self, pragmas: impl Into<String>) -> Self {
        self.pragmas = pragmas.into();
        self
    }
}

impl Default for SqliteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageEngine for SqliteEngine {
    type Connection = SqliteConnection;

    fn open(&self) -> Result<Self::Connection, StorageError> {
        let conn = Connection::open_in_memory()?;
        if !self.pragmas.is_empty() {
            conn.execute_batch(&self.pragmas)?;
        }
        debug!("Opened in-memory SQLite {}", rusqlite::version());
        Ok(SqliteConnection { conn })
    }
}

/// One in-memory SQLite database.
pub struct SqliteConnection {
    conn: Connection,
}

impl StorageConnection for SqliteConnection {
    type Statement<'conn> = SqliteInsert<'conn>;

    fn execute_ddl(&self, sql: &str) -> Result<(), StorageError> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn prepare(&self, sql: &str) -> Result<Self::Statement<'_>, StorageError> {
        let stmt = self.conn.prepare(sql)?;
        Ok(SqliteInsert { stmt })
    }

    fn begin(&self) -> Result<(), StorageError> {
        self.conn.execute_batch("BEGIN")?;
        Ok(())
    }

    fn commit(&self) -> Result<(), StorageError> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn count_rows(&self, table: &str) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row(&generate_count(table), [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| StorageError::Sqlite(e))
    }
}

/// Prepared INSERT on a [`SqliteConnection`].
pub struct SqliteInsert<'conn> {
    stmt: Statement<'conn>,
}

impl PreparedInsert for SqliteInsert<'_> {
    type Staged = Vec<SqlValue>;

    fn stage(&self, row: &Row) -> Vec<SqlValue> {
        row.iter().map(to_sql_value).collect()
    }

    fn bind_and_execute(&mut self, row: &Vec<SqlValue>) -> Result<(), StorageError> {
        self.stmt.execute(params_from_iter(row.iter()))?;
        Ok(())
    }

    fn finalize(self) -> Result<(), StorageError> {
        self.stmt.finalize()?;
        Ok(())
    }
}

/// Stored representation of a cell.
///
/// Identifiers are hyphenated text, timestamps use [`DATETIME_FORMAT`] and
/// booleans are 0/1 integers.
fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Identifier(u) => SqlValue::Text(u.hyphenated().to_string()),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Number(f) => SqlValue::Real(*f),
        Value::DateTime(dt) => SqlValue::Text(dt.format(DATETIME_FORMAT).to_string()),
        Value::Logical(b) => SqlValue::Integer(i64::from(*b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insert::{generate_create_table, generate_insert};
    use bench_core::{ColumnType, Schema};
    use bench_generator::DatasetGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_types_schema() -> Schema {
        Schema::with_columns(vec![
            ColumnType::Text,
            ColumnType::Number,
            ColumnType::DateTime,
            ColumnType::Logical,
        ])
    }

    #[test]
    fn test_insert_and_count() {
        let schema = all_types_schema();
        let dataset = DatasetGenerator::new(StdRng::seed_from_u64(42)).generate(schema, 10);

        let conn = SqliteEngine::new().open().unwrap();
        conn.execute_ddl(&generate_create_table(dataset.schema(), "bench"))
            .unwrap();
        {
            let mut stmt = conn
                .prepare(&generate_insert(dataset.schema(), "bench"))
                .unwrap();
            let staged: Vec<_> = dataset.rows().iter().map(|r| stmt.stage(r)).collect();
            conn.begin().unwrap();
            for row in &staged {
                stmt.bind_and_execute(row).unwrap();
            }
            conn.commit().unwrap();
            stmt.finalize().unwrap();
        }

        assert_eq!(conn.count_rows("bench").unwrap(), 10);
        conn.close().unwrap();
    }

    #[test]
    fn test_stored_representation() {
        let schema = all_types_schema();
        let dataset = DatasetGenerator::new(StdRng::seed_from_u64(42)).generate(schema, 1);
        let row = &dataset.rows()[0];

        let conn = SqliteEngine::new().open().unwrap();
        conn.execute_ddl(&generate_create_table(dataset.schema(), "bench"))
            .unwrap();
        let mut stmt = conn
            .prepare(&generate_insert(dataset.schema(), "bench"))
            .unwrap();
        let staged = stmt.stage(row);
        stmt.bind_and_execute(&staged).unwrap();
        stmt.finalize().unwrap();

        let (id, text, number, datetime, logical): (String, String, f64, String, bool) = conn
            .conn
            .query_row(
                "SELECT identifier_0, text_1, number_2, datetime_3, logical_4 FROM bench",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
            )
            .unwrap();

        assert_eq!(id.len(), 36);
        assert_eq!(
            Some(id),
            row.get(0).and_then(Value::as_uuid).map(|u| u.to_string())
        );
        assert_eq!(Some(text.as_str()), row.get(1).and_then(Value::as_str));
        assert_eq!(Some(number), row.get(2).and_then(Value::as_f64));
        assert_eq!(datetime.len(), 19);
        assert_eq!(Some(logical), row.get(4).and_then(Value::as_bool));
    }

    #[test]
    fn test_stage_converts_every_cell() {
        let id = uuid::Uuid::from_u128(0x0123_4567_89ab_4def_8123_4567_89ab_cdef);
        let at = chrono::DateTime::from_timestamp(86_400 + 3_723, 0).unwrap();
        let row = Row::new(vec![
            Value::Identifier(id),
            Value::Text("mavo".to_string()),
            Value::Number(12.5),
            Value::DateTime(at),
            Value::Logical(true),
        ]);

        let conn = SqliteEngine::new().open().unwrap();
        let stmt = conn.prepare("SELECT 1").unwrap();
        assert_eq!(
            stmt.stage(&row),
            vec![
                SqlValue::Text("01234567-89ab-4def-8123-456789abcdef".to_string()),
                SqlValue::Text("mavo".to_string()),
                SqlValue::Real(12.5),
                SqlValue::Text("1970-01-02 01:02:03".to_string()),
                SqlValue::Integer(1),
            ]
        );
    }

    #[test]
    fn test_fresh_instances_are_empty() {
        let engine = SqliteEngine::new();

        let first = engine.open().unwrap();
        first
            .execute_ddl("CREATE TABLE \"bench\" (\"identifier_0\" CHAR(36))")
            .unwrap();
        first.close().unwrap();

        let second = engine.open().unwrap();
        assert!(second.count_rows("bench").is_err());
        second.close().unwrap();
    }

    #[test]
    fn test_duplicate_identifier_fails() {
        let schema = Schema::with_columns(vec![]);
        let dataset = DatasetGenerator::new(StdRng::seed_from_u64(42)).generate(schema, 1);

        let conn = SqliteEngine::new().open().unwrap();
        conn.execute_ddl(&generate_create_table(dataset.schema(), "bench"))
            .unwrap();
        let mut stmt = conn
            .prepare(&generate_insert(dataset.schema(), "bench"))
            .unwrap();
        let row = stmt.stage(&dataset.rows()[0]);
        stmt.bind_and_execute(&row).unwrap();
        let err = stmt.bind_and_execute(&row).unwrap_err();
        assert!(matches!(err, StorageError::Sqlite(_)));
    }

    #[test]
    fn test_custom_pragmas() {
        let engine = SqliteEngine::new().with_pragmas("PRAGMA cache_size = -2000;");
        let conn = engine.open().unwrap();
        let cache_size: i64 = conn
            .conn
            .query_row("PRAGMA cache_size", [], |r| r.get(0))
            .unwrap();
        assert_eq!(cache_size, -2000);
    }
}
