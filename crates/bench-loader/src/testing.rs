//! Recording storage engine for exercising the loader without SQLite.
//!
//! Every call made through the storage traits is appended to a shared event
//! log. A [`FailPoint`] can make one step fail, and [`RecordingEngine::delay_at`]
//! can make a step slow so tests can see which steps fall inside the timed
//! write interval.

use crate::error::StorageError;
use crate::storage::{PreparedInsert, StorageConnection, StorageEngine};
use bench_core::Row;
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One call observed by the [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Instance opened, with its sequence number
    Open(usize),
    /// DDL executed
    Ddl(String),
    /// Statement prepared
    Prepare(String),
    /// Transaction begun
    Begin,
    /// Row inserted, with its cell count
    Insert(usize),
    /// Transaction committed
    Commit,
    /// Statement finalized
    Finalize,
    /// Row count queried
    Count,
    /// Instance closed
    Close,
}

/// Step at which the engine should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    /// Fail the CREATE TABLE
    Ddl,
    /// Fail the insert of the row at this position
    Insert(usize),
    /// Fail the COMMIT
    Commit,
    /// Accept every insert but report an empty table afterwards
    DropRows,
}

/// Storage step that can be slowed down with [`RecordingEngine::delay_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Open,
    Ddl,
    Prepare,
    /// Applies once per staged row
    Stage,
    Begin,
    /// Applies once per inserted row
    Insert,
    Commit,
    Finalize,
    Count,
    Close,
}

#[derive(Debug, Default)]
struct Shared {
    events: Mutex<Vec<Event>>,
    opened: AtomicUsize,
}

/// Storage engine that records calls instead of storing rows.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    shared: Arc<Shared>,
    fail_at: Option<FailPoint>,
    delays: Vec<(Step, Duration)>,
}

impl RecordingEngine {
    /// Create an engine that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every instance fail at `point`.
    pub fn fail_at(mut self, point: FailPoint) -> Self {
        self.fail_at = Some(point);
        self
    }

    /// Sleep for `delay` every time `step` runs.
    pub fn delay_at(mut self, step: Step, delay: Duration) -> Self {
        self.delays.push((step, delay));
        self
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.shared
            .events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of instances opened so far.
    pub fn opened(&self) -> usize {
        self.shared.opened.load(Ordering::SeqCst)
    }

    fn record(&self, event: Event) {
        if let Ok(mut events) = self.shared.events.lock() {
            events.push(event);
        }
    }

    fn pause(&self, step: Step) {
        for (_, delay) in self.delays.iter().filter(|(s, _)| *s == step) {
            std::thread::sleep(*delay);
        }
    }
}

impl StorageEngine for RecordingEngine {
    type Connection = RecordingConnection;

    fn open(&self) -> Result<Self::Connection, StorageError> {
        let id = self.shared.opened.fetch_add(1, Ordering::SeqCst);
        self.pause(Step::Open);
        self.record(Event::Open(id));
        Ok(RecordingConnection {
            engine: self.clone(),
            rows: Cell::new(0),
        })
    }
}

/// Connection handed out by [`RecordingEngine`].
pub struct RecordingConnection {
    engine: RecordingEngine,
    rows: Cell<u64>,
}

impl RecordingConnection {
    fn fails_at(&self, point: FailPoint) -> bool {
        self.engine.fail_at == Some(point)
    }
}

impl StorageConnection for RecordingConnection {
    type Statement<'conn> = RecordingInsert<'conn>;

    fn execute_ddl(&self, sql: &str) -> Result<(), StorageError> {
        self.engine.pause(Step::Ddl);
        self.engine.record(Event::Ddl(sql.to_string()));
        if self.fails_at(FailPoint::Ddl) {
            return Err(StorageError::Engine("injected DDL failure".to_string()));
        }
        Ok(())
    }

    fn prepare(&self, sql: &str) -> Result<Self::Statement<'_>, StorageError> {
        self.engine.pause(Step::Prepare);
        self.engine.record(Event::Prepare(sql.to_string()));
        Ok(RecordingInsert {
            conn: self,
            executed: 0,
        })
    }

    fn begin(&self) -> Result<(), StorageError> {
        self.engine.pause(Step::Begin);
        self.engine.record(Event::Begin);
        Ok(())
    }

    fn commit(&self) -> Result<(), StorageError> {
        self.engine.pause(Step::Commit);
        self.engine.record(Event::Commit);
        if self.fails_at(FailPoint::Commit) {
            return Err(StorageError::Engine("injected commit failure".to_string()));
        }
        Ok(())
    }

    fn count_rows(&self, _table: &str) -> Result<u64, StorageError> {
        self.engine.pause(Step::Count);
        self.engine.record(Event::Count);
        if self.fails_at(FailPoint::DropRows) {
            return Ok(0);
        }
        Ok(self.rows.get())
    }

    fn close(self) -> Result<(), StorageError> {
        self.engine.pause(Step::Close);
        self.engine.record(Event::Close);
        Ok(())
    }
}

/// Prepared statement handed out by [`RecordingConnection`].
pub struct RecordingInsert<'conn> {
    conn: &'conn RecordingConnection,
    executed: usize,
}

impl PreparedInsert for RecordingInsert<'_> {
    /// Cell count of the row.
    type Staged = usize;

    fn stage(&self, row: &Row) -> usize {
        self.conn.engine.pause(Step::Stage);
        row.len()
    }

    fn bind_and_execute(&mut self, cells: &usize) -> Result<(), StorageError> {
        self.conn.engine.pause(Step::Insert);
        if self.conn.fails_at(FailPoint::Insert(self.executed)) {
            return Err(StorageError::Engine("injected insert failure".to_string()));
        }
        self.conn.engine.record(Event::Insert(*cells));
        self.conn.rows.set(self.conn.rows.get() + 1);
        self.executed += 1;
        Ok(())
    }

    fn finalize(self) -> Result<(), StorageError> {
        self.conn.engine.pause(Step::Finalize);
        self.conn.engine.record(Event::Finalize);
        Ok(())
    }
}
