//! SQLite-backed storage for ingested log entries.
//!
//! [`Store`] owns the connection for its whole lifetime. Dropping it closes
//! the connection, so every exit path of an ingestion run (including early
//! returns on errors) releases the database.

mod error;
mod schema;


pub use error::StoreError;
pub(crate) use schema::{INSERT_LOG_ENTRY, INSERT_USER_AGENT, SELECT_USER_AGENT_ID};
pub use schema::SCHEMA_VERSION;

use rusqlite::{Connection, Transaction};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);

pub struct Store {
    conn: Connection,
    location: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the database file at `path` and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn open_with_timeout(
        path: impl AsRef<Path>,
        busy_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::open(path, source))?;
        conn.busy_timeout(busy_timeout)
            .map_err(|source| StoreError::open(path, source))?;

        debug!(path = %path.display(), "opened database");
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Private, throwaway database. Mostly useful for tests and dry runs.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|source| StoreError::open(":memory:", source))?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, location: Option<PathBuf>) -> Result<Self, StoreError> {
        schema::ensure_schema(&conn)?;
        Ok(Self { conn, location })
    }

    /// `None` for in-memory databases.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn transaction(&mut self) -> Result<Transaction<'_>, StoreError> {
        Ok(self.conn.transaction()?)
    }

    pub fn count_log_entries(&self) -> Result<u64, StoreError> {
        self.count("SELECT COUNT(*) FROM log_entries")
    }

    pub fn count_user_agents(&self) -> Result<u64, StoreError> {
        self.count("SELECT COUNT(*) FROM user_agents")
    }

    fn count(&self, sql: &str) -> Result<u64, StoreError> {
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n.max(0) as u64)
    }

    /// Close explicitly, surfacing any error SQLite reports while doing so.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn
            .close()
            .map_err(|(_conn, source)| StoreError::Sqlite(source))
    }
}
