use crate::store::StoreError;
use rusqlite::Connection;

pub const SCHEMA_VERSION: i64 = 1;

const CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user_agents (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    user_agent_string TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS log_entries (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    ip_address    TEXT    NOT NULL,
    timestamp     TEXT    NOT NULL,
    method        TEXT    NOT NULL,
    path          TEXT    NOT NULL,
    protocol      TEXT    NOT NULL,
    status_code   INTEGER NOT NULL,
    bytes_sent    INTEGER NOT NULL,
    referrer      TEXT    NOT NULL DEFAULT '',
    user_agent_id INTEGER REFERENCES user_agents(id),
    created_at    TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
    UNIQUE (ip_address, timestamp, path)
);

CREATE INDEX IF NOT EXISTS idx_log_entries_timestamp ON log_entries (timestamp);
CREATE INDEX IF NOT EXISTS idx_log_entries_status_code ON log_entries (status_code);
"#;

pub(crate) const INSERT_USER_AGENT: &str =
    "INSERT OR IGNORE INTO user_agents (user_agent_string) VALUES (?1)";

pub(crate) const SELECT_USER_AGENT_ID: &str =
    "SELECT id FROM user_agents WHERE user_agent_string = ?1";

pub(crate) const INSERT_LOG_ENTRY: &str = r#"
INSERT OR IGNORE INTO log_entries (
    ip_address, timestamp, method, path, protocol,
    status_code, bytes_sent, referrer, user_agent_id
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

/// Create tables and indexes if missing. Safe to run on every open.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    let version: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(StoreError::schema)?;

    if version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(StoreError::schema)?;
    conn.execute_batch(CREATE_SCHEMA)
        .map_err(StoreError::schema)?;

    if version < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))
            .map_err(StoreError::schema)?;
    }

    Ok(())
}
