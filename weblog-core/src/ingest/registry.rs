use crate::store::{INSERT_USER_AGENT, SELECT_USER_AGENT_ID, StoreError};
use ahash::AHashMap;
use rusqlite::{Connection, params};

/// Resolves raw user-agent strings to `user_agents.id`.
///
/// Rows are created on first sight with insert-if-absent semantics; the
/// `UNIQUE` constraint on the table is what prevents duplicates. The cache
/// only saves round trips and lives for a single ingestion run.
#[derive(Debug, Default)]
pub struct UserAgentRegistry {
    cache: AHashMap<String, i64>,
    created: u64,
}

impl UserAgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty agents resolve to `None` and never create a row.
    pub fn resolve(&mut self, conn: &Connection, raw: &str) -> Result<Option<i64>, StoreError> {
        if raw.is_empty() {
            return Ok(None);
        }

        if let Some(id) = self.cache.get(raw) {
            return Ok(Some(*id));
        }

        let changed = conn.prepare_cached(INSERT_USER_AGENT)?.execute(params![raw])?;
        let id: i64 = conn
            .prepare_cached(SELECT_USER_AGENT_ID)?
            .query_row(params![raw], |row| row.get(0))?;

        if changed > 0 {
            self.created += 1;
        }
        self.cache.insert(raw.to_owned(), id);

        Ok(Some(id))
    }

    /// Drop cached ids, e.g. after a rolled-back transaction removed their rows.
    pub(crate) fn clear(&mut self) {
        self.cache.clear();
    }

    /// Distinct agents resolved so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Rows this registry inserted (as opposed to found already present).
    pub fn created(&self) -> u64 {
        self.created
    }
}
