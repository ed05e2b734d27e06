use crate::ingest::error::IngestError;
use crate::ingest::registry::UserAgentRegistry;
use crate::ingest::types::{BatchProgress, IngestSummary};
use crate::parse::{LogRecord, parse_line};
use crate::store::{INSERT_LOG_ENTRY, Store, StoreError};
use rusqlite::{CachedStatement, Connection, params};
use std::io::BufRead;
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_BATCH_SIZE: usize = 1000;

pub struct BatchIngestor<'s> {
    store: &'s mut Store,
    batch_size: usize,
    registry: UserAgentRegistry,
}

#[derive(Default)]
struct BatchOutcome {
    inserted: u64,
    duplicates: u64,
    row_failures: u64,
}

impl<'s> BatchIngestor<'s> {
    pub fn new(store: &'s mut Store, batch_size: usize) -> Result<Self, IngestError> {
        if batch_size == 0 {
            return Err(IngestError::InvalidBatchSize);
        }

        Ok(Self {
            store,
            batch_size,
            registry: UserAgentRegistry::new(),
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn ingest<R: BufRead>(&mut self, reader: R) -> Result<IngestSummary, IngestError> {
        self.ingest_with_progress(reader, |_| {})
    }

    /// Stream `reader` into the store, calling `on_batch` after every flush.
    ///
    /// Memory use is bounded by one batch plus the user-agent cache,
    /// regardless of input size.
    #[instrument(skip_all, fields(batch_size = self.batch_size))]
    pub fn ingest_with_progress<R, F>(
        &mut self,
        mut reader: R,
        mut on_batch: F,
    ) -> Result<IngestSummary, IngestError>
    where
        R: BufRead,
        F: FnMut(&BatchProgress),
    {
        let mut summary = IngestSummary::default();
        let mut batch: Vec<LogRecord> = Vec::with_capacity(self.batch_size);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| IngestError::Read {
                    line: summary.lines_read + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            summary.lines_read += 1;

            // Invalid UTF-8 is replaced rather than aborting the run.
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                summary.blank_lines += 1;
                continue;
            }

            match parse_line(&line) {
                Ok(record) => {
                    batch.push(record);
                    if batch.len() >= self.batch_size {
                        self.flush(&mut batch, &mut summary, &mut on_batch)?;
                    }
                }
                Err(err) => {
                    summary.skipped += 1;
                    warn!(
                        line_number = summary.lines_read,
                        error = %err,
                        line = %line.trim_end(),
                        "skipping unparseable line"
                    );
                }
            }
        }

        if !batch.is_empty() {
            self.flush(&mut batch, &mut summary, &mut on_batch)?;
        }

        summary.user_agents = self.registry.len() as u64;

        info!(
            lines_read = summary.lines_read,
            accepted = summary.accepted,
            skipped = summary.skipped,
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            row_failures = summary.row_failures,
            batches = summary.batches,
            new_user_agents = self.registry.created(),
            "ingestion finished"
        );

        Ok(summary)
    }

    fn flush<F>(
        &mut self,
        batch: &mut Vec<LogRecord>,
        summary: &mut IngestSummary,
        on_batch: &mut F,
    ) -> Result<(), IngestError>
    where
        F: FnMut(&BatchProgress),
    {
        let outcome = match write_batch(self.store, &mut self.registry, batch) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.registry.clear();
                return Err(err.into());
            }
        };

        summary.batches += 1;
        summary.accepted += batch.len() as u64;
        summary.inserted += outcome.inserted;
        summary.duplicates += outcome.duplicates;
        summary.row_failures += outcome.row_failures;

        let progress = BatchProgress {
            batch: summary.batches,
            size: batch.len(),
            inserted: outcome.inserted,
            duplicates: outcome.duplicates,
            row_failures: outcome.row_failures,
            total_accepted: summary.accepted,
        };
        debug!(
            batch = progress.batch,
            size = progress.size,
            inserted = progress.inserted,
            duplicates = progress.duplicates,
            "batch flushed"
        );
        on_batch(&progress);

        batch.clear();
        Ok(())
    }
}

/// Write one batch in a single transaction.
///
/// A row the database rejects for its values is logged and skipped. Any
/// other failure, including beginning or committing the transaction, rolls
/// the batch back and aborts the run.
fn write_batch(
    store: &mut Store,
    registry: &mut UserAgentRegistry,
    records: &[LogRecord],
) -> Result<BatchOutcome, StoreError> {
    let tx = store.transaction()?;
    let mut outcome = BatchOutcome::default();

    {
        let mut insert = tx.prepare_cached(INSERT_LOG_ENTRY)?;

        for record in records {
            match insert_record(&tx, &mut insert, registry, record) {
                Ok(0) => outcome.duplicates += 1,
                Ok(_) => outcome.inserted += 1,
                Err(err) if err.is_row_level() => {
                    outcome.row_failures += 1;
                    warn!(
                        error = %err,
                        ip_address = %record.ip_address,
                        timestamp = %record.timestamp,
                        path = %record.path,
                        "failed to insert log entry"
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    tx.commit()?;
    Ok(outcome)
}

fn insert_record(
    conn: &Connection,
    insert: &mut CachedStatement<'_>,
    registry: &mut UserAgentRegistry,
    record: &LogRecord,
) -> Result<usize, StoreError> {
    let user_agent_id = registry.resolve(conn, &record.user_agent)?;
    let bytes_sent = i64::try_from(record.bytes_sent).map_err(|_| {
        StoreError::Sqlite(rusqlite::Error::ToSqlConversionFailure(
            format!("bytes_sent {} exceeds the storable range", record.bytes_sent).into(),
        ))
    })?;

    let changed = insert.execute(params![
        record.ip_address,
        record.timestamp.to_string(),
        record.method,
        record.path,
        record.protocol,
        record.status_code,
        bytes_sent,
        record.referrer,
        user_agent_id,
    ])?;

    Ok(changed)
}
