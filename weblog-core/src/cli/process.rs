use crate::cli::error::UsageError;
use crate::cli::open_store;
use crate::conf::WeblogConfig;
use crate::ingest::{BatchIngestor, IngestSummary};
use anyhow::{Context, bail};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use tracing::info;

/// `process_logs <filename> [--batch_size N]`
pub fn process_logs(
    config: &WeblogConfig,
    filename: &Path,
    batch_size: Option<usize>,
) -> anyhow::Result<IngestSummary> {
    let batch_size = batch_size.unwrap_or(config.ingest.batch_size);
    if batch_size == 0 {
        return Err(UsageError::ZeroBatchSize.into());
    }

    let file = match File::open(filename) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("file not found: {}", filename.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("cannot open {}", filename.display()));
        }
    };

    println!("Processing log file: {}", filename.display());
    info!(file = %filename.display(), batch_size, "starting ingestion");

    let mut store = open_store(config)?;
    let summary = BatchIngestor::new(&mut store, batch_size)?
        .ingest_with_progress(BufReader::new(file), |progress| {
            println!("[INFO] - Processed {} lines.", progress.total_accepted);
        })
        .with_context(|| format!("ingestion of {} aborted", filename.display()))?;
    store.close()?;

    println!(
        "Finished processing. Total parsed and inserted entries: {}",
        summary.accepted
    );
    println!(
        "  lines read: {} | skipped: {} | new rows: {} | duplicates: {} | failed rows: {}",
        summary.lines_read,
        summary.skipped,
        summary.inserted,
        summary.duplicates,
        summary.row_failures
    );

    Ok(summary)
}
