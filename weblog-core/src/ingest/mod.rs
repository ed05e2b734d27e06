//! Batch ingestion of access logs into the store.
//!
//! The data flow is:
//!
//! reader (one line at a time)
//! parse_line
//! LogRecord batch (bounded by batch_size)
//! UserAgentRegistry (user agent -> id)
//! INSERT OR IGNORE, one transaction per batch
//!
//! Lines that fail to parse and rows the database rejects are logged and
//! counted, never fatal. Only failures of the storage session itself (or of
//! the input stream) abort a run.

mod error;
mod ingestor;
mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use error::IngestError;
pub use ingestor::{BatchIngestor, DEFAULT_BATCH_SIZE};
pub use registry::UserAgentRegistry;
pub use types::{BatchProgress, IngestSummary};
