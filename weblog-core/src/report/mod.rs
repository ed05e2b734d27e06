//! Aggregate reports over ingested log entries.
//!
//! Every query is read-only. Ordering is fully determined: counts descending
//! with the grouped value ascending as tie-break, so identical data always
//! renders identically.

mod engine;
mod error;
pub mod render;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{DEFAULT_LIMIT, ReportEngine};
pub use error::ReportError;
pub use types::{CountRow, ErrorLogRow, HourlyCount, Report, ReportKind, StatusShare};
