use serde::Serialize;

/// Totals for one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub lines_read: u64,
    pub blank_lines: u64,
    /// Parsed successfully and submitted to the store.
    pub accepted: u64,
    /// Rejected by the parser.
    pub skipped: u64,
    /// New rows written to `log_entries`.
    pub inserted: u64,
    /// Already present; ignored by the uniqueness constraint.
    pub duplicates: u64,
    /// Rows the database refused individually.
    pub row_failures: u64,
    pub batches: u64,
    /// Distinct user agents seen during the run.
    pub user_agents: u64,
}

/// Reported after every batch flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// 1-based.
    pub batch: u64,
    pub size: usize,
    pub inserted: u64,
    pub duplicates: u64,
    pub row_failures: u64,
    /// Running total of accepted records, this batch included.
    pub total_accepted: u64,
}
