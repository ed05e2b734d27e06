use thiserror::Error;

/// Bad command-line input, detected before any storage access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("report '{report}' needs a date: pass --date YYYY-MM-DD")]
    MissingDate { report: &'static str },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("--batch_size must be greater than zero")]
    ZeroBatchSize,

    #[error("--limit must be greater than zero")]
    ZeroLimit,
}
