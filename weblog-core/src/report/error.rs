use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report '{report}' requires a date (YYYY-MM-DD)")]
    MissingDate { report: &'static str },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for ReportError {
    fn from(err: rusqlite::Error) -> Self {
        ReportError::Store(StoreError::Sqlite(err))
    }
}
