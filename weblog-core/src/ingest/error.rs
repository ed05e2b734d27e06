use crate::store::StoreError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("batch size must be greater than zero")]
    InvalidBatchSize,

    #[error("failed to read input at line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
