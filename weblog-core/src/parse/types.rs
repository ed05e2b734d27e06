use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Layout used for normalized timestamps, both in memory and in storage.
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Request time of a log line.
///
/// Timestamps are best-effort normalized: anything that does not match the
/// access-log time grammar is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time in the offset the line was logged with.
    Normalized(NaiveDateTime),
    Raw(String),
}

impl Timestamp {
    pub fn is_normalized(&self) -> bool {
        matches!(self, Timestamp::Normalized(_))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Normalized(ts) => write!(f, "{}", ts.format(CANONICAL_TIMESTAMP_FORMAT)),
            Timestamp::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One request, as recorded by a combined-format access log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub ip_address: String,
    pub timestamp: Timestamp,
    /// Always uppercase.
    pub method: String,
    pub path: String,
    pub protocol: String,
    /// Not range checked; whatever three digits the server wrote.
    pub status_code: u16,
    pub bytes_sent: u64,
    /// Empty when the server logged the `-` placeholder.
    pub referrer: String,
    pub user_agent: String,
}
