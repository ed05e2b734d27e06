use crate::parse::types::Timestamp;
use chrono::DateTime;
use tracing::debug;

/// Apache/NCSA request time, e.g. `01/Aug/2025:13:55:36 +0000`.
pub const ACCESS_LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Normalize a bracketed access-log time.
///
/// The offset is dropped rather than applied, so the result keeps the
/// wall-clock time the server wrote. Unparseable input degrades to [`Timestamp::Raw`].
pub fn normalize_timestamp(raw: &str) -> Timestamp {
    match DateTime::parse_from_str(raw, ACCESS_LOG_TIME_FORMAT) {
        Ok(ts) => Timestamp::Normalized(ts.naive_local()),
        Err(err) => {
            debug!(raw, error = %err, "keeping timestamp verbatim");
            Timestamp::Raw(raw.to_string())
        }
    }
}
