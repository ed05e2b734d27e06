//! Combined access-log line parsing.
//!
//! A line such as
//!
//! ```text
//! 127.0.0.1 - - [01/Aug/2025:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1234 "-" "Mozilla/5.0"
//! ```
//!
//! is turned into a [`LogRecord`], or rejected with a [`ParseError`]. Parsing
//! is pure: nothing here touches the filesystem or the database, and malformed
//! input is an ordinary `Err` value rather than a panic.

mod error;
mod line;
mod timestamp;
mod types;


pub use error::ParseError;
pub use line::parse_line;
pub use timestamp::{ACCESS_LOG_TIME_FORMAT, normalize_timestamp};
pub use types::{CANONICAL_TIMESTAMP_FORMAT, LogRecord, Timestamp};
