use crate::parse::error::ParseError;
use crate::parse::timestamp::normalize_timestamp;
use crate::parse::types::LogRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<ip> - - [<time>] "<method> <path> <protocol>" <status> <bytes> "<referrer>" "<user-agent>"`
///
/// Anchored at the start only; trailing fields some servers append are ignored.
static COMBINED_LOG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(?P<ip>\S+) - - \[(?P<timestamp>[^\]]+)\] "#,
        r#""(?P<method>\S+) (?P<path>\S+) (?P<protocol>[^"]+)" "#,
        r#"(?P<status>[0-9]{3}) (?P<bytes>[0-9]+|-) "#,
        r#""(?P<referrer>[^"]*)" "(?P<user_agent>[^"]*)""#,
    ))
    .expect("combined log pattern must compile")
});

const PLACEHOLDER: &str = "-";

pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let caps = COMBINED_LOG
        .captures(line.trim())
        .ok_or(ParseError::Malformed)?;

    let status = &caps["status"];
    let status_code = status
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidStatus {
            value: status.to_string(),
        })?;

    let bytes = &caps["bytes"];
    let bytes_sent = match bytes {
        PLACEHOLDER => 0,
        digits => digits
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidBytes {
                value: digits.to_string(),
            })?,
    };

    let referrer = match &caps["referrer"] {
        PLACEHOLDER => String::new(),
        r => r.to_string(),
    };

    Ok(LogRecord {
        ip_address: caps["ip"].to_string(),
        timestamp: normalize_timestamp(&caps["timestamp"]),
        method: caps["method"].to_ascii_uppercase(),
        path: caps["path"].to_string(),
        protocol: caps["protocol"].to_string(),
        status_code,
        bytes_sent,
        referrer,
        user_agent: caps["user_agent"].to_string(),
    })
}
