use crate::parse::parse_line;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Parse a file without storing anything; print the first `count` records.
pub fn preview_logs(filename: &Path, count: usize) -> anyhow::Result<(u64, u64)> {
    let file =
        File::open(filename).with_context(|| format!("cannot open {}", filename.display()))?;
    let mut reader = BufReader::new(file);

    let mut parsed = 0u64;
    let mut skipped = 0u64;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(record) => {
                if (parsed as usize) < count {
                    println!("{}", serde_json::to_string(&record)?);
                }
                parsed += 1;
            }
            Err(err) => {
                skipped += 1;
                warn!(error = %err, line = %line.trim_end(), "could not parse line");
            }
        }
    }

    println!("Parsed {parsed} valid log entries ({skipped} skipped).");
    Ok((parsed, skipped))
}
