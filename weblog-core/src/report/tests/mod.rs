mod engine_tests;

use crate::ingest::BatchIngestor;
use crate::store::Store;
use std::io::Cursor;

pub(super) const WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub(super) const LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// (ip, time, method, path, status, user agent)
pub(super) type Entry<'a> = (&'a str, &'a str, &'a str, &'a str, u16, &'a str);

fn entries() -> Vec<Entry<'static>> {
    vec![
        ("10.0.0.1", "01/Aug/2025:09:00:00 +0000", "GET", "/", 200, WINDOWS),
        ("10.0.0.1", "01/Aug/2025:09:05:00 +0000", "GET", "/about", 200, WINDOWS),
        ("10.0.0.1", "01/Aug/2025:13:10:00 +0000", "GET", "/missing", 404, WINDOWS),
        ("10.0.0.2", "01/Aug/2025:13:00:00 +0000", "POST", "/login", 500, LINUX),
        ("10.0.0.2", "01/Aug/2025:13:30:00 +0000", "GET", "/", 200, LINUX),
        ("10.0.0.3", "02/Aug/2025:22:00:00 +0000", "GET", "/", 301, "bogus-agent/0.1"),
        ("10.0.0.4", "02/Aug/2025:08:00:00 +0000", "GET", "/about", 403, ""),
        ("10.0.0.4", "not a time", "GET", "/raw", 200, WINDOWS),
    ]
}

fn line(e: &Entry<'_>) -> String {
    let (ip, ts, method, path, status, ua) = e;
    format!(r#"{ip} - - [{ts}] "{method} {path} HTTP/1.1" {status} 100 "-" "{ua}""#)
}

pub(super) fn seeded_store() -> Store {
    store_from(&entries())
}

pub(super) fn store_from(entries: &[Entry<'_>]) -> Store {
    let mut store = Store::open_in_memory().unwrap();
    let input: String = entries.iter().map(|e| line(e) + "\n").collect();

    BatchIngestor::new(&mut store, 3)
        .unwrap()
        .ingest(Cursor::new(input))
        .unwrap();

    store
}
