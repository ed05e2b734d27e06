use super::{LINUX, WINDOWS, seeded_store, store_from};
use crate::enrichment::user_agent::OsClassifier;
use crate::report::{
    CountRow, ErrorLogRow, HourlyCount, Report, ReportEngine, ReportError, ReportKind,
};
use crate::store::Store;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn row(key: &str, count: u64) -> CountRow {
    CountRow {
        key: key.to_string(),
        count,
    }
}

#[test]
fn top_ips_orders_by_count_then_address() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine.top_n_ips(3).unwrap();

    assert_eq!(
        rows,
        vec![row("10.0.0.1", 3), row("10.0.0.2", 2), row("10.0.0.4", 2)]
    );
}

#[test]
fn top_pages_respects_limit() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine.top_n_pages(2).unwrap();

    assert_eq!(rows, vec![row("/", 3), row("/about", 2)]);
}

#[test]
fn status_distribution_sums_to_one_hundred() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine.status_code_distribution().unwrap();

    let codes: Vec<u16> = rows.iter().map(|r| r.status_code).collect();
    assert_eq!(codes, vec![200, 301, 403, 404, 500]);
    assert_eq!(rows[0].count, 4);
    assert!((rows[0].percent - 50.0).abs() < 1e-9);

    let total: f64 = rows.iter().map(|r| r.percent).sum();
    assert!((total - 100.0).abs() < 0.01, "sum was {total}");
}

#[test]
fn status_distribution_of_empty_store_is_empty() {
    let store = Store::open_in_memory().unwrap();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    assert!(engine.status_code_distribution().unwrap().is_empty());
}

#[test]
fn hourly_traffic_skips_empty_hours_and_raw_timestamps() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine.hourly_traffic().unwrap();

    assert_eq!(
        rows,
        vec![
            HourlyCount { hour: 8, count: 1 },
            HourlyCount { hour: 9, count: 2 },
            HourlyCount { hour: 13, count: 3 },
            HourlyCount { hour: 22, count: 1 },
        ]
    );
}

#[test]
fn error_logs_are_filtered_by_date_and_ordered() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine
        .error_logs_by_date(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        .unwrap();

    assert_eq!(
        rows,
        vec![
            ErrorLogRow {
                ip_address: "10.0.0.2".to_string(),
                timestamp: "2025-08-01 13:00:00".to_string(),
                method: "POST".to_string(),
                path: "/login".to_string(),
                status_code: 500,
            },
            ErrorLogRow {
                ip_address: "10.0.0.1".to_string(),
                timestamp: "2025-08-01 13:10:00".to_string(),
                method: "GET".to_string(),
                path: "/missing".to_string(),
                status_code: 404,
            },
        ]
    );
}

#[test]
fn error_logs_for_quiet_date_are_empty() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine
        .error_logs_by_date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
        .unwrap();

    assert!(rows.is_empty());
}

#[test]
fn traffic_by_os_buckets_unknown_agents() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let rows = engine.traffic_by_os(None).unwrap();

    // The request without a user agent has nothing to join and is not counted.
    assert_eq!(
        rows,
        vec![row("Windows", 4), row("Linux", 2), row("Unknown", 1)]
    );
}

#[test]
fn run_requires_date_for_error_report() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let result = engine.run(ReportKind::ErrorLogsByDate, None, None);

    assert!(matches!(result, Err(ReportError::MissingDate { .. })));
}

#[test]
fn run_applies_default_limit() {
    let store = seeded_store();
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    let report = engine.run(ReportKind::TopPages, None, None).unwrap();

    let Report::TopPages(rows) = report else {
        panic!("wrong report variant");
    };
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], row("/", 3));
}

#[test]
fn timestamps_sqlite_would_reinterpret_stay_out_of_dated_reports() {
    // Arrange: `now` and a bare Julian day number are both valid SQLite dates.
    let store = store_from(&[
        ("10.0.0.9", "now", "GET", "/now", 500, WINDOWS),
        ("10.0.0.9", "2460889", "GET", "/julian", 404, WINDOWS),
    ]);
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    // Act
    let hourly = engine.hourly_traffic().unwrap();
    let today = engine
        .error_logs_by_date(chrono::Utc::now().date_naive())
        .unwrap();
    let julian_day = engine
        .error_logs_by_date(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        .unwrap();

    // Assert
    assert_eq!(store.count_log_entries().unwrap(), 2);
    assert!(hourly.is_empty(), "{hourly:?}");
    assert!(today.is_empty(), "{today:?}");
    assert!(julian_day.is_empty(), "{julian_day:?}");
}

#[test]
fn run_lists_every_os_family_without_a_limit() {
    // Arrange: six families, one more than the default top-N limit.
    let store = store_from(&[
        ("10.0.1.1", "01/Aug/2025:09:00:00 +0000", "GET", "/a", 200, WINDOWS),
        ("10.0.1.2", "01/Aug/2025:09:00:00 +0000", "GET", "/b", 200, LINUX),
        (
            "10.0.1.3",
            "01/Aug/2025:09:00:00 +0000",
            "GET",
            "/c",
            200,
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
        ),
        (
            "10.0.1.4",
            "01/Aug/2025:09:00:00 +0000",
            "GET",
            "/d",
            200,
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        ),
        (
            "10.0.1.5",
            "01/Aug/2025:09:00:00 +0000",
            "GET",
            "/e",
            200,
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
        ),
        ("10.0.1.6", "01/Aug/2025:09:00:00 +0000", "GET", "/f", 200, "bogus-agent/0.1"),
    ]);
    let classifier = OsClassifier::default();
    let engine = ReportEngine::new(&store, &classifier);

    // Act
    let all = engine.run(ReportKind::TrafficByOs, None, None).unwrap();
    let limited = engine.run(ReportKind::TrafficByOs, Some(2), None).unwrap();

    // Assert
    assert_eq!(all.len(), 6);
    assert_eq!(limited.len(), 2);
}
