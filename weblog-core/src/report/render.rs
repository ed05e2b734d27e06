use crate::report::types::{CountRow, ErrorLogRow, HourlyCount, Report, StatusShare};
use std::fmt::Write;

const PAGE_WIDTH: usize = 58;
const ERROR_PATH_WIDTH: usize = 28;

/// Fixed-width text table for a report.
pub fn render_table(report: &Report) -> String {
    match report {
        Report::TopIps(rows) => render_counts("IP Address", 20, rows),
        Report::TopPages(rows) => render_pages(rows),
        Report::StatusCodeDistribution(rows) => render_status(rows),
        Report::HourlyTraffic(rows) => render_hourly(rows),
        Report::ErrorLogsByDate(rows) => render_errors(rows),
        Report::TrafficByOs(rows) => render_counts("Operating System", 30, rows),
    }
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Truncate to at most `max` characters, never splitting a code point.
fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn render_counts(label: &str, width: usize, rows: &[CountRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{label:<width$}{:>15}", "Request Count");
    let _ = writeln!(out, "{}", "-".repeat(width + 15));
    for row in rows {
        let _ = writeln!(out, "{:<width$}{:>15}", row.key, row.count);
    }
    out
}

fn render_pages(rows: &[CountRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<60}{:>15}", "Page Path", "Request Count");
    let _ = writeln!(out, "{}", "-".repeat(75));
    for row in rows {
        let _ = writeln!(out, "{:<60}{:>15}", clip(&row.key, PAGE_WIDTH), row.count);
    }
    out
}

fn render_status(rows: &[StatusShare]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<15}{:<10}{:<10}", "Status Code", "Count", "Percentage");
    let _ = writeln!(out, "{}", "-".repeat(35));
    for row in rows {
        let percent = format!("{:.1}%", row.percent);
        let _ = writeln!(out, "{:<15}{:<10}{:<10}", row.status_code, row.count, percent);
    }
    out
}

fn render_hourly(rows: &[HourlyCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}{:>15}", "Hour", "Request Count");
    let _ = writeln!(out, "{}", "-".repeat(25));
    for row in rows {
        let _ = writeln!(out, "{:02}:00{:<5}{:>10}", row.hour, "", row.count);
    }
    out
}

fn render_errors(rows: &[ErrorLogRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<15} {:<20} {:<7} {:<30} {:<6}",
        "IP Address", "Timestamp", "Method", "Path", "Status"
    );
    let _ = writeln!(out, "{}", "-".repeat(90));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<15} {:<20} {:<7} {:<30} {:<6}",
            row.ip_address,
            clip(&row.timestamp, 19),
            row.method,
            clip(&row.path, ERROR_PATH_WIDTH),
            row.status_code
        );
    }
    out
}
