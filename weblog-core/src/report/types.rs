use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    #[value(name = "top_n_ips")]
    TopIps,
    #[value(name = "top_n_pages")]
    TopPages,
    #[value(name = "status_code_distribution")]
    StatusCodeDistribution,
    #[value(name = "hourly_traffic")]
    HourlyTraffic,
    #[value(name = "error_logs_by_date")]
    ErrorLogsByDate,
    #[value(name = "traffic_by_os")]
    TrafficByOs,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::TopIps => "top_n_ips",
            ReportKind::TopPages => "top_n_pages",
            ReportKind::StatusCodeDistribution => "status_code_distribution",
            ReportKind::HourlyTraffic => "hourly_traffic",
            ReportKind::ErrorLogsByDate => "error_logs_by_date",
            ReportKind::TrafficByOs => "traffic_by_os",
        }
    }

    pub fn requires_date(&self) -> bool {
        matches!(self, ReportKind::ErrorLogsByDate)
    }
}

/// A grouped value and how many requests it accounts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status_code: u16,
    pub count: u64,
    /// Share of all rows, 0.0 to 100.0.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    pub hour: u8,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorLogRow {
    pub ip_address: String,
    pub timestamp: String,
    pub method: String,
    pub path: String,
    pub status_code: u16,
}

/// Result of any one report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", content = "rows", rename_all = "snake_case")]
pub enum Report {
    #[serde(rename = "top_n_ips")]
    TopIps(Vec<CountRow>),
    #[serde(rename = "top_n_pages")]
    TopPages(Vec<CountRow>),
    StatusCodeDistribution(Vec<StatusShare>),
    HourlyTraffic(Vec<HourlyCount>),
    ErrorLogsByDate(Vec<ErrorLogRow>),
    TrafficByOs(Vec<CountRow>),
}

impl Report {
    pub fn len(&self) -> usize {
        match self {
            Report::TopIps(rows) | Report::TopPages(rows) | Report::TrafficByOs(rows) => rows.len(),
            Report::StatusCodeDistribution(rows) => rows.len(),
            Report::HourlyTraffic(rows) => rows.len(),
            Report::ErrorLogsByDate(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
