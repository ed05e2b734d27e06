use crate::enrichment::user_agent::OsClassifier;
use crate::report::error::ReportError;
use crate::report::types::{
    CountRow, ErrorLogRow, HourlyCount, Report, ReportKind, StatusShare,
};
use crate::store::Store;
use ahash::AHashMap;
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};

/// Row limit for the top-N reports when the caller gives none.
pub const DEFAULT_LIMIT: usize = 5;

const TOP_IPS: &str = r#"
SELECT ip_address, COUNT(*) AS request_count
FROM log_entries
GROUP BY ip_address
ORDER BY request_count DESC, ip_address ASC
LIMIT ?1
"#;

const TOP_PAGES: &str = r#"
SELECT path, COUNT(*) AS request_count
FROM log_entries
GROUP BY path
ORDER BY request_count DESC, path ASC
LIMIT ?1
"#;

const STATUS_CODES: &str = r#"
SELECT status_code, COUNT(*) AS request_count
FROM log_entries
GROUP BY status_code
ORDER BY status_code ASC
"#;

// Dated reports only see rows in the canonical `YYYY-MM-DD HH:MM:SS` layout.
// SQLite date functions would also accept verbatim `now` or a Julian day number.
const HOURLY_TRAFFIC: &str = r#"
SELECT CAST(substr(timestamp, 12, 2) AS INTEGER) AS hour, COUNT(*) AS request_count
FROM log_entries
WHERE timestamp GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9] [0-9][0-9]:[0-9][0-9]:[0-9][0-9]'
GROUP BY hour
ORDER BY hour ASC
"#;

const ERRORS_BY_DATE: &str = r#"
SELECT ip_address, timestamp, method, path, status_code
FROM log_entries
WHERE timestamp GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9] [0-9][0-9]:[0-9][0-9]:[0-9][0-9]'
  AND substr(timestamp, 1, 10) = ?1
  AND status_code >= 400
ORDER BY timestamp ASC, id ASC
"#;

const REQUESTS_BY_USER_AGENT: &str = r#"
SELECT ua.user_agent_string, COUNT(*) AS request_count
FROM log_entries le
JOIN user_agents ua ON le.user_agent_id = ua.id
GROUP BY ua.id
"#;

pub struct ReportEngine<'a> {
    conn: &'a Connection,
    classifier: &'a OsClassifier,
}

impl<'a> ReportEngine<'a> {
    pub fn new(store: &'a Store, classifier: &'a OsClassifier) -> Self {
        Self {
            conn: store.connection(),
            classifier,
        }
    }

    /// Run the report named by `kind`.
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`] for the top-N reports; the OS
    /// report lists every family unless a limit is given. `date` is required
    /// for [`ReportKind::ErrorLogsByDate`] and checked before touching storage.
    pub fn run(
        &self,
        kind: ReportKind,
        limit: Option<usize>,
        date: Option<NaiveDate>,
    ) -> Result<Report, ReportError> {
        let top = limit.unwrap_or(DEFAULT_LIMIT);

        Ok(match kind {
            ReportKind::TopIps => Report::TopIps(self.top_n_ips(top)?),
            ReportKind::TopPages => Report::TopPages(self.top_n_pages(top)?),
            ReportKind::StatusCodeDistribution => {
                Report::StatusCodeDistribution(self.status_code_distribution()?)
            }
            ReportKind::HourlyTraffic => Report::HourlyTraffic(self.hourly_traffic()?),
            ReportKind::ErrorLogsByDate => {
                let date = date.ok_or(ReportError::MissingDate {
                    report: kind.as_str(),
                })?;
                Report::ErrorLogsByDate(self.error_logs_by_date(date)?)
            }
            ReportKind::TrafficByOs => Report::TrafficByOs(self.traffic_by_os(limit)?),
        })
    }

    pub fn top_n_ips(&self, n: usize) -> Result<Vec<CountRow>, ReportError> {
        self.top_n(TOP_IPS, n)
    }

    pub fn top_n_pages(&self, n: usize) -> Result<Vec<CountRow>, ReportError> {
        self.top_n(TOP_PAGES, n)
    }

    fn top_n(&self, sql: &str, n: usize) -> Result<Vec<CountRow>, ReportError> {
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(CountRow {
                    key: row.get(0)?,
                    count: count_at(row, 1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Percentages are of all rows and sum to 100 (modulo float rounding).
    pub fn status_code_distribution(&self) -> Result<Vec<StatusShare>, ReportError> {
        let mut stmt = self.conn.prepare_cached(STATUS_CODES)?;
        let counts = stmt
            .query_map([], |row| Ok((row.get::<_, u16>(0)?, count_at(row, 1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let total: u64 = counts.iter().map(|(_, c)| *c).sum();

        Ok(counts
            .into_iter()
            .map(|(status_code, count)| StatusShare {
                status_code,
                count,
                percent: (count as f64 / total as f64) * 100.0,
            })
            .collect())
    }

    /// Hours without traffic are left out rather than reported as zero.
    pub fn hourly_traffic(&self) -> Result<Vec<HourlyCount>, ReportError> {
        let mut stmt = self.conn.prepare_cached(HOURLY_TRAFFIC)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(HourlyCount {
                    hour: row.get(0)?,
                    count: count_at(row, 1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// 4xx and 5xx responses logged on `date`, oldest first.
    pub fn error_logs_by_date(&self, date: NaiveDate) -> Result<Vec<ErrorLogRow>, ReportError> {
        let day = date.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare_cached(ERRORS_BY_DATE)?;
        let rows = stmt
            .query_map(params![day], |row| {
                Ok(ErrorLogRow {
                    ip_address: row.get(0)?,
                    timestamp: row.get(1)?,
                    method: row.get(2)?,
                    path: row.get(3)?,
                    status_code: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Requests per operating-system family, most common first.
    ///
    /// Each distinct user agent is classified once. Requests logged without a
    /// user agent have no row to join and are not counted.
    pub fn traffic_by_os(&self, n: Option<usize>) -> Result<Vec<CountRow>, ReportError> {
        let mut stmt = self.conn.prepare_cached(REQUESTS_BY_USER_AGENT)?;
        let mut rows = stmt.query([])?;

        let mut by_os: AHashMap<String, u64> = AHashMap::new();
        while let Some(row) = rows.next()? {
            let ua: String = row.get(0)?;
            let count = count_at(row, 1)?;
            *by_os.entry(self.classifier.os_family(&ua)).or_insert(0) += count;
        }

        let mut out: Vec<CountRow> = by_os
            .into_iter()
            .map(|(key, count)| CountRow { key, count })
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

        if let Some(n) = n {
            out.truncate(n);
        }
        Ok(out)
    }
}

fn count_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    row.get::<_, i64>(idx).map(|n| n.max(0) as u64)
}
