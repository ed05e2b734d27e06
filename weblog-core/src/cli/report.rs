use crate::cli::error::UsageError;
use crate::cli::open_store;
use crate::conf::WeblogConfig;
use crate::enrichment::user_agent::build_os_classifier;
use crate::report::render::{render_json, render_table};
use crate::report::{Report, ReportEngine, ReportKind};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub kind: ReportKind,
    pub limit: Option<usize>,
    /// Raw `--date` value; validated here rather than by clap so the error
    /// names the report that needed it.
    pub date: Option<String>,
    pub json: bool,
}

/// `generate_report <report_type> [--limit N] [--date YYYY-MM-DD] [--json]`
pub fn generate_report(config: &WeblogConfig, args: &ReportArgs) -> anyhow::Result<Report> {
    // Usage problems must surface before the database is opened.
    let date = parse_date_arg(args.kind, args.date.as_deref())?;
    if args.limit == Some(0) {
        return Err(UsageError::ZeroLimit.into());
    }

    let store = open_store(config)?;
    let classifier = build_os_classifier(&config.user_agent)?;
    let report = ReportEngine::new(&store, &classifier).run(args.kind, args.limit, date)?;

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        println!();
        print!("{}", render_table(&report));
        println!();
    }

    Ok(report)
}

pub(crate) fn parse_date_arg(
    kind: ReportKind,
    date: Option<&str>,
) -> Result<Option<NaiveDate>, UsageError> {
    match date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| UsageError::InvalidDate {
                value: value.to_string(),
            }),
        None if kind.requires_date() => Err(UsageError::MissingDate {
            report: kind.as_str(),
        }),
        None => Ok(None),
    }
}
