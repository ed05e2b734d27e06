use crate::conf::types::{UaEngineKind, WeblogConfig};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Batches beyond this hold a large slice of the log in memory at once.
const LARGE_BATCH_SIZE: usize = 100_000;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Dotted path of the offending setting, e.g. `ingest.batch_size`.
    pub field: &'static str,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    fn error(&mut self, field: &'static str, message: String, help: Option<&str>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            field,
            message,
            help: help.map(str::to_string),
        });
    }

    fn warning(&mut self, field: &'static str, message: String, help: Option<&str>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            field,
            message,
            help: help.map(str::to_string),
        });
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error".red().bold().to_string(),
                Severity::Warning => "warning".yellow().bold().to_string(),
            };
            out.push_str(&format!("{severity}: {}: {}\n", issue.field, issue.message));
            if let Some(help) = &issue.help {
                out.push_str(&format!("  {} {help}\n", "help:".cyan()));
            }
        }

        out
    }
}

pub fn validate_config(config: &WeblogConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.storage.path.as_os_str().is_empty() {
        report.error(
            "storage.path",
            "database path must not be empty".to_string(),
            Some("storage = { path = \"weblogs.db\" }"),
        );
    } else if let Some(parent) = config.storage.path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        report.warning(
            "storage.path",
            format!("directory '{}' does not exist", parent.display()),
            Some("create the directory before ingesting; SQLite will not"),
        );
    }

    if config.ingest.batch_size == 0 {
        report.error(
            "ingest.batch_size",
            "batch size must be greater than zero".to_string(),
            None,
        );
    } else if config.ingest.batch_size > LARGE_BATCH_SIZE {
        report.warning(
            "ingest.batch_size",
            format!(
                "batch size {} keeps that many records in memory per flush",
                config.ingest.batch_size
            ),
            None,
        );
    }

    if config.user_agent.engine == UaEngineKind::UaParser {
        match &config.user_agent.regexes {
            None => report.error(
                "user_agent.regexes",
                "the uaparser engine needs a regexes file".to_string(),
                Some("point `regexes` at a regexes.yaml from the ua-parser project"),
            ),
            Some(path) if !path.is_file() => report.error(
                "user_agent.regexes",
                format!("'{}' is not a file", path.display()),
                None,
            ),
            Some(_) => {}
        }
    } else if config.user_agent.regexes.is_some() {
        report.warning(
            "user_agent.regexes",
            "ignored unless engine = \"uaparser\"".to_string(),
            None,
        );
    }

    report
}
