use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use weblog_core::cli::{self, ReportArgs, UsageError, conf::ConfigCmd};
use weblog_core::conf::{DEFAULT_CONFIG_PATH, WeblogConfig, load_config, load_config_or_default};
use weblog_core::logging::{LogFormat, default_log_format, init_logging};
use weblog_core::report::ReportKind;

#[derive(Parser, Debug)]
#[command(
    name = "weblog",
    version,
    about = "Weblog: access-log ingestion and reporting"
)]
struct Cli {
    /// Path to the weblog config file. The default location may be absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a log file and store its entries
    #[command(name = "process_logs")]
    ProcessLogs {
        /// Path to the log file
        filename: PathBuf,

        /// Records per database batch
        #[arg(long = "batch_size", alias = "batch-size")]
        batch_size: Option<usize>,
    },

    /// Print one of the aggregate reports
    #[command(name = "generate_report")]
    GenerateReport {
        #[arg(value_enum)]
        report_type: ReportKind,

        /// Row limit: top-N reports default to 5, traffic_by_os to every family
        #[arg(long)]
        limit: Option<usize>,

        /// Date for error_logs_by_date (format: YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse a log file without storing it and show the first records
    #[command(name = "preview_logs")]
    PreviewLogs {
        filename: PathBuf,

        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.downcast_ref::<UsageError>().is_some() => {
            eprintln!("usage error: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Cli) -> anyhow::Result<()> {
    match opts.command {
        Command::ProcessLogs {
            filename,
            batch_size,
        } => {
            let config = resolve_config(opts.config)?;
            cli::process_logs(&config, &filename, batch_size)?;
        }

        Command::GenerateReport {
            report_type,
            limit,
            date,
            json,
        } => {
            let config = resolve_config(opts.config)?;
            let args = ReportArgs {
                kind: report_type,
                limit,
                date,
                json,
            };
            cli::generate_report(&config, &args)?;
        }

        Command::PreviewLogs { filename, count } => {
            cli::preview_logs(&filename, count)?;
        }

        Command::Config { cmd } => cli::conf::run(cmd)?,
    }

    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn resolve_config(path: Option<PathBuf>) -> anyhow::Result<WeblogConfig> {
    let config = match path {
        Some(path) => load_config(&path)?,
        None => load_config_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    Ok(config)
}
