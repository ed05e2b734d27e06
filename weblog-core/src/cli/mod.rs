//! Command implementations behind the `weblog` binary.

pub mod conf;
mod error;
mod preview;
mod process;
mod report;


pub use error::UsageError;
pub use preview::preview_logs;
pub use process::process_logs;
pub use report::{ReportArgs, generate_report};

use crate::conf::WeblogConfig;
use crate::store::Store;
use anyhow::Context;
use std::time::Duration;

fn open_store(config: &WeblogConfig) -> anyhow::Result<Store> {
    let path = &config.storage.path;
    Store::open_with_timeout(path, Duration::from_millis(config.storage.busy_timeout_ms))
        .with_context(|| format!("cannot open database {}", path.display()))
}
