use crate::cli::open_store;
use crate::conf::{ConfigError, load_config, validate_config};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(path: &Path, plain: bool) -> anyhow::Result<()> {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    };

    let report = validate_config(&config);
    if report.has_violations() {
        eprint!("{}", report.render_plain());
    }

    println!("✔ Config loaded from {}", path.display());
    println!("✔ batch size {}", config.ingest.batch_size);

    let store = open_store(&config)?;
    println!("✔ Database {} is reachable", config.storage.path.display());
    println!("✔ {} log entries", store.count_log_entries()?);
    println!("✔ {} user agents", store.count_user_agents()?);
    store.close()?;

    Ok(())
}

fn print_config_error(err: &ConfigError, plain: bool) {
    match err {
        ConfigError::Validation { path, report } => {
            eprintln!("{}", path.display());
            if plain {
                for issue in &report.errors {
                    eprintln!("error: {}: {}", issue.field, issue.message);
                }
            } else {
                eprint!("{}", report.render_plain());
            }
        }
        other if plain => eprintln!("{other}"),
        other => eprintln!("{} {other}", "✘".red()),
    }

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a config file with:\n\
             \n\
             weblog config init",
        ),

        ConfigError::Parse { .. } => Some(
            "Settings are grouped in three optional objects:\n\
             \n\
             storage    = { path = \"weblogs.db\" }\n\
             ingest     = { batch_size = 1000 }\n\
             user_agent = { engine = \"woothee\" }",
        ),

        ConfigError::Validation { .. } => None,
    }
}
