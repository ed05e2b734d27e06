use crate::conf::error::ConfigError;
use crate::conf::types::WeblogConfig;
use crate::conf::validation::validate_config;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config/weblog.hcl";

/// Read, parse and validate a config file. Warnings are returned alongside the
/// config by [`validate_config`]; only errors fail the load.
pub fn load_config(path: &Path) -> Result<WeblogConfig, ConfigError> {
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &src)?;

    let report = validate_config(&config);
    if !report.errors.is_empty() {
        return Err(ConfigError::Validation {
            path: path.to_path_buf(),
            report,
        });
    }

    Ok(config)
}

/// Like [`load_config`], but a missing file means "use the defaults".
pub fn load_config_or_default(path: &Path) -> Result<WeblogConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::ReadFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found; using defaults");
            Ok(WeblogConfig::default())
        }
        other => other,
    }
}

pub fn parse_config(path: &Path, src: &str) -> Result<WeblogConfig, ConfigError> {
    hcl::from_str(src).map_err(|e| ConfigError::parse(path, e))
}
