mod error;
mod loader;
pub mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, load_config_or_default, parse_config};
pub use types::WeblogConfig;
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_config};
