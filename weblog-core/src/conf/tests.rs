use crate::conf::types::UaEngineKind;
use crate::conf::{ConfigError, load_config, load_config_or_default, parse_config, validate_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn parse_full_config_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("weblog.hcl");
    fs::write(
        &path,
        r#"
storage = {
  path            = "data/weblogs.db"
  busy_timeout_ms = 250
}

ingest = {
  batch_size = 500
}

user_agent = {
  engine = "woothee"
}
"#,
    )
    .unwrap();

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(config.storage.path, PathBuf::from("data/weblogs.db"));
    assert_eq!(config.storage.busy_timeout_ms, 250);
    assert_eq!(config.ingest.batch_size, 500);
    assert_eq!(config.user_agent.engine, UaEngineKind::Woothee);
    assert_eq!(config.user_agent.regexes, None);
}

#[test]
fn empty_file_uses_defaults() {
    let config = parse_config(Path::new("weblog.hcl"), "").unwrap();

    assert_eq!(config.storage.path, PathBuf::from("weblogs.db"));
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.ingest.batch_size, 1_000);
    assert_eq!(config.user_agent.engine, UaEngineKind::Woothee);
}

#[test]
fn unknown_fields_are_rejected() {
    let result = parse_config(
        Path::new("weblog.hcl"),
        r#"
storage = {
  host = "localhost"
}
"#,
    );

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();

    let config = load_config_or_default(&dir.path().join("absent.hcl")).unwrap();

    assert_eq!(config.ingest.batch_size, 1_000);
}

#[test]
fn missing_file_is_an_error_for_strict_loads() {
    let dir = tempdir().unwrap();

    let result = load_config(&dir.path().join("absent.hcl"));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn zero_batch_size_fails_validation() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("weblog.hcl");
    fs::write(&path, "ingest = {\n  batch_size = 0\n}\n").unwrap();

    // Act
    let err = load_config(&path).err().unwrap();

    // Assert
    let report = match err {
        ConfigError::Validation { report, .. } => report,
        other => panic!("expected a validation error, got {other:?}"),
    };
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, "ingest.batch_size");
}

#[test]
fn uaparser_without_regexes_fails_validation() {
    let config = parse_config(
        Path::new("weblog.hcl"),
        "user_agent = {\n  engine = \"uaparser\"\n}\n",
    )
    .unwrap();

    let report = validate_config(&config);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, "user_agent.regexes");
}

#[test]
fn regexes_without_uaparser_only_warns() {
    let config = parse_config(
        Path::new("weblog.hcl"),
        "user_agent = {\n  regexes = \"regexes.yaml\"\n}\n",
    )
    .unwrap();

    let report = validate_config(&config);

    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.has_violations());
    assert!(report.render_plain().contains("user_agent.regexes"));
}
