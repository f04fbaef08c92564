use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log_filter::config::{ConfigError, FilterConfig, load_config_from_path};
use log_filter::{Cli, RunSettings};
use tempfile::tempdir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("log-filter").chain(args.iter().copied()))
        .expect("valid arguments")
}

#[test]
fn test_defaults_without_cli_or_config() {
    let settings = RunSettings::resolve(&cli(&[]), &FilterConfig::default());

    assert_eq!(settings.input, PathBuf::from("logs.txt"));
    assert_eq!(settings.output, PathBuf::from("filtered_logs.txt"));
    assert_eq!(settings.filter.level(), None);
    assert_eq!(settings.filter.service(), None);
}

#[test]
fn test_config_file_values_are_loaded() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("log-filter.toml");
    fs::write(
        &path,
        r#"
input = "app.log"
output = "app-errors.log"

[filter]
level = "error"
service = "billing"
"#,
    )
    .expect("write config");

    let config = load_config_from_path(&path).expect("config parses");
    let settings = RunSettings::resolve(&cli(&[]), &config);

    assert_eq!(settings.input, PathBuf::from("app.log"));
    assert_eq!(settings.output, PathBuf::from("app-errors.log"));
    assert_eq!(settings.filter.level(), Some("ERROR"));
    assert_eq!(settings.filter.service(), Some("billing"));
}

#[test]
fn test_cli_overrides_config() {
    let mut config = FilterConfig::default();
    config.input = PathBuf::from("config.log");
    config.filter.level = Some("WARN".to_string());
    config.filter.service = Some("auth".to_string());

    let settings = RunSettings::resolve(
        &cli(&["--level", "info", "--input", "cli.log", "--out", "cli-out.txt"]),
        &config,
    );

    assert_eq!(settings.input, PathBuf::from("cli.log"));
    assert_eq!(settings.output, PathBuf::from("cli-out.txt"));
    assert_eq!(settings.filter.level(), Some("INFO"));
    assert_eq!(settings.filter.service(), Some("auth"));
}

#[test]
fn test_invalid_config_reports_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "input = [not toml").expect("write config");

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Invalid filter config "), "got: {message}");
    assert!(message.contains("bad.toml"), "got: {message}");
}

#[test]
fn test_missing_config_reports_read_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().starts_with("Cannot read filter config "));
}
