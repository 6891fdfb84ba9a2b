use clap::Parser;
use rsleeptime::cli::commands::plan::state_path;
use rsleeptime::cli::parser::Cli;
use rsleeptime::config::Config;
use rsleeptime::errors::AppError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_file_is_read_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rsleeptime.conf");
    fs::write(
        &path,
        "state_file: /tmp/elsewhere.json\npoll_interval_ms: 250\nbar_width: 12\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.state_file, "/tmp/elsewhere.json");
    assert_eq!(cfg.poll_interval_ms, 250);
    assert_eq!(cfg.bar_width, 12);
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempdir().unwrap();

    let cfg = Config::load_from(&dir.path().join("absent.conf")).unwrap();

    assert_eq!(cfg.poll_interval_ms, 750);
    assert_eq!(cfg.bar_width, 40);
    assert!(cfg.state_file.ends_with("values.json"));
}

#[test]
fn test_broken_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rsleeptime.conf");
    fs::write(&path, "poll_interval_ms: 0\n").unwrap();

    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_state_flag_overrides_configured_file() {
    let cfg = Config {
        state_file: "/tmp/configured.json".to_string(),
        ..Config::default()
    };
    let cli = Cli::try_parse_from(["rsleeptime", "--state", "/tmp/from_flag.json"]).unwrap();

    assert_eq!(state_path(&cli, &cfg), PathBuf::from("/tmp/from_flag.json"));
}

#[test]
fn test_configured_state_file_used_without_flag() {
    let cfg = Config {
        state_file: "/tmp/configured.json".to_string(),
        ..Config::default()
    };
    let cli = Cli::try_parse_from(["rsleeptime", "--no-countdown"]).unwrap();

    assert_eq!(state_path(&cli, &cfg), PathBuf::from("/tmp/configured.json"));
}
