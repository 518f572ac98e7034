//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use timeline_tui::TuiConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_path_uses_defaults() {
    let config = TuiConfig::load(None).unwrap();
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("timeline_tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.poll_interval_ms(), 100);
    assert!(*config.show_move_details());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("log_filter = \"debug\"\nshow_move_details = false\n");
    let config = TuiConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.show_move_details());
    assert_eq!(*config.poll_interval_ms(), 100);
}

#[test]
fn test_zero_poll_interval_is_rejected() {
    let file = write_config("poll_interval_ms = 0\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("poll_interval_ms"));
}

#[test]
fn test_malformed_file_is_rejected() {
    let file = write_config("poll_interval_ms = \"soon\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let err = TuiConfig::from_file("/nonexistent/timeline_tui.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
