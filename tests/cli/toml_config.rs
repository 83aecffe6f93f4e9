//! Configuration file tests

use clap::Parser;
use helpqueue::app::cli::{Args, ConfigError};
use std::fs;

#[tokio::test]
async fn test_config_file_fills_unset_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("helpqueue.toml");
    fs::write(
        &path,
        "refresh-period = 5\nsettle-delay = 2\nannouncement = \"From file\"\nlog-format = \"json\"\n",
    )
    .unwrap();

    let mut args = Args::try_parse_from([
        "helpqueue",
        "--config-file",
        path.to_str().unwrap(),
        "--refresh-period",
        "7",
    ])
    .unwrap();
    let loaded = args.load_config_file().await.unwrap();

    assert_eq!(loaded, Some(path));
    assert_eq!(args.refresh_period, Some(7));
    assert_eq!(args.settle_delay, Some(2));
    assert_eq!(args.announcement.as_deref(), Some("From file"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
}

#[tokio::test]
async fn test_zero_period_in_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "refresh-period = 0\n").unwrap();

    let mut args = Args::default();
    let err = args.load_config_from(&path).await.unwrap_err();

    match err {
        ConfigError::InvalidValue { key, message } => {
            assert_eq!(key, "refresh-period");
            assert!(message.contains("greater than 0"));
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_apply_toml_table_directly() {
    let mut config = toml::Table::new();
    config.insert("color".to_string(), toml::Value::Boolean(true));
    config.insert("log-file".to_string(), toml::Value::String("none".to_string()));

    let mut args = Args::default();
    args.apply_toml_values(&config).unwrap();

    assert_eq!(args.color_choice(), Some(true));
    assert_eq!(args.log_file_spec(), None);
}
