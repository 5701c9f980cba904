//! Unit tests for configuration loading and layering

use crate::common::TestFixture;
use clap::Parser;
use csvdiff::cli::Cli;
use csvdiff::commands::resolve_config;
use csvdiff::{CsvDiffError, DiffConfig};

#[test]
fn test_config_round_trips_through_json() {
    let config = DiffConfig {
        epsilon: 1e-4,
        match_by_similarity: true,
        group_results_by_classification: true,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: DiffConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_file_with_cli_overrides() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_csv_raw("csvdiff.json", r#"{"epsilon": 0.01, "hide_nan_columns": true}"#)
        .unwrap();

    let cli = Cli::try_parse_from([
        "csvdiff",
        "ref.csv",
        "data.csv",
        "--config",
        config_path.to_str().unwrap(),
        "--group",
    ])
    .unwrap();

    let config = resolve_config(&cli).unwrap();
    assert_eq!(config.epsilon, 0.01);
    assert!(config.hide_nan_columns);
    assert!(config.group_results_by_classification);
    assert!(!config.hide_same_columns);
}

#[test]
fn test_config_file_with_invalid_epsilon() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_csv_raw("csvdiff.json", r#"{"epsilon": -0.5}"#)
        .unwrap();

    let err = DiffConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, CsvDiffError::Config { .. }));
}

#[test]
fn test_config_file_with_malformed_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_csv_raw("csvdiff.json", "{ epsilon: ").unwrap();

    let err = DiffConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, CsvDiffError::Json(_)));
}
