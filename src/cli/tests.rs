//! Tests for CLI parsing and config resolution

use super::*;
use crate::error::Error;
use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::tempdir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("school-geojson").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_required_options() {
    let cli = parse(&["--csv", "ghana.csv", "--threshold", "0.9", "--country", "ghana"]);
    assert_eq!(cli.csv, Some(PathBuf::from("ghana.csv")));
    assert_eq!(cli.threshold.as_ref().map(|t| t.as_str()), Some("0.9"));
    assert_eq!(cli.country.as_deref(), Some("ghana"));
    assert!(!cli.verbose);
}

#[test]
fn test_parse_equals_form_and_legacy_alias() {
    let cli = parse(&["--csv=a.csv", "--thresold=0.90", "--country=ghana"]);
    assert_eq!(cli.threshold.unwrap().as_str(), "0.90");
}

#[test]
fn test_parse_rejects_non_numeric_threshold() {
    let result = Cli::try_parse_from([
        "school-geojson",
        "--csv",
        "a.csv",
        "--threshold",
        "high",
        "--country",
        "x",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_resolve_defaults() {
    let runner = Runner::new(parse(&[
        "--csv", "a.csv", "--threshold", "0.8", "--country", "mali",
    ]));
    let config = runner.resolve_config().unwrap();

    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.chunk_size, 5000);
    assert_eq!(config.output_file_name(), "mali_0.8_schools.geojson");
}

#[test]
fn test_resolve_missing_country() {
    let runner = Runner::new(parse(&["--csv", "a.csv", "--threshold", "0.8"]));
    let err = runner.resolve_config().unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "country"));
}

#[test]
fn test_resolve_job_file_with_override() {
    let dir = tempdir().unwrap();
    let job = dir.path().join("job.yaml");
    std::fs::write(
        &job,
        "csv: from_file.csv\nthreshold: \"0.95\"\ncountry: ghana\nchunk_size: 10\n",
    )
    .unwrap();

    let runner = Runner::new(parse(&[
        "--config",
        job.to_str().unwrap(),
        "--country",
        "togo",
    ]));
    let config = runner.resolve_config().unwrap();

    assert_eq!(config.csv, PathBuf::from("from_file.csv"));
    assert_eq!(config.threshold.as_str(), "0.95");
    assert_eq!(config.country, "togo");
    assert_eq!(config.chunk_size, 10);
}
