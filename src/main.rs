//! school-geojson CLI
//!
//! Converts a CSV of school detections into a GeoJSON FeatureCollection

use clap::Parser;
use school_geojson::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the output path
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
