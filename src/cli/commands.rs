//! CLI arguments and parsing

use crate::config::PartialConfig;
use crate::types::Threshold;
use clap::Parser;
use std::path::PathBuf;

/// Write GeoJSON of school detections extracted from a database CSV export
#[derive(Parser, Debug)]
#[command(name = "school-geojson")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV exported from the database
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Minimum school confidence score to keep, e.g. 0.9
    #[arg(long, alias = "thresold", value_parser = parse_threshold)]
    pub threshold: Option<Threshold>,

    /// Country name used in the output file name
    #[arg(long)]
    pub country: Option<String>,

    /// Directory to write the GeoJSON file into [default: current directory]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Rows read per chunk [default: 5000]
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// YAML job file; command-line options override its values
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options given on the command line, as a config layer
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            csv: self.csv.clone(),
            threshold: self.threshold.clone(),
            country: self.country.clone(),
            output_dir: self.output_dir.clone(),
            chunk_size: self.chunk_size,
        }
    }
}

fn parse_threshold(s: &str) -> std::result::Result<Threshold, String> {
    Threshold::parse(s).map_err(|e| e.to_string())
}
