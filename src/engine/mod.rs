//! Export engine module
//!
//! Runs the load, decode, filter, write pipeline.
//!
//! # Overview
//!
//! The engine module provides:
//! - `build_feature_collection` - Threshold filter over decoded rows
//! - `ExportEngine` - Orchestrates one export from a resolved config
//! - `ExportSummary` / `ExportStats` - What a run produced

mod types;

pub use types::{ExportStats, ExportSummary};

use crate::config::ExportConfig;
use crate::decode::{decode_table, DecodedRecord};
use crate::error::Result;
use crate::loader::{load_table, Table};
use crate::output::{Feature, FeatureCollection, GeoJsonWriter};
use crate::types::Threshold;
use std::time::Instant;
use tracing::{debug, info};

/// Keep rows whose `school` score is at or above the threshold, in order
pub fn build_feature_collection(
    records: &[DecodedRecord],
    threshold: &Threshold,
) -> FeatureCollection {
    records
        .iter()
        .filter(|r| threshold.admits(r.school_score()))
        .map(|r| Feature::new(r.geometry.clone(), r.predictions.school.clone()))
        .collect()
}

/// Export engine for a single run
pub struct ExportEngine {
    /// Export configuration
    config: ExportConfig,
    /// Statistics
    stats: ExportStats,
}

impl ExportEngine {
    /// Create a new export engine
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            stats: ExportStats::default(),
        }
    }

    /// Get statistics
    pub fn stats(&self) -> &ExportStats {
        &self.stats
    }

    /// Load the input, then transform and write it
    pub fn run(&mut self) -> Result<ExportSummary> {
        self.config.validate()?;

        let table = load_table(&self.config.csv, self.config.chunk_size)?;
        self.export(&table)
    }

    /// Transform an already loaded table and write the output file
    pub fn run_table(&mut self, table: &Table) -> Result<ExportSummary> {
        self.config.validate()?;
        self.export(table)
    }

    /// Nothing is written unless every row decodes
    fn export(&mut self, table: &Table) -> Result<ExportSummary> {
        let start = Instant::now();
        self.stats.set_rows_read(table.len());

        let records = decode_table(table)?;
        let collection = build_feature_collection(&records, &self.config.threshold);
        self.stats.set_features_written(collection.len());
        debug!(
            "{} of {} rows at or above threshold {}",
            collection.len(),
            records.len(),
            self.config.threshold
        );

        let writer = GeoJsonWriter::new(&self.config.output_dir);
        let output_path = writer.write(&self.config.output_file_name(), &collection)?;

        #[allow(clippy::cast_possible_truncation)]
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Wrote {} features ({} filtered) to {}",
            self.stats.features_written,
            self.stats.rows_filtered,
            output_path.display()
        );

        Ok(ExportSummary {
            output_path,
            stats: self.stats.clone(),
        })
    }
}
