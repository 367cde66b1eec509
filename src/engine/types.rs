//! Engine types
//!
//! Run statistics and the summary returned by an export.

use std::path::PathBuf;

/// Statistics from an export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Data rows read from the input
    pub rows_read: usize,
    /// Rows at or above the threshold
    pub features_written: usize,
    /// Rows below the threshold
    pub rows_filtered: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ExportStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the number of rows loaded
    pub fn set_rows_read(&mut self, count: usize) {
        self.rows_read = count;
    }

    /// Record how many rows became features
    pub fn set_features_written(&mut self, count: usize) {
        self.features_written = count;
        self.rows_filtered = self.rows_read.saturating_sub(count);
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Absolute path of the written GeoJSON file
    pub output_path: PathBuf,
    /// Run statistics
    pub stats: ExportStats,
}
