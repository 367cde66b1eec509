// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # school-geojson
//!
//! Converts school detection predictions, exported from a database as CSV,
//! into a GeoJSON FeatureCollection of the detections whose `school`
//! confidence is at or above a threshold.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use school_geojson::{ExportConfig, ExportEngine, Result, Threshold};
//!
//! fn main() -> Result<()> {
//!     let config = ExportConfig::new(
//!         "Query_Results_ghana.csv",
//!         Threshold::parse("0.9")?,
//!         "ghana",
//!     );
//!
//!     let summary = ExportEngine::new(config).run()?;
//!     println!("{}", summary.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!  CSV ──► loader ──► decode ──► engine (threshold) ──► output
//!          chunks     predictions                        {country}_{threshold}_schools.geojson
//!                     + geom
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document enum variants in decode::Geometry and error::Error

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Export configuration and YAML job files
pub mod config;

/// Chunked CSV loading
pub mod loader;

/// JSON cell decoding
pub mod decode;

/// Threshold filtering and export orchestration
pub mod engine;

/// GeoJSON output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExportConfig;
pub use engine::{ExportEngine, ExportSummary};
pub use error::{Error, Result};
pub use types::Threshold;
