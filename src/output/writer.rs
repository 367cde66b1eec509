//! GeoJSON file writer
//!
//! The whole document is serialized in memory before the file is created,
//! so a serialization failure never leaves a partial file behind.

use super::geojson::FeatureCollection;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes feature collections into a fixed output directory
#[derive(Debug, Clone)]
pub struct GeoJsonWriter {
    output_dir: PathBuf,
}

impl GeoJsonWriter {
    /// Create a writer for a directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `collection` to `file_name` inside the output directory.
    ///
    /// Returns the absolute path of the written file. An existing file is
    /// overwritten.
    pub fn write(&self, file_name: &str, collection: &FeatureCollection) -> Result<PathBuf> {
        if !self.output_dir.is_dir() {
            return Err(Error::output(format!(
                "Output directory does not exist: {}",
                self.output_dir.display()
            )));
        }

        let dir = self.output_dir.canonicalize().map_err(|e| {
            Error::output(format!(
                "Failed to resolve output directory {}: {e}",
                self.output_dir.display()
            ))
        })?;
        let path = dir.join(file_name);

        let bytes = write_feature_collection(&path, collection)?;
        debug!("Wrote {bytes} bytes to {}", path.display());
        Ok(path)
    }
}

/// Serialize a collection as compact JSON and write it to `path`.
///
/// Returns the number of bytes written.
pub fn write_feature_collection(
    path: impl AsRef<Path>,
    collection: &FeatureCollection,
) -> Result<usize> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec(collection)?;

    fs::write(path, &bytes).map_err(|e| {
        Error::output(format!("Failed to write {}: {e}", path.display()))
    })?;

    Ok(bytes.len())
}
