//! Export job configuration
//!
//! An export is described by an [`ExportConfig`]. It can be built directly,
//! assembled from command-line options, or loaded from a YAML job file:
//!
//! ```yaml
//! csv: exports/Query_Results_ghana.csv
//! threshold: "0.9"
//! country: ghana
//! output_dir: out
//! chunk_size: 5000
//! ```

use crate::error::{Error, Result};
use crate::types::Threshold;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Rows read per chunk when loading the input table
pub const DEFAULT_CHUNK_SIZE: usize = 5000;

/// Suffix appended to every output file name
pub const OUTPUT_SUFFIX: &str = "schools.geojson";

// ============================================================================
// Resolved Config
// ============================================================================

/// Fully resolved configuration for one export run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Path to the delimited-text export
    pub csv: PathBuf,
    /// Minimum `school` score to keep a row
    pub threshold: Threshold,
    /// Free-text country label used in the output file name
    pub country: String,
    /// Directory the GeoJSON file is written into
    pub output_dir: PathBuf,
    /// Rows per read chunk
    pub chunk_size: usize,
}

impl ExportConfig {
    /// Create a config writing into the current directory
    pub fn new(csv: impl Into<PathBuf>, threshold: Threshold, country: impl Into<String>) -> Self {
        Self {
            csv: csv.into(),
            threshold,
            country: country.into(),
            output_dir: PathBuf::from("."),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the read chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Output file name: `{country}_{threshold}_schools.geojson`
    pub fn output_file_name(&self) -> String {
        format!("{}_{}_{}", self.country, self.threshold, OUTPUT_SUFFIX)
    }

    /// Output path relative to however `output_dir` was given
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.output_file_name())
    }

    /// Check values that cannot be enforced by the types
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::invalid_value(
                "chunk_size",
                "must be greater than zero",
            ));
        }

        if self.country.contains(['/', '\\']) {
            return Err(Error::invalid_value(
                "country",
                "cannot contain path separators",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Partial Config (file + CLI layers)
// ============================================================================

/// Partially specified configuration, as read from a job file or the CLI
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default)]
    pub csv: Option<PathBuf>,

    #[serde(default, alias = "thresold")]
    pub threshold: Option<Threshold>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub chunk_size: Option<usize>,
}

impl PartialConfig {
    /// Overlay `other` on top of `self`; values set in `other` win
    #[must_use]
    pub fn merge(self, other: PartialConfig) -> Self {
        Self {
            csv: other.csv.or(self.csv),
            threshold: other.threshold.or(self.threshold),
            country: other.country.or(self.country),
            output_dir: other.output_dir.or(self.output_dir),
            chunk_size: other.chunk_size.or(self.chunk_size),
        }
    }

    /// Resolve into a complete, validated [`ExportConfig`]
    pub fn resolve(self) -> Result<ExportConfig> {
        let csv = self.csv.ok_or_else(|| Error::missing_field("csv"))?;
        let threshold = self
            .threshold
            .ok_or_else(|| Error::missing_field("threshold"))?;
        let country = self.country.ok_or_else(|| Error::missing_field("country"))?;

        let mut config = ExportConfig::new(csv, threshold, country);
        if let Some(dir) = self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(size) = self.chunk_size {
            config = config.with_chunk_size(size);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Load a partial config from a YAML job file
pub fn load_config(path: impl AsRef<Path>) -> Result<PartialConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a partial config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PartialConfig> {
    let config: PartialConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn threshold(text: &str) -> Threshold {
        Threshold::parse(text).unwrap()
    }

    #[test]
    fn test_output_file_name_uses_literal_threshold() {
        let config = ExportConfig::new("in.csv", threshold("0.90"), "ghana");
        assert_eq!(config.output_file_name(), "ghana_0.90_schools.geojson");
        assert_eq!(
            config.output_path(),
            PathBuf::from("./ghana_0.90_schools.geojson")
        );
    }

    #[test]
    fn test_defaults() {
        let config = ExportConfig::new("in.csv", threshold("0.5"), "kenya");
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_validate_rejects_zero_chunk() {
        let config = ExportConfig::new("in.csv", threshold("0.5"), "kenya").with_chunk_size(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "chunk_size"));
    }

    #[test]
    fn test_validate_rejects_path_in_country() {
        let config = ExportConfig::new("in.csv", threshold("0.5"), "../etc");
        assert!(config.validate().is_err());

        let config = ExportConfig::new("in.csv", threshold("0.5"), "a\\b");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_country() {
        let config = ExportConfig::new("in.csv", threshold("0.9"), "");
        assert!(config.validate().is_ok());
        assert_eq!(config.output_file_name(), "_0.9_schools.geojson");
    }

    #[test]
    fn test_load_config_from_str() {
        let yaml = r#"
csv: exports/ghana.csv
threshold: "0.90"
country: ghana
output_dir: out
chunk_size: 100
"#;
        let config = load_config_from_str(yaml).unwrap().resolve().unwrap();
        assert_eq!(config.csv, PathBuf::from("exports/ghana.csv"));
        assert_eq!(config.threshold.as_str(), "0.90");
        assert_eq!(config.country, "ghana");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.chunk_size, 100);
    }

    #[test]
    fn test_load_config_accepts_legacy_spelling() {
        let yaml = "csv: a.csv\nthresold: 0.8\ncountry: mali\n";
        let config = load_config_from_str(yaml).unwrap().resolve().unwrap();
        assert_eq!(config.threshold.as_str(), "0.8");
    }

    #[test]
    fn test_load_config_rejects_unknown_field() {
        let yaml = "csv: a.csv\nthreshhold: 0.8\n";
        assert!(matches!(
            load_config_from_str(yaml).unwrap_err(),
            Error::YamlParse(_)
        ));
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let file = PartialConfig {
            csv: Some(PathBuf::from("file.csv")),
            threshold: Some(threshold("0.9")),
            country: Some("ghana".to_string()),
            ..Default::default()
        };
        let cli = PartialConfig {
            country: Some("niger".to_string()),
            ..Default::default()
        };

        let config = file.merge(cli).resolve().unwrap();
        assert_eq!(config.csv, PathBuf::from("file.csv"));
        assert_eq!(config.country, "niger");
    }

    #[test]
    fn test_resolve_missing_field() {
        let partial = PartialConfig {
            csv: Some(PathBuf::from("a.csv")),
            country: Some("chad".to_string()),
            ..Default::default()
        };
        let err = partial.resolve().unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: threshold");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/job.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
