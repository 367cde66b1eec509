//! CLI runner - executes an export

use crate::cli::commands::Cli;
use crate::config::{load_config, ExportConfig, PartialConfig};
use crate::engine::{ExportEngine, ExportSummary};
use crate::error::{Result, ResultExt};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Merge the job file (if any) with command-line options
    pub fn resolve_config(&self) -> Result<ExportConfig> {
        let base = match &self.cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load job file {}", path.display()))?,
            None => PartialConfig::default(),
        };
        base.merge(self.cli.to_partial()).resolve()
    }

    /// Run the export and print the absolute output path
    pub fn run(&self) -> Result<ExportSummary> {
        let config = self.resolve_config()?;
        info!(
            "Exporting {} (country: {}, threshold: {})",
            config.csv.display(),
            config.country,
            config.threshold
        );

        let summary = ExportEngine::new(config).run()?;
        println!("{}", summary.output_path.display());
        Ok(summary)
    }
}
