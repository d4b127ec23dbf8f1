//! Configuration structures for the grain statistics pipeline.
//!
//! This module defines the tunable parts of the analysis: the area grain
//! counts are normalized to and the layout of the emitted report. The
//! score table itself is fixed by the grading standard and is not
//! configurable here.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use grainscore::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("grainscore.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default_gost_21073();
//! # Ok::<(), grainscore::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{density, report};
use crate::report::{DisplayOptions, RowLabels};
use crate::{AnalysisError, Result};

/// Complete pipeline configuration for grain statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Area grain counts are rescaled to (units², same unit as image area)
    pub reference_area: u64,

    /// Report layout
    pub report: ReportConfig,
}

/// Report metadata settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title
    pub title: String,

    /// Row labels
    #[serde(default)]
    pub labels: RowLabels,

    /// Display options forwarded to the renderer
    #[serde(default)]
    pub display: DisplayOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::default_gost_21073()
    }
}

impl AnalysisConfig {
    /// Create default configuration (GOST 21073, 1 mm² reference area)
    pub fn default_gost_21073() -> Self {
        Self {
            reference_area: density::REFERENCE_AREA,
            report: ReportConfig {
                title: report::TITLE.to_string(),
                labels: RowLabels::default(),
                display: DisplayOptions::default(),
            },
        }
    }

    /// Check values that would make the pipeline fail later
    pub fn validate(&self) -> Result<()> {
        if self.reference_area == 0 {
            return Err(AnalysisError::invalid_parameter("reference_area", self.reference_area));
        }
        if self.report.title.trim().is_empty() {
            return Err(AnalysisError::invalid_parameter("report.title", "<empty>"));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::config(format!("Failed to parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }
}
