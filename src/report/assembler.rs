//! Tabular report assembly
//!
//! Converts [`GrainStatistics`] into label/value rows in a fixed order:
//! average score, average diameter, average density, minimum score,
//! median score, maximum score. Values are emitted as decimal strings so
//! the renderer can embed them directly.

use serde::{Deserialize, Serialize};

use crate::constants::report as consts;
use crate::statistics::GrainStatistics;
use crate::Result;

/// One label/value row, serialized as a two-element array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow(pub String, pub String);

impl ReportRow {
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> &str {
        &self.1
    }
}

/// Table display options passed through to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(rename = "tableColor")]
    pub color: String,
    pub borders: bool,
    #[serde(rename = "tableSize")]
    pub font_size: u32,
    #[serde(rename = "tableColWidth")]
    pub column_width: u32,
    #[serde(rename = "tableFontFamily")]
    pub font_family: String,
    #[serde(rename = "tableAlign")]
    pub align: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: consts::TABLE_COLOR.to_string(),
            borders: consts::TABLE_BORDERS,
            font_size: consts::TABLE_FONT_SIZE,
            column_width: consts::TABLE_COLUMN_WIDTH,
            font_family: consts::TABLE_FONT_FAMILY.to_string(),
            align: consts::TABLE_ALIGN.to_string(),
        }
    }
}

/// Row labels for the six reported values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLabels {
    pub average_score: String,
    pub average_diameter: String,
    pub average_density: String,
    pub min_score: String,
    pub median_score: String,
    pub max_score: String,
}

impl Default for RowLabels {
    fn default() -> Self {
        Self {
            average_score: consts::LABEL_AVERAGE_SCORE.to_string(),
            average_diameter: consts::LABEL_AVERAGE_DIAMETER.to_string(),
            average_density: consts::LABEL_AVERAGE_DENSITY.to_string(),
            min_score: consts::LABEL_MIN_SCORE.to_string(),
            median_score: consts::LABEL_MEDIAN_SCORE.to_string(),
            max_score: consts::LABEL_MAX_SCORE.to_string(),
        }
    }
}

/// Report record handed to the table renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrainReport {
    #[serde(rename = "val")]
    pub rows: Vec<ReportRow>,
    #[serde(rename = "opt")]
    pub options: DisplayOptions,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
}

impl GrainReport {
    /// Find a row value by label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label() == label)
            .map(ReportRow::value)
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds [`GrainReport`] records with fixed metadata
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    title: String,
    labels: RowLabels,
    options: DisplayOptions,
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAssembler {
    /// Create an assembler with the GOST 21073 title and default layout
    pub fn new() -> Self {
        Self {
            title: consts::TITLE.to_string(),
            labels: RowLabels::default(),
            options: DisplayOptions::default(),
        }
    }

    /// Create an assembler with custom metadata
    pub fn with_layout(title: impl Into<String>, labels: RowLabels, options: DisplayOptions) -> Self {
        Self {
            title: title.into(),
            labels,
            options,
        }
    }

    /// Package statistics into a report record
    pub fn assemble(&self, stats: &GrainStatistics) -> GrainReport {
        let labels = &self.labels;
        let rows = vec![
            ReportRow(labels.average_score.clone(), stats.average_score.to_string()),
            ReportRow(labels.average_diameter.clone(), format_real(stats.average_diameter)),
            ReportRow(labels.average_density.clone(), stats.average_density.to_string()),
            ReportRow(labels.min_score.clone(), stats.min_score.to_string()),
            ReportRow(labels.median_score.clone(), format_real(stats.median_score)),
            ReportRow(labels.max_score.clone(), stats.max_score.to_string()),
        ];

        GrainReport {
            rows,
            options: self.options.clone(),
            name: self.title.clone(),
            report_type: consts::REPORT_TYPE.to_string(),
        }
    }
}

/// Decimal form that always shows a fractional part ("8.0", "3.5")
fn format_real(value: f64) -> String {
    format!("{:?}", value)
}
