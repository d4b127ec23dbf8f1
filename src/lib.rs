//! # Grain Score
//!
//! A Rust crate for computing grain-size statistics of metallographic
//! micrographs according to GOST 21073.
//!
//! Given the grains detected in an image (each reduced to its equivalent
//! circle diameter) and the image area, this library:
//! - Grades every grain with a score from the standard threshold table
//! - Aggregates scores and diameters into summary statistics
//! - Normalizes the grain count to a 1 mm² reference area
//! - Packages the results into a table report record
//!
//! ## Example
//!
//! ```rust
//! use grainscore::analyze_grains;
//!
//! let diameters = [0.001, 0.003, 0.05, 0.9];
//! let report = analyze_grains(&diameters, 500_000)?;
//! println!("{}", report.to_json_pretty()?);
//! # Ok::<(), grainscore::AnalysisError>(())
//! ```

pub mod error;
pub mod constants;
pub mod config;
pub mod grading;
pub mod statistics;
pub mod report;
pub mod analyzer;

pub use error::{AnalysisError, Result};
pub use config::AnalysisConfig;
pub use analyzer::GrainAnalyzer;
pub use grading::{EquivalentDiameter, ScoreClassifier};
pub use statistics::{DensityNormalizer, GrainStatistics};
pub use report::{GrainReport, ReportRow};

/// Compute the GOST 21073 grain report for one image
///
/// This is the main entry point. It uses the default reference area and
/// report layout; build a [`GrainAnalyzer`] from an [`AnalysisConfig`] to
/// change them.
///
/// # Arguments
///
/// * `grains` - Detected grains, in detection order
/// * `image_area` - Area of the analyzed image
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - `grains` is empty
/// - Every grain is coarser than the table's last bound
/// - `image_area` is zero
pub fn analyze_grains<G: EquivalentDiameter>(grains: &[G], image_area: u64) -> Result<GrainReport> {
    GrainAnalyzer::new().analyze(grains, image_area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_serialization() {
        let stats = GrainStatistics {
            average_score: 7,
            max_score: -3,
            min_score: 14,
            median_score: 13.5,
            average_diameter: 0.2385,
            average_density: 8,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"averageScore\":7"));
        assert!(json.contains("\"medianScore\":13.5"));

        let deserialized: GrainStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
