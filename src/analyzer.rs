//! Grain statistics pipeline
//!
//! Runs the four steps for one image with all intermediate values passed
//! explicitly:
//! - Extract equivalent circle diameters in input order
//! - Grade diameters into scores (oversized grains are dropped)
//! - Aggregate scores and diameters, normalize the grain count
//! - Assemble the report record
//!
//! The analyzer holds only configuration, so one instance can serve any
//! number of images, including from several threads.

use log::debug;

use crate::config::AnalysisConfig;
use crate::grading::{grain, EquivalentDiameter, ScoreClassifier};
use crate::report::{GrainReport, ReportAssembler};
use crate::statistics::{aggregate, DensityNormalizer, GrainStatistics};
use crate::{AnalysisError, Result};

/// Grain statistics analyzer for single images
#[derive(Debug, Clone)]
pub struct GrainAnalyzer {
    classifier: ScoreClassifier,
    normalizer: DensityNormalizer,
    assembler: ReportAssembler,
}

impl Default for GrainAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GrainAnalyzer {
    /// Create an analyzer with GOST 21073 defaults
    pub fn new() -> Self {
        Self {
            classifier: ScoreClassifier::new(),
            normalizer: DensityNormalizer::new(),
            assembler: ReportAssembler::new(),
        }
    }

    /// Create an analyzer from configuration
    pub fn with_config(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let report = &config.report;
        Ok(Self {
            classifier: ScoreClassifier::new(),
            normalizer: DensityNormalizer::with_reference_area(config.reference_area)?,
            assembler: ReportAssembler::with_layout(
                report.title.clone(),
                report.labels.clone(),
                report.display.clone(),
            ),
        })
    }

    /// Compute summary statistics for the grains of one image
    ///
    /// # Arguments
    ///
    /// * `grains` - Detected grains in detection order
    /// * `image_area` - Area of the analyzed image, same unit² as the reference area
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if:
    /// - No grains are supplied
    /// - No grain is fine enough to receive a score
    /// - The image area is zero
    pub fn compute_statistics<G: EquivalentDiameter>(
        &self,
        grains: &[G],
        image_area: u64,
    ) -> Result<GrainStatistics> {
        let diameters = grain::diameters(grains);
        self.statistics_from_diameters(&diameters, image_area)
    }

    /// Compute summary statistics from precomputed diameters
    pub fn statistics_from_diameters(
        &self,
        diameters: &[f64],
        image_area: u64,
    ) -> Result<GrainStatistics> {
        if diameters.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if image_area == 0 {
            return Err(AnalysisError::InvalidArea { area: image_area });
        }

        let scores = self.classifier.classify_all(diameters);
        if scores.is_empty() {
            return Err(AnalysisError::NoClassifiableGrains {
                excluded: diameters.len(),
            });
        }

        let (max_score, min_score) = aggregate::score_extremes(&scores)?;
        let stats = GrainStatistics {
            average_score: aggregate::average_score(&scores)?,
            max_score,
            min_score,
            median_score: aggregate::median_score(&scores)?,
            average_diameter: aggregate::average_diameter(diameters)?,
            average_density: self.normalizer.normalize(diameters.len(), image_area)?,
        };

        debug!(
            "{} grains ({} scored): {:?}",
            diameters.len(),
            scores.len(),
            stats
        );

        Ok(stats)
    }

    /// Compute statistics and package them into a report
    pub fn analyze<G: EquivalentDiameter>(&self, grains: &[G], image_area: u64) -> Result<GrainReport> {
        let stats = self.compute_statistics(grains, image_area)?;
        Ok(self.assembler.assemble(&stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_statistics_with_excluded_grain() {
        let analyzer = GrainAnalyzer::new();
        let stats = analyzer
            .statistics_from_diameters(&[0.001, 0.003, 0.05, 1.5], 500_000)
            .unwrap();

        // scores [14, 13, 5]
        assert_eq!(stats.average_score, 11);
        assert_eq!(stats.max_score, 5);
        assert_eq!(stats.min_score, 14);
        assert_relative_eq!(stats.median_score, 13.5);
        assert_relative_eq!(stats.average_diameter, 0.3885, epsilon = 1e-12);
        // excluded grain still counts towards density
        assert_eq!(stats.average_density, 8);
    }

    #[test]
    fn test_empty_input() {
        let analyzer = GrainAnalyzer::new();
        let grains: Vec<f64> = Vec::new();
        assert!(matches!(
            analyzer.compute_statistics(&grains, 1_000_000),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn test_all_grains_oversized() {
        let analyzer = GrainAnalyzer::new();
        assert!(matches!(
            analyzer.statistics_from_diameters(&[1.2, 4.0], 1_000_000),
            Err(AnalysisError::NoClassifiableGrains { excluded: 2 })
        ));
    }

    #[test]
    fn test_zero_image_area() {
        let analyzer = GrainAnalyzer::new();
        assert!(matches!(
            analyzer.statistics_from_diameters(&[0.01], 0),
            Err(AnalysisError::InvalidArea { area: 0 })
        ));
    }

    #[test]
    fn test_with_config_uses_reference_area() {
        let mut config = AnalysisConfig::default_gost_21073();
        config.reference_area = 250_000;
        let analyzer = GrainAnalyzer::with_config(&config).unwrap();

        let stats = analyzer
            .statistics_from_diameters(&[0.01, 0.02, 0.03, 0.04], 1_000_000)
            .unwrap();
        assert_eq!(stats.average_density, 1);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = AnalysisConfig::default_gost_21073();
        config.reference_area = 0;
        assert!(GrainAnalyzer::with_config(&config).is_err());
    }
}
