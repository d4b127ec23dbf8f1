//! GOST 21073 grain score classification
//!
//! Grades each grain by looking its equivalent circle diameter up in an
//! ordered threshold table:
//! - Bounds are inclusive upper limits, searched from finest to coarsest
//! - Diameters above the last bound receive no score and are dropped
//! - Non-positive diameters land in the finest bucket (no validation)

use log::{debug, trace};

use crate::constants::gost::SCORE_TABLE;

/// Score classifier over a static (upper bound, score) table
#[derive(Debug, Clone, Copy)]
pub struct ScoreClassifier {
    table: &'static [(f64, i32)],
}

impl Default for ScoreClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreClassifier {
    /// Create a classifier using the GOST 21073 table
    pub fn new() -> Self {
        Self { table: &SCORE_TABLE }
    }

    /// Create a classifier with a custom table
    ///
    /// The table must be sorted by ascending upper bound.
    pub fn with_table(table: &'static [(f64, i32)]) -> Self {
        Self { table }
    }

    /// Threshold table used by this classifier
    pub fn table(&self) -> &'static [(f64, i32)] {
        self.table
    }

    /// Grade a single diameter
    ///
    /// Returns `None` when the diameter exceeds every bound (or is NaN).
    pub fn classify(&self, diameter: f64) -> Option<i32> {
        self.table
            .iter()
            .find(|&&(bound, _)| diameter <= bound)
            .map(|&(_, score)| score)
    }

    /// Grade a sequence of diameters, keeping input order
    ///
    /// Ungraded diameters are skipped, so the result may be shorter
    /// than the input.
    pub fn classify_all(&self, diameters: &[f64]) -> Vec<i32> {
        let scores: Vec<i32> = diameters
            .iter()
            .filter_map(|&diameter| {
                let score = self.classify(diameter);
                match score {
                    Some(score) => trace!("diameter {} -> score {}", diameter, score),
                    None => debug!("diameter {} exceeds score table, grain excluded", diameter),
                }
                score
            })
            .collect();

        if scores.len() < diameters.len() {
            debug!(
                "{} of {} grains excluded from scoring",
                diameters.len() - scores.len(),
                diameters.len()
            );
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let classifier = ScoreClassifier::new();
        for &(bound, score) in SCORE_TABLE.iter() {
            assert_eq!(classifier.classify(bound), Some(score), "bound {}", bound);
        }
    }

    #[test]
    fn test_just_above_bound_moves_to_next_bucket() {
        let classifier = ScoreClassifier::new();
        assert_eq!(classifier.classify(0.0021), Some(13));
        assert_eq!(classifier.classify(0.081), Some(2));
        assert_eq!(classifier.classify(0.71), Some(-3));
    }

    #[test]
    fn test_interior_values() {
        let classifier = ScoreClassifier::new();
        assert_eq!(classifier.classify(0.001), Some(14));
        assert_eq!(classifier.classify(0.003), Some(13));
        assert_eq!(classifier.classify(0.025), Some(7));
        assert_eq!(classifier.classify(0.035), Some(6));
        assert_eq!(classifier.classify(0.05), Some(5));
        assert_eq!(classifier.classify(0.1), Some(2));
        assert_eq!(classifier.classify(0.25), Some(0));
        assert_eq!(classifier.classify(0.9), Some(-3));
    }

    #[test]
    fn test_oversized_diameter_is_unscored() {
        let classifier = ScoreClassifier::new();
        assert_eq!(classifier.classify(1.0000001), None);
        assert_eq!(classifier.classify(25.0), None);
        assert_eq!(classifier.classify(f64::NAN), None);
    }

    #[test]
    fn test_non_positive_diameter_is_finest() {
        let classifier = ScoreClassifier::new();
        assert_eq!(classifier.classify(0.0), Some(14));
        assert_eq!(classifier.classify(-0.5), Some(14));
    }

    #[test]
    fn test_classify_all_skips_excluded_and_keeps_order() {
        let classifier = ScoreClassifier::new();
        let scores = classifier.classify_all(&[0.05, 1.5, 0.001, 0.003, 3.0]);
        assert_eq!(scores, vec![5, 14, 13]);
    }

    #[test]
    fn test_custom_table() {
        static TABLE: [(f64, i32); 2] = [(1.0, 2), (2.0, 1)];
        let classifier = ScoreClassifier::with_table(&TABLE);
        assert_eq!(classifier.classify(1.5), Some(1));
        assert_eq!(classifier.classify(2.5), None);
        assert_eq!(classifier.table().len(), 2);
    }
}
