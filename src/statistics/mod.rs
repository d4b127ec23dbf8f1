//! Grain statistics module
//!
//! This module reduces graded grains to summary statistics and
//! normalizes grain counts to a reference area.

pub mod aggregate;
pub mod density;

use serde::{Deserialize, Serialize};

pub use aggregate::round_half_up;
pub use density::DensityNormalizer;

/// Summary statistics for one analyzed image
///
/// `max_score` and `min_score` follow the grading convention where a
/// numerically smaller score denotes a coarser (larger) grain: the
/// "maximum" field holds the smallest score and the "minimum" field the
/// largest one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrainStatistics {
    /// Mean grain score, rounded half-up
    pub average_score: i64,
    /// Coarsest grade present (numerically smallest score)
    pub max_score: i32,
    /// Finest grade present (numerically largest score)
    pub min_score: i32,
    /// Midpoint of the two central scores in input order
    pub median_score: f64,
    /// Mean equivalent circle diameter over all grains
    pub average_diameter: f64,
    /// Grain count rescaled to the reference area
    pub average_density: i64,
}
