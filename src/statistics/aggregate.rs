//! Score and diameter aggregation
//!
//! Reduces the score and diameter sequences of one image to summary
//! values. The diameter sequence may be longer than the score sequence
//! when some grains were too coarse to grade.

use crate::{AnalysisError, Result};

/// Round to the nearest integer, ties towards positive infinity
///
/// Matches the rounding used by the reporting chain this crate feeds:
/// `2.5 -> 3` and `-2.5 -> -2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Mean score rounded half-up
pub fn average_score(scores: &[i32]) -> Result<i64> {
    if scores.is_empty() {
        return Err(AnalysisError::NoClassifiableGrains { excluded: 0 });
    }

    let sum: f64 = scores.iter().map(|&s| s as f64).sum();
    Ok(round_half_up(sum / scores.len() as f64))
}

/// Score extremes as `(max_score, min_score)` report fields
///
/// The "max" field takes the numerically smallest score (coarsest grain)
/// and the "min" field the numerically largest.
pub fn score_extremes(scores: &[i32]) -> Result<(i32, i32)> {
    let coarsest = scores.iter().copied().min();
    let finest = scores.iter().copied().max();

    match (coarsest, finest) {
        (Some(coarsest), Some(finest)) => Ok((coarsest, finest)),
        _ => Err(AnalysisError::NoClassifiableGrains { excluded: 0 }),
    }
}

/// Midpoint of the scores at positions n/2 and n/2 - 1
///
/// Positions refer to input order; the sequence is not sorted first.
/// A single score is its own midpoint.
pub fn median_score(scores: &[i32]) -> Result<f64> {
    if scores.is_empty() {
        return Err(AnalysisError::NoClassifiableGrains { excluded: 0 });
    }

    let upper = scores.len() / 2;
    let lower = upper.saturating_sub(1);
    Ok((scores[upper] as f64 + scores[lower] as f64) / 2.0)
}

/// Arithmetic mean of all diameters, graded or not
pub fn average_diameter(diameters: &[f64]) -> Result<f64> {
    if diameters.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    Ok(diameters.iter().sum::<f64>() / diameters.len() as f64)
}
