//! Grain grading module
//!
//! This module maps detected grains to GOST 21073 grain scores
//! using their equivalent circle diameters.

pub mod grain;
pub mod classifier;

pub use grain::EquivalentDiameter;
pub use classifier::ScoreClassifier;
