//! Grain density normalization
//!
//! Rescales the grain count measured over an image to the count expected
//! over the reference area, assuming grains are spread uniformly.

use log::debug;

use crate::constants::density::REFERENCE_AREA;
use crate::statistics::aggregate::round_half_up;
use crate::{AnalysisError, Result};

/// Linear area-ratio density normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityNormalizer {
    reference_area: u64,
}

impl Default for DensityNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DensityNormalizer {
    /// Create a normalizer for the standard 1 mm² reference area
    pub fn new() -> Self {
        Self {
            reference_area: REFERENCE_AREA,
        }
    }

    /// Create a normalizer for a custom reference area
    pub fn with_reference_area(reference_area: u64) -> Result<Self> {
        if reference_area == 0 {
            return Err(AnalysisError::invalid_parameter("reference_area", reference_area));
        }
        Ok(Self { reference_area })
    }

    /// Reference area counts are rescaled to
    pub fn reference_area(&self) -> u64 {
        self.reference_area
    }

    /// Estimated grain count over the reference area
    ///
    /// Counts measured over exactly the reference area are returned as is.
    pub fn normalize(&self, grain_count: usize, image_area: u64) -> Result<i64> {
        if image_area == 0 {
            return Err(AnalysisError::InvalidArea { area: image_area });
        }

        if image_area == self.reference_area {
            return Ok(grain_count as i64);
        }

        let area_ratio = self.reference_area as f64 / image_area as f64;
        let density = round_half_up(grain_count as f64 * area_ratio);
        debug!(
            "{} grains over {} units² -> {} per {} units²",
            grain_count, image_area, density, self.reference_area
        );

        Ok(density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_area_is_identity() {
        let normalizer = DensityNormalizer::new();
        for count in [0, 1, 7, 12_345] {
            assert_eq!(normalizer.normalize(count, REFERENCE_AREA).unwrap(), count as i64);
        }
    }

    #[test]
    fn test_scales_by_area_ratio() {
        let normalizer = DensityNormalizer::new();
        assert_eq!(normalizer.normalize(4, 500_000).unwrap(), 8);
        assert_eq!(normalizer.normalize(10, 4_000_000).unwrap(), 3);
        assert_eq!(normalizer.normalize(3, 3_000_000).unwrap(), 1);
    }

    #[test]
    fn test_half_rounds_up() {
        let normalizer = DensityNormalizer::new();
        // 5 * 0.5 = 2.5
        assert_eq!(normalizer.normalize(5, 2_000_000).unwrap(), 3);
    }

    #[test]
    fn test_zero_area_rejected() {
        let normalizer = DensityNormalizer::new();
        assert!(matches!(
            normalizer.normalize(4, 0),
            Err(AnalysisError::InvalidArea { area: 0 })
        ));
    }

    #[test]
    fn test_custom_reference_area() {
        let normalizer = DensityNormalizer::with_reference_area(100).unwrap();
        assert_eq!(normalizer.reference_area(), 100);
        assert_eq!(normalizer.normalize(6, 200).unwrap(), 3);
        assert!(DensityNormalizer::with_reference_area(0).is_err());
    }
}
