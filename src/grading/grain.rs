//! Grain input abstraction
//!
//! The detection stage produces grain regions; grading only needs the
//! diameter of the circle with the same area as each region.

/// A detected grain region reduced to its equivalent circle diameter
pub trait EquivalentDiameter {
    /// Diameter of the circle whose area equals the grain's area
    fn eq_circle_diameter(&self) -> f64;
}

impl EquivalentDiameter for f64 {
    fn eq_circle_diameter(&self) -> f64 {
        *self
    }
}

impl<T: EquivalentDiameter + ?Sized> EquivalentDiameter for &T {
    fn eq_circle_diameter(&self) -> f64 {
        (**self).eq_circle_diameter()
    }
}

impl<T: EquivalentDiameter + ?Sized> EquivalentDiameter for Box<T> {
    fn eq_circle_diameter(&self) -> f64 {
        (**self).eq_circle_diameter()
    }
}

/// Collect equivalent circle diameters in input order
pub fn diameters<G: EquivalentDiameter>(grains: &[G]) -> Vec<f64> {
    grains.iter().map(|grain| grain.eq_circle_diameter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Polygon {
        area: f64,
    }

    impl EquivalentDiameter for Polygon {
        fn eq_circle_diameter(&self) -> f64 {
            2.0 * (self.area / std::f64::consts::PI).sqrt()
        }
    }

    #[test]
    fn test_diameters_preserve_input_order() {
        let grains = vec![0.3, 0.001, 0.05];
        assert_eq!(diameters(&grains), vec![0.3, 0.001, 0.05]);
    }

    #[test]
    fn test_custom_grain_type() {
        let grains = vec![Polygon { area: std::f64::consts::PI }];
        let d = diameters(&grains);
        assert!((d[0] - 2.0).abs() < 1e-12);

        let refs: Vec<&Polygon> = grains.iter().collect();
        assert_eq!(diameters(&refs), d);
    }
}
