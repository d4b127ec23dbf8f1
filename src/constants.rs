//! Grading constants and reference values for grain statistics
//!
//! This module contains compile-time constants for grain scoring
//! according to GOST 21073 and the report layout used downstream.

/// GOST 21073 grain score table
///
/// Grains are graded by equivalent circle diameter. Each entry is an
/// inclusive upper bound paired with the score assigned to diameters at or
/// below it. Bounds are strictly increasing and scores strictly decreasing.
/// The standard defines no score 3.
pub mod gost {
    /// Ordered (upper bound, score) pairs
    pub const SCORE_TABLE: [(f64, i32); 17] = [
        (0.002, 14),
        (0.004, 13),
        (0.005, 12),
        (0.007, 11),
        (0.010, 10),
        (0.015, 9),
        (0.02, 8),
        (0.03, 7),
        (0.04, 6),
        (0.06, 5),
        (0.08, 4),
        (0.12, 2),
        (0.2, 1),
        (0.3, 0),
        (0.5, -1),
        (0.7, -2),
        (1.0, -3),
    ];

    /// Finest grade in the table
    pub const FINEST_SCORE: i32 = 14;

    /// Coarsest grade in the table
    pub const COARSEST_SCORE: i32 = -3;

    /// Largest diameter that still receives a score
    pub const MAX_GRADED_DIAMETER: f64 = 1.0;
}

/// Density normalization
pub mod density {
    /// Area that measured grain counts are rescaled to (units², 1 mm² in µm²)
    pub const REFERENCE_AREA: u64 = 1_000_000;
}

/// Report metadata consumed by the table renderer
pub mod report {
    /// Report title naming the grading standard
    pub const TITLE: &str = "Table 1. Grain size analysis results according to GOST 21073";

    /// Report container type tag
    pub const REPORT_TYPE: &str = "table";

    /// Row labels in emission order
    pub const LABEL_AVERAGE_SCORE: &str = "Grain score (average)";
    pub const LABEL_AVERAGE_DIAMETER: &str = "Average grain diameter, µm";
    pub const LABEL_AVERAGE_DENSITY: &str = "Average number of grains per 1 sq. mm";
    pub const LABEL_MIN_SCORE: &str = "Grain score (minimum)";
    pub const LABEL_MEDIAN_SCORE: &str = "Grain score (median)";
    pub const LABEL_MAX_SCORE: &str = "Grain score (maximum)";

    /// Display options
    pub const TABLE_COLOR: &str = "ada";
    pub const TABLE_BORDERS: bool = true;
    pub const TABLE_FONT_SIZE: u32 = 14;
    pub const TABLE_COLUMN_WIDTH: u32 = 4261;
    pub const TABLE_FONT_FAMILY: &str = "Times New Roman";
    pub const TABLE_ALIGN: &str = "left";
}
