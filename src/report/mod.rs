//! Report assembly module
//!
//! This module packages grain statistics into the tabular report
//! container consumed by the document renderer.

pub mod assembler;

pub use assembler::{DisplayOptions, GrainReport, ReportAssembler, ReportRow, RowLabels};
