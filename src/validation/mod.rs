//! Consistency checks for marked load intervals.
//!
//! Validation works on raw seconds, never on frame counts, so that rounding
//! cannot turn two back-to-back loads into an overlap or hide a real one.
//! Every check is advisory: results are recomputed from the current
//! intervals on demand and never block further edits.
//!
//! # Module Structure
//!
//! - [`status`] - per-load classification (`validate_load`)
//! - [`report`] - whole-collection pass producing index sets and warnings

mod report;
mod status;

pub use report::{validate_loads, ValidationReport, ValidationWarning, WarningKind};
pub use status::{item_validation_status, overlaps, validate_load, ValidationStatus};
