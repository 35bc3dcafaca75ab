//! Per-load validation status.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::session::{ItemKind, Load, TimingItem};

/// Classification of a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStatus {
    pub is_overlapping: bool,
    pub is_invalid_duration: bool,
    pub is_outside_run: bool,
    /// Any of the three flags above
    pub has_error: bool,
}

impl ValidationStatus {
    /// Status with every flag cleared.
    pub const CLEAR: Self = Self {
        is_overlapping: false,
        is_invalid_duration: false,
        is_outside_run: false,
        has_error: false,
    };

    pub fn new(is_overlapping: bool, is_invalid_duration: bool, is_outside_run: bool) -> Self {
        Self {
            is_overlapping,
            is_invalid_duration,
            is_outside_run,
            has_error: is_overlapping || is_invalid_duration || is_outside_run,
        }
    }
}

/// Half-open overlap test for `[a_start, a_end)` and `[b_start, b_end)`.
///
/// Touching intervals (`a_end == b_start`) do not overlap, which keeps
/// back-to-back loads legal. Symmetric in its two arguments.
pub fn overlaps(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 < b.1 && a.1 > b.0
}

/// Classify the load `[start, end]` at position `self_index` against its
/// siblings and the adjusted run boundaries.
///
/// A load missing either edge is pending and never in error. Containment in
/// the run is only checked once both run boundaries are known.
pub fn validate_load(
    start: Option<f64>,
    end: Option<f64>,
    all_loads: &[Load],
    self_index: usize,
    run_start: Option<f64>,
    run_end: Option<f64>,
) -> ValidationStatus {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return ValidationStatus::CLEAR,
    };

    let is_invalid_duration = end <= start;

    let is_outside_run = match (run_start, run_end) {
        (Some(run_start), Some(run_end)) => start < run_start || end > run_end,
        _ => false,
    };

    let is_overlapping = all_loads
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != self_index)
        .filter_map(|(_, other)| other.bounds())
        .any(|other| overlaps((start, end), other));

    ValidationStatus::new(is_overlapping, is_invalid_duration, is_outside_run)
}

/// Status badge for a row of the timing list.
///
/// The run row is always clear: an inverted run is reported only through
/// the global warning list.
pub fn item_validation_status(
    item: &TimingItem,
    overlapping: &BTreeSet<usize>,
    invalid_duration: &BTreeSet<usize>,
    outside_run: &BTreeSet<usize>,
) -> ValidationStatus {
    let index = match (item.kind, item.load_index) {
        (ItemKind::Load, Some(index)) => index,
        _ => return ValidationStatus::CLEAR,
    };

    ValidationStatus::new(
        overlapping.contains(&index),
        invalid_duration.contains(&index),
        outside_run.contains(&index),
    )
}
