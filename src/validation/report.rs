//! Whole-collection validation and the warning list.

use std::collections::BTreeSet;

use serde::Serialize;

use super::status::{item_validation_status, overlaps, validate_load, ValidationStatus};
use crate::session::{load_label, Load, LoadId, TimingItem};

/// Category of a global warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// The run itself has a non-positive duration
    Error,
    InvalidDuration,
    OutsideRun,
    Overlap,
}

impl WarningKind {
    /// Short badge text for list rendering.
    pub fn badge(&self) -> &'static str {
        match self {
            WarningKind::Error => "ERROR",
            WarningKind::InvalidDuration => "INVALID",
            WarningKind::OutsideRun => "OUTSIDE RUN",
            WarningKind::Overlap => "OVERLAP",
        }
    }
}

/// One entry of the flat warning list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
    /// Ids of the loads the warning is about (empty for run errors)
    pub affected_loads: Vec<LoadId>,
}

/// Result of validating every load of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Per-load status, indexed by load position
    pub statuses: Vec<ValidationStatus>,
    pub overlapping_indices: BTreeSet<usize>,
    pub invalid_duration_indices: BTreeSet<usize>,
    pub outside_run_indices: BTreeSet<usize>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// No warnings at all, including for the run.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Status of the load at `index`; clear when out of range.
    pub fn status(&self, index: usize) -> ValidationStatus {
        self.statuses
            .get(index)
            .copied()
            .unwrap_or(ValidationStatus::CLEAR)
    }

    /// Status badge for a row of the timing list.
    pub fn item_status(&self, item: &TimingItem) -> ValidationStatus {
        item_validation_status(
            item,
            &self.overlapping_indices,
            &self.invalid_duration_indices,
            &self.outside_run_indices,
        )
    }

    /// Whether any warning has the given kind.
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// Validate every load against its siblings and the adjusted run bounds.
///
/// Warnings are ordered: run error, invalid durations, outside run, then
/// one overlap warning per overlapping pair in discovery order (lower
/// position first). A pair is reported once.
pub fn validate_loads(
    loads: &[Load],
    run_start: Option<f64>,
    run_end: Option<f64>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, load) in loads.iter().enumerate() {
        let status = validate_load(
            load.start_time,
            load.end_time,
            loads,
            index,
            run_start,
            run_end,
        );
        if status.is_overlapping {
            report.overlapping_indices.insert(index);
        }
        if status.is_invalid_duration {
            report.invalid_duration_indices.insert(index);
        }
        if status.is_outside_run {
            report.outside_run_indices.insert(index);
        }
        report.statuses.push(status);
    }

    if let (Some(start), Some(end)) = (run_start, run_end) {
        if end <= start {
            report.warnings.push(ValidationWarning {
                kind: WarningKind::Error,
                message: "Run end must be after run start".to_string(),
                affected_loads: Vec::new(),
            });
        }
    }

    if !report.invalid_duration_indices.is_empty() {
        let indices: Vec<usize> = report.invalid_duration_indices.iter().copied().collect();
        report.warnings.push(ValidationWarning {
            kind: WarningKind::InvalidDuration,
            message: format!(
                "{} must end after {} start{}",
                describe(&indices),
                if indices.len() == 1 { "its" } else { "their" },
                if indices.len() == 1 { "" } else { "s" },
            ),
            affected_loads: ids(loads, &indices),
        });
    }

    if !report.outside_run_indices.is_empty() {
        let indices: Vec<usize> = report.outside_run_indices.iter().copied().collect();
        report.warnings.push(ValidationWarning {
            kind: WarningKind::OutsideRun,
            message: format!(
                "{} {} outside the run timeframe",
                describe(&indices),
                if indices.len() == 1 { "is" } else { "are" },
            ),
            affected_loads: ids(loads, &indices),
        });
    }

    for (first, second) in overlapping_pairs(loads) {
        report.warnings.push(ValidationWarning {
            kind: WarningKind::Overlap,
            message: format!(
                "{} and {} have overlapping timeframes",
                load_label(first),
                load_label(second)
            ),
            affected_loads: vec![loads[first].id, loads[second].id],
        });
    }

    report
}

/// Every unordered pair of complete, intersecting loads, lower index first.
fn overlapping_pairs(loads: &[Load]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in loads.iter().enumerate() {
        let Some(a) = a.bounds() else { continue };
        for (j, b) in loads.iter().enumerate().skip(i + 1) {
            if let Some(b) = b.bounds() {
                if overlaps(a, b) {
                    pairs.push((i, j));
                }
            }
        }
    }
    pairs
}

fn ids(loads: &[Load], indices: &[usize]) -> Vec<LoadId> {
    indices.iter().map(|&i| loads[i].id).collect()
}

/// `Load #2` or `Loads #1, #3`.
fn describe(indices: &[usize]) -> String {
    match indices {
        [single] => load_label(*single),
        _ => {
            let numbers: Vec<String> = indices.iter().map(|i| format!("#{}", i + 1)).collect();
            format!("Loads {}", numbers.join(", "))
        }
    }
}
