//! Timing list rendering.

use crate::session::{ItemId, Session, TimingItem};
use crate::theme::Theme;
use crate::timing::{frames_to_timecode, seconds_to_frames, FrameRate};
use crate::validation::{ValidationReport, ValidationStatus, WarningKind};

/// Placeholder for an unmarked time.
const UNSET: &str = "--";

/// Smart timecode of a marked time, or `--`.
pub fn format_time(time: Option<f64>, fps: FrameRate) -> String {
    match time {
        Some(seconds) => frames_to_timecode(seconds_to_frames(seconds, fps), fps).smart,
        None => UNSET.to_string(),
    }
}

fn format_duration(item: &TimingItem, fps: FrameRate) -> String {
    format_time(item.duration(), fps)
}

/// Badges in display order: outside run, overlap, invalid duration.
fn badges(status: ValidationStatus) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if status.is_outside_run {
        badges.push(WarningKind::OutsideRun.badge());
    }
    if status.is_overlapping {
        badges.push(WarningKind::Overlap.badge());
    }
    if status.is_invalid_duration {
        badges.push(WarningKind::InvalidDuration.badge());
    }
    badges
}

/// Render every row of the timing list, one per line.
///
/// The selected row is prefixed with `>`. Load rows show their stable id
/// next to the positional label so they can be addressed from the CLI.
pub fn render_timing_list(session: &Session, report: &ValidationReport, theme: &Theme) -> String {
    let fps = session.fps();
    let selected = session.selected_index();
    let mut out = String::new();

    for (index, item) in session.timing_items().iter().enumerate() {
        let marker = if index == selected { ">" } else { " " };
        let id = match item.id {
            ItemId::Run => "run".to_string(),
            ItemId::Load(id) => format!("id {}", id),
        };
        let status = report.item_status(item);

        let row = format!(
            "{} {:<9} {:>8}  start {:>12}  end {:>12}  duration {:>12}",
            marker,
            item.label,
            id,
            format_time(item.start_time, fps),
            format_time(item.end_time, fps),
            format_duration(item, fps),
        );
        let row = if status.has_error {
            theme.error_text(&row)
        } else if item.id == ItemId::Run {
            theme.accent_text(&row)
        } else {
            theme.primary_text(&row)
        };
        out.push_str(&row);

        let badges = badges(status);
        if !badges.is_empty() {
            out.push_str("  ");
            out.push_str(&theme.error_text(&badges.join(" ")));
        }
        out.push('\n');
    }

    for (edge, marker) in [("start", session.run_start()), ("end", session.run_end())] {
        if marker.offset != 0.0 {
            out.push_str(&theme.secondary_text(&format!(
                "  run {} offset {:+.3}s\n",
                edge, marker.offset
            )));
        }
    }

    out
}
