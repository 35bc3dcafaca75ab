//! Warning list rendering.

use crate::theme::Theme;
use crate::validation::{ValidationReport, WarningKind};

/// Render the global warnings, one per line. Empty when the session is clean.
pub fn render_warnings(report: &ValidationReport, theme: &Theme) -> String {
    let mut out = String::new();
    for warning in &report.warnings {
        let line = format!("! [{}] {}", warning.kind.badge(), warning.message);
        let line = match warning.kind {
            WarningKind::Error | WarningKind::Overlap => theme.error_text(&line),
            WarningKind::InvalidDuration | WarningKind::OutsideRun => theme.warning_text(&line),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
