//! RTA / LRT summary rendering.

use crate::session::Session;
use crate::theme::Theme;

/// Render the timing totals.
///
/// RTA and LRT stay `--` until both run markers are set.
pub fn render_summary(session: &Session, theme: &Theme) -> String {
    let fps = session.fps();
    let summary = session.summary();
    let mut out = String::new();

    match (summary.lrt(fps), summary.rta(fps)) {
        (Some(lrt), Some(rta)) => {
            out.push_str(&format!(
                "{}  {:>14}  ({} frames)  Load Removed Time\n",
                theme.accent_text("LRT"),
                lrt.formatted,
                lrt.frames
            ));
            out.push_str(&format!(
                "{}  {:>14}  ({} frames)  Real Time Attack\n",
                theme.accent_text("RTA"),
                rta.formatted,
                rta.frames
            ));
        }
        _ => {
            out.push_str(&theme.secondary_text(
                "LRT / RTA unavailable: mark both run start and run end\n",
            ));
        }
    }

    let loads = summary.total_load(fps);
    let complete = session.loads().iter().filter(|l| l.is_complete()).count();
    out.push_str(&format!(
        "{} {:>14}  ({} frames, {} of {} loads complete) at {}\n",
        theme.primary_text("Loads"),
        loads.formatted,
        loads.frames,
        complete,
        session.loads().len(),
        fps
    ));

    out
}
