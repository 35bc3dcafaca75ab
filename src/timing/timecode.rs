//! Timecode rendering.

use std::fmt;

use serde::Serialize;

use super::frames::{round_half_up, FrameRate};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// A frame count together with its human-readable renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timecode {
    /// The frame count the strings were rendered from
    pub frames: i64,
    /// Zero-padded `HH:MM:SS.mmm`
    pub formatted: String,
    /// `formatted` with leading all-zero hour and minute segments dropped
    pub smart: String,
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Render a frame count as `HH:MM:SS.mmm` plus its smart-trimmed form.
///
/// Milliseconds are rounded from the exact frame time. A negative frame
/// count (an LRT that came out below zero) renders with a leading `-` in
/// front of the magnitude.
pub fn frames_to_timecode(frames: i64, fps: FrameRate) -> Timecode {
    let magnitude = frames.unsigned_abs() as f64;
    let total_ms = round_half_up(magnitude / fps.as_f64() * 1000.0) as i64;

    let hours = total_ms / MS_PER_HOUR;
    let minutes = (total_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (total_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = total_ms % MS_PER_SECOND;

    let unsigned = format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis);
    let smart = format_smart_time(&unsigned);
    let sign = if frames < 0 { "-" } else { "" };

    Timecode {
        frames,
        formatted: format!("{}{}", sign, unsigned),
        smart: format!("{}{}", sign, smart),
    }
}

/// Strip a leading `00:` hour segment and, after it, a leading `00:` minute
/// segment.
///
/// Only whole segments are dropped; zeros inside a kept segment stay.
///
/// - `00:00:05.200` becomes `05.200`
/// - `00:01:05.200` becomes `01:05.200`
/// - `01:00:05.200` is unchanged
pub fn format_smart_time(time: &str) -> String {
    let mut rest = time;
    if let Some(stripped) = rest.strip_prefix("00:") {
        rest = stripped;
        if let Some(stripped) = rest.strip_prefix("00:") {
            rest = stripped;
        }
    }
    rest.to_string()
}
