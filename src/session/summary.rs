//! Derived timing totals.

use serde::{Deserialize, Serialize};

use crate::timing::{frames_to_timecode, FrameRate, Timecode};

/// RTA / LRT totals of a session, in frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSummary {
    /// Frames spent in complete loads
    pub total_load_frames: i64,
    /// Adjusted run end minus adjusted run start; `None` until both are marked
    pub rta_frames: Option<i64>,
    /// `rta_frames - total_load_frames`
    pub lrt_frames: Option<i64>,
}

impl TimingSummary {
    pub fn new(total_load_frames: i64, rta_frames: Option<i64>) -> Self {
        Self {
            total_load_frames,
            rta_frames,
            lrt_frames: rta_frames.map(|rta| rta - total_load_frames),
        }
    }

    pub fn rta(&self, fps: FrameRate) -> Option<Timecode> {
        self.rta_frames.map(|frames| frames_to_timecode(frames, fps))
    }

    pub fn lrt(&self, fps: FrameRate) -> Option<Timecode> {
        self.lrt_frames.map(|frames| frames_to_timecode(frames, fps))
    }

    pub fn total_load(&self, fps: FrameRate) -> Timecode {
        frames_to_timecode(self.total_load_frames, fps)
    }
}
