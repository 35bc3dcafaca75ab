//! Load intervals and run markers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timing::{seconds_to_frames, FrameRate};

/// Stable identity of a load.
///
/// Allocated by the session in creation order and never reused, so it
/// survives deletion of other loads and reordering of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(pub u64);

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which end of an interval an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Start,
    End,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => f.write_str("start"),
            Edge::End => f.write_str("end"),
        }
    }
}

/// A marked loading screen. `None` means that edge has not been marked yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: LoadId,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
}

impl Load {
    /// A fresh load with neither edge marked.
    pub fn new(id: LoadId) -> Self {
        Self {
            id,
            start_time: None,
            end_time: None,
        }
    }

    /// Both edges are marked.
    pub fn is_complete(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// The marked `(start, end)` pair, if complete.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.start_time?, self.end_time?))
    }

    pub fn edge(&self, edge: Edge) -> Option<f64> {
        match edge {
            Edge::Start => self.start_time,
            Edge::End => self.end_time,
        }
    }

    /// Copy of this load with one edge overwritten.
    pub(crate) fn with_edge(&self, edge: Edge, time: f64) -> Self {
        let mut load = self.clone();
        match edge {
            Edge::Start => load.start_time = Some(time),
            Edge::End => load.end_time = Some(time),
        }
        load
    }

    /// Frames spent in this load, when complete.
    ///
    /// Each edge is rounded to a frame on its own before subtracting, so
    /// the sum over loads matches what a frame-stepping verifier counts.
    pub fn frames(&self, fps: FrameRate) -> Option<i64> {
        let (start, end) = self.bounds()?;
        Some(seconds_to_frames(end, fps) - seconds_to_frames(start, fps))
    }
}

/// Start or end of the timed run, with a manual correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMarker {
    /// Raw marked time in seconds
    pub time: Option<f64>,
    /// Correction in seconds added on top of `time`
    #[serde(default)]
    pub offset: f64,
}

impl Default for RunMarker {
    fn default() -> Self {
        Self {
            time: None,
            offset: 0.0,
        }
    }
}

impl RunMarker {
    /// `time + offset`, or `None` while unmarked.
    pub fn adjusted_time(&self) -> Option<f64> {
        self.time.map(|time| time + self.offset)
    }

    /// Frame count of the adjusted marker.
    ///
    /// The time and the offset are rounded to frames independently and then
    /// added, so an offset always moves the marker by a whole number of
    /// frames regardless of where inside a frame the raw mark fell.
    pub fn adjusted_frames(&self, fps: FrameRate) -> Option<i64> {
        self.time
            .map(|time| seconds_to_frames(time, fps) + seconds_to_frames(self.offset, fps))
    }
}
