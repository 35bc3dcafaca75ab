//! Frame rate handling and seconds to frames conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TimingError;

/// Frame rate used when nothing else is configured.
pub const DEFAULT_FPS: u32 = 30;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 1000;

/// Largest magnitude, in seconds, of any marked time or offset.
///
/// At [`MAX_FPS`] this is `1e10` frames, so sums and differences of frame
/// counts stay far inside `i64`.
pub const MAX_SECONDS: f64 = 1.0e7;

/// A validated frame rate in frames per second, in `1..=MAX_FPS`.
///
/// Construction is the only place a frame rate is checked, so every
/// conversion that takes a `FrameRate` is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct FrameRate(u32);

impl FrameRate {
    /// Create a frame rate, rejecting zero and rates above [`MAX_FPS`].
    pub fn new(fps: u32) -> Result<Self, TimingError> {
        if fps == 0 || fps > MAX_FPS {
            return Err(TimingError::InvalidFrameRate { fps: i64::from(fps) });
        }
        Ok(Self(fps))
    }

    /// Frames per second as an integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Frames per second as a float, for conversion math.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration(self) -> f64 {
        1.0 / self.as_f64()
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(DEFAULT_FPS)
    }
}

impl TryFrom<i64> for FrameRate {
    type Error = TimingError;

    fn try_from(fps: i64) -> Result<Self, Self::Error> {
        match u32::try_from(fps) {
            Ok(valid) => Self::new(valid),
            Err(_) => Err(TimingError::InvalidFrameRate { fps }),
        }
    }
}

impl From<FrameRate> for u32 {
    fn from(fps: FrameRate) -> Self {
        fps.0
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

/// Round to the nearest integer, with exact halves going towards positive
/// infinity (`-0.5` rounds to `0`, `0.5` rounds to `1`).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Whether `seconds` is finite and within [`MAX_SECONDS`] of zero.
pub fn is_valid_seconds(seconds: f64) -> bool {
    seconds.is_finite() && seconds.abs() <= MAX_SECONDS
}

/// Convert seconds to a whole number of frames, rounding to the nearest frame.
///
/// Non-decreasing in `seconds` for a fixed frame rate. Input outside
/// [`is_valid_seconds`] is a caller error; the session never stores such
/// values.
pub fn seconds_to_frames(seconds: f64, fps: FrameRate) -> i64 {
    round_half_up(seconds * fps.as_f64()) as i64
}
