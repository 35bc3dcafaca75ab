//! Frame-accurate time conversion.
//!
//! The video player reports positions as floating-point seconds. Everything
//! that is shown to the user or summed up is expressed in whole frames at a
//! fixed frame rate, and rendered as `HH:MM:SS.mmm` timecodes.
//!
//! # Module Structure
//!
//! - [`frames`] - `FrameRate` and seconds to frames conversion
//! - [`timecode`] - frames to `HH:MM:SS.mmm` rendering and smart trimming

mod frames;
mod timecode;

pub use frames::{
    is_valid_seconds, round_half_up, seconds_to_frames, FrameRate, DEFAULT_FPS, MAX_FPS,
    MAX_SECONDS,
};
pub use timecode::{format_smart_time, frames_to_timecode, Timecode};

/// Errors raised for frame rates that cannot be used for conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimingError {
    #[error("Frame rate must be an integer from 1 to {max} (got {fps})", max = MAX_FPS)]
    InvalidFrameRate { fps: i64 },
}
