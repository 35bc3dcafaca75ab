//! Loadmark - load removal timing for speedrun videos
//!
//! Mark the start and end of a run and of every load screen in a video,
//! then read off the real time (RTA) and load-removed time (LRT) at the
//! video's frame rate.
//!
//! - [`timing`]: seconds to frames and frames to timecodes
//! - [`validation`]: overlap, duration and run-boundary checks on loads
//! - [`session`]: the marked timestamps and everything derived from them
//! - [`render`]: terminal output for the timing list, summary and warnings

pub mod cli;
pub mod config;
pub mod render;
pub mod session;
pub mod theme;
pub mod timing;
pub mod validation;
pub mod video;

pub use config::Config;
pub use session::Session;
