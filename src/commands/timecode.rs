//! Standalone conversions: timecode and video-id

use anyhow::{bail, Result};

use loadmark::timing::{
    frames_to_timecode, is_valid_seconds, seconds_to_frames, FrameRate, MAX_SECONDS,
};
use loadmark::video::extract_video_id;
use loadmark::Config;

pub fn handle_timecode(seconds: f64, fps: Option<u32>) -> Result<()> {
    if !is_valid_seconds(seconds) {
        bail!(
            "Seconds must be a finite number between -{max} and {max} (got {})",
            seconds,
            max = MAX_SECONDS
        );
    }
    let fps = match fps {
        Some(fps) => FrameRate::new(fps)?,
        None => Config::load()?.frame_rate()?,
    };
    let timecode = frames_to_timecode(seconds_to_frames(seconds, fps), fps);
    println!("frames    {}", timecode.frames);
    println!("timecode  {}", timecode.formatted);
    println!("smart     {}", timecode.smart);
    Ok(())
}

pub fn handle_video_id(url: &str) -> Result<()> {
    match extract_video_id(url) {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => bail!("No video id in {}", url),
    }
}
