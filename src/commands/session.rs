//! Session file subcommands: new, show, add, delete, select, seek, fps

use std::path::Path;

use anyhow::{anyhow, bail, Result};

use loadmark::render::{render_summary, render_timing_list, render_warnings};
use loadmark::session::{record_to_json, Edge, ItemId, LoadId};
use loadmark::theme::current_theme;
use loadmark::timing::FrameRate;
use loadmark::video::resolve_video_id;
use loadmark::{Config, Session};

use super::{item_label, open_session, save_session};

/// Create a new session file.
///
/// Supplying a video opens load #1 right away, ready to be marked.
pub fn handle_new(path: &Path, fps: Option<u32>, video: Option<&str>, force: bool) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let fps = match fps {
        Some(fps) => FrameRate::new(fps)?,
        None => config.frame_rate()?,
    };
    let mut session = Session::new(fps);
    if let Some(input) = video {
        let id = resolve_video_id(input).ok_or_else(|| anyhow!("No video id in {}", input))?;
        session.set_video_id(Some(id));
        session.add_load();
    }

    save_session(&session, path, &config)?;
    println!(
        "{}",
        theme.success_text(&format!("Created {} at {}", path.display(), fps))
    );
    Ok(())
}

/// Print the timing list, summary and warnings.
pub fn handle_show(path: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(path, &config)?;

    if json {
        println!("{}", record_to_json(&session.to_record(), true)?);
        return Ok(());
    }

    let theme = current_theme();
    let report = session.validate();
    if let Some(video_id) = session.video_id() {
        println!("{}", theme.secondary_text(&format!("Video {}", video_id)));
    }
    print!("{}", render_timing_list(&session, &report, &theme));
    println!();
    print!("{}", render_summary(&session, &theme));
    let warnings = render_warnings(&report, &theme);
    if !warnings.is_empty() {
        println!();
        print!("{}", warnings);
    }
    Ok(())
}

pub fn handle_add(path: &Path) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(path, &config)?;
    let id = session.add_load();
    save_session(&session, path, &config)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Added {} (id {})",
            item_label(&session, ItemId::Load(id)),
            id
        ))
    );
    Ok(())
}

pub fn handle_delete(path: &Path, id: u64) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(path, &config)?;
    let label = item_label(&session, ItemId::Load(LoadId(id)));
    session.delete_load(LoadId(id))?;
    save_session(&session, path, &config)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!("Deleted {} (id {})", label, id))
    );
    Ok(())
}

pub fn handle_select(path: &Path, item: ItemId) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(path, &config)?;
    session.select(item)?;
    save_session(&session, path, &config)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!("Selected {}", item_label(&session, item)))
    );
    Ok(())
}

/// Print the seconds a player should seek to, with three decimals.
pub fn handle_seek(path: &Path, item: ItemId, edge: Edge) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(path, &config)?;
    match session.seek_target(item, edge)? {
        Some(time) => {
            println!("{:.3}", time);
            Ok(())
        }
        None => bail!("{} has no {} marked", item_label(&session, item), edge),
    }
}

pub fn handle_fps(path: &Path, fps: u32) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(path, &config)?;
    session.set_fps(fps)?;
    save_session(&session, path, &config)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!("Frame rate set to {}", session.fps()))
    );
    Ok(())
}
