//! Subcommand handlers
//!
//! Every handler loads the session file, applies one operation and writes
//! the file back. Output goes to stdout through the current theme.

pub mod completions;
pub mod config;
pub mod export;
pub mod mark;
pub mod session;
pub mod timecode;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use loadmark::session::{load_label, ItemId};
use loadmark::{Config, Session};

/// Read a session file and apply the user's timing preferences to it.
pub fn open_session(path: &Path, config: &Config) -> Result<Session> {
    let mut session = Session::load_file(path)
        .with_context(|| format!("Failed to open session: {}", path.display()))?;
    session.set_auto_advance(config.timing.auto_advance);
    Ok(session)
}

/// Write a session file using the configured JSON style.
pub fn save_session(session: &Session, path: &Path, config: &Config) -> Result<()> {
    session
        .save_file(path, config.export.pretty)
        .with_context(|| format!("Failed to save session: {}", path.display()))
}

/// Human label of a timing item: `Run` or its positional `Load #n`.
pub fn item_label(session: &Session, item: ItemId) -> String {
    match item {
        ItemId::Run => "Run".to_string(),
        ItemId::Load(id) => session
            .position(id)
            .map(load_label)
            .unwrap_or_else(|| format!("load id {}", id)),
    }
}
