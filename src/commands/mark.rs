//! Mark and offset subcommands

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use loadmark::cli::Target;
use loadmark::session::{Edge, ItemId};
use loadmark::theme::current_theme;
use loadmark::Config;

use super::{item_label, open_session, save_session};

/// Mark an edge, then open the next load if the session calls for it.
///
/// Auto advance only fires when the mark completed a load. Re-marking an
/// already complete load adjusts it without opening another.
pub fn handle_mark(path: &Path, edge: Edge, time: f64, target: Target) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(path, &config)?;

    let (item, was_complete) = match target {
        Target::CurrentLoad => {
            let was_complete = session
                .current_load()
                .map_or(false, |id| session.is_item_complete(ItemId::Load(id)));
            let id = session.mark_current_load(edge, time)?;
            (ItemId::Load(id), was_complete)
        }
        Target::Selected => {
            let item = session.selected_item();
            let was_complete = session.is_item_complete(item);
            session.mark_time(item, edge, time)?;
            (item, was_complete)
        }
        Target::Item(item) => {
            let was_complete = session.is_item_complete(item);
            session.mark_time(item, edge, time)?;
            (item, was_complete)
        }
    };

    let advanced = match item {
        ItemId::Load(_) if !was_complete => session.advance(),
        _ => None,
    };
    debug!(item = %item, was_complete, advanced = advanced.is_some(), "mark applied");
    save_session(&session, path, &config)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Marked {} {} at {}",
            item_label(&session, item),
            edge,
            session.timecode(time).smart
        ))
    );
    if let Some(id) = advanced {
        println!(
            "{}",
            theme.accent_text(&format!(
                "Started {} (id {})",
                item_label(&session, ItemId::Load(id)),
                id
            ))
        );
    }
    Ok(())
}

/// Set a run marker's offset and show the adjusted time.
pub fn handle_offset(path: &Path, edge: Edge, seconds: f64) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(path, &config)?;
    session.set_run_offset(edge, seconds)?;
    save_session(&session, path, &config)?;

    let theme = current_theme();
    let adjusted = match session.run_marker(edge).adjusted_time() {
        Some(time) => session.timecode(time).smart,
        None => "unmarked".to_string(),
    };
    println!(
        "{}",
        theme.primary_text(&format!(
            "Run {} offset {:+.3}s (adjusted {})",
            edge, seconds, adjusted
        ))
    );
    Ok(())
}
