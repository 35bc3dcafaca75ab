//! Export and import subcommands

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use loadmark::session::{record_to_json, write_record, PartialRecord};
use loadmark::theme::current_theme;
use loadmark::{Config, Session};

use super::{open_session, save_session};

/// Write the export record to `output`, or to stdout.
pub fn handle_export(path: &Path, output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(path, &config)?;
    let record = session.export_record(Utc::now())?;

    match output {
        Some(output) => {
            write_record(&record, output, config.export.pretty)?;
            let theme = current_theme();
            println!(
                "{}",
                theme.success_text(&format!("Exported to {}", output.display()))
            );
        }
        None => println!("{}", record_to_json(&record, config.export.pretty)?),
    }
    Ok(())
}

/// Apply a record to a session file, creating the file if it is missing.
pub fn handle_import(path: &Path, record_path: &Path) -> Result<()> {
    let config = Config::load()?;
    let record = PartialRecord::read(record_path)
        .with_context(|| format!("Failed to import {}", record_path.display()))?;

    let mut session = if path.exists() {
        open_session(path, &config)?
    } else {
        Session::new(config.frame_rate()?)
    };
    session
        .apply_partial(record)
        .with_context(|| format!("Rejected record {}", record_path.display()))?;
    save_session(&session, path, &config)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.success_text(&format!(
            "Imported {} into {} ({} loads)",
            record_path.display(),
            path.display(),
            session.loads().len()
        ))
    );
    Ok(())
}
