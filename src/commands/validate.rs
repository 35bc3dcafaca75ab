//! Validate subcommand

use std::path::Path;

use anyhow::{bail, Result};

use loadmark::render::render_warnings;
use loadmark::theme::current_theme;
use loadmark::Config;

use super::open_session;

/// Print every warning. With `strict`, any warning is a failure.
pub fn handle(path: &Path, strict: bool) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(path, &config)?;
    let report = session.validate();
    let theme = current_theme();

    if report.is_clean() {
        println!("{}", theme.success_text("No warnings"));
        return Ok(());
    }

    print!("{}", render_warnings(&report, &theme));
    if strict {
        bail!("{} warning(s) in {}", report.warnings.len(), path.display());
    }
    Ok(())
}
