//! Loadmark binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loadmark::cli::{Cli, Commands, ConfigCommands};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("loadmark=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("loadmark=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::New {
            file,
            fps,
            video,
            force,
        } => commands::session::handle_new(&file, fps, video.as_deref(), force),
        Commands::Show { file, json } => commands::session::handle_show(&file, json),
        Commands::Validate { file, strict } => commands::validate::handle(&file, strict),
        Commands::Mark {
            file,
            edge,
            time,
            item,
        } => commands::mark::handle_mark(&file, edge, time, item),
        Commands::Offset {
            file,
            edge,
            seconds,
        } => commands::mark::handle_offset(&file, edge, seconds),
        Commands::Add { file } => commands::session::handle_add(&file),
        Commands::Delete { file, id } => commands::session::handle_delete(&file, id),
        Commands::Select { file, item } => commands::session::handle_select(&file, item),
        Commands::Seek { file, item, edge } => commands::session::handle_seek(&file, item, edge),
        Commands::Fps { file, fps } => commands::session::handle_fps(&file, fps),
        Commands::Export { file, output } => commands::export::handle_export(&file, output.as_deref()),
        Commands::Import { file, record } => commands::export::handle_import(&file, &record),
        Commands::Timecode { seconds, fps } => commands::timecode::handle_timecode(seconds, fps),
        Commands::VideoId { url } => commands::timecode::handle_video_id(&url),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
