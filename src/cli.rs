//! CLI definitions
//!
//! Lives in the library so `xtask` can generate man pages from the same
//! definitions the binary parses.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::session::{Edge, ItemId};

/// Mark load screens in a speedrun video and compute load-removed time.
#[derive(Parser, Debug)]
#[command(name = "loadmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new session file
    New {
        /// Session file to create
        file: PathBuf,
        /// Frame rate of the video (defaults to the configured fps)
        #[arg(long)]
        fps: Option<u32>,
        /// YouTube URL or video id the session belongs to
        #[arg(long)]
        video: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the timing list, summary and warnings
    Show {
        /// Session file
        file: PathBuf,
        /// Print the session record as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Check loads for overlaps, invalid durations and loads outside the run
    Validate {
        /// Session file
        file: PathBuf,
        /// Exit with status 1 when there are warnings
        #[arg(long)]
        strict: bool,
    },

    /// Mark the start or end of the run or of a load
    Mark {
        /// Session file
        file: PathBuf,
        /// Which edge to mark
        #[arg(long, value_enum)]
        edge: Edge,
        /// Video time in seconds
        #[arg(long, allow_negative_numbers = true)]
        time: f64,
        /// `load` (current load, the default), `selected`, `run`, or a load id
        #[arg(long, default_value = "load")]
        item: Target,
    },

    /// Set the correction offset of a run marker
    Offset {
        /// Session file
        file: PathBuf,
        /// Which run marker
        #[arg(long, value_enum)]
        edge: Edge,
        /// Offset in seconds (may be negative)
        #[arg(long, allow_negative_numbers = true)]
        seconds: f64,
    },

    /// Append a new empty load and select it
    Add {
        /// Session file
        file: PathBuf,
    },

    /// Delete a load by id
    Delete {
        /// Session file
        file: PathBuf,
        /// Load id (shown as `id N` by `show`)
        id: u64,
    },

    /// Select the run or a load
    Select {
        /// Session file
        file: PathBuf,
        /// `run` or a load id
        item: ItemId,
    },

    /// Print the time to seek the player to for an item's edge
    Seek {
        /// Session file
        file: PathBuf,
        /// `run` or a load id
        item: ItemId,
        /// Which edge to seek to
        #[arg(long, value_enum, default_value = "start")]
        edge: Edge,
    },

    /// Change the frame rate of a session
    Fps {
        /// Session file
        file: PathBuf,
        /// Frames per second
        fps: u32,
    },

    /// Export the session with its summary and a timestamp
    Export {
        /// Session file
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a (possibly partial) exported record to a session
    Import {
        /// Session file to update (created if missing)
        file: PathBuf,
        /// Record to import
        record: PathBuf,
    },

    /// Convert seconds to frames and a timecode
    Timecode {
        /// Time in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        /// Frame rate (defaults to the configured fps)
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Extract the video id from a YouTube URL
    VideoId {
        /// YouTube URL
        url: String,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Open configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

/// Which row a `mark` applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Whatever row is selected
    Selected,
    /// The current load, created if none exist
    CurrentLoad,
    /// A specific row
    Item(ItemId),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selected" => Ok(Target::Selected),
            "load" => Ok(Target::CurrentLoad),
            other => other.parse::<ItemId>().map(Target::Item),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selected => f.write_str("selected"),
            Target::CurrentLoad => f.write_str("load"),
            Target::Item(item) => write!(f, "{}", item),
        }
    }
}
