//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Conference track scheduler.
///
/// Reads one talk per line and packs the talks into tracks with a morning
/// session, lunch, an afternoon session, and a networking event.
#[derive(Debug, Parser)]
#[command(name = "confsched", version, about, long_about = None)]
pub struct Cli {
    /// Talks file, one talk per line (e.g. "Lua for the Masses 30min").
    pub input: PathBuf,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the schedule as JSON.
    #[arg(long)]
    pub json: bool,
}
