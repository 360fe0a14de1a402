//! CLI argument parsing for the Prestige inspector.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "prestige")]
#[command(about = "Inspect structured content in Prestige model responses")]
#[command(version)]
pub struct Cli {
    /// Response buffer to parse (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Treat the buffer as still streaming: open tags become pending instead of aborted
    #[arg(long)]
    pub streaming: bool,

    /// Emit pieces as JSON lines instead of a text summary
    #[arg(long)]
    pub json: bool,

    /// Run the legacy thinking extractor instead of the full parser
    #[arg(long)]
    pub thinking_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
