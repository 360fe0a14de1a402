//! Prestige CLI - inspect how a model response buffer parses into content
//! pieces.
//!
//! Reads an accumulated response buffer (file or stdin), runs it through the
//! structured-content parser exactly as the app's renderer would, and prints
//! the resulting piece sequence. Useful for replaying captured generations
//! and checking how a truncated buffer behaves mid-stream (`--streaming`).

mod cli_args;
mod display;
mod utils;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use prestige_parser::{extract_thinking, parse_response};

pub use cli_args::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    utils::initialize_logging(cli.verbose);

    let buffer = utils::read_input(cli.input.as_deref())?;
    debug!("Read {} byte(s) of input", buffer.len());

    if cli.thinking_only {
        let extracted = extract_thinking(&buffer);
        display::print_thinking(&extracted);
        return Ok(());
    }

    let pieces = parse_response(&buffer, cli.streaming);
    debug!("Parsed {} piece(s)", pieces.len());

    if cli.json {
        display::print_json(&pieces)?;
    } else {
        display::print_pieces(&pieces);
    }
    Ok(())
}
