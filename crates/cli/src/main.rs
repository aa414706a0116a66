//! `gridalign` binary.
//!
//! Computes rectangle and text placements from the command line, for scripting and for checking
//! layout arithmetic by hand.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let rendered = run(&cli.command)?;
	println!("{rendered}");
	Ok(())
}

/// Executes one subcommand and renders its result.
fn run(command: &Command) -> anyhow::Result<String> {
	match command {
		Command::Rect {
			bounds,
			area,
			align,
			format,
		} => {
			debug!(%bounds, %area, horizontal = %align.horizontal, vertical = %align.vertical, "aligning rectangle");
			let aligned = gridalign::rectangle(*bounds, *area, align.horizontal, align.vertical)
				.with_context(|| format!("failed to align area {area} in {bounds}"))?;
			output::rect(aligned, *format)
		}
		Command::Text {
			bounds,
			text,
			align,
			format,
		} => {
			debug!(%bounds, text = %text, horizontal = %align.horizontal, vertical = %align.vertical, "aligning text");
			let start = gridalign::text(*bounds, text, align.horizontal, align.vertical)
				.with_context(|| format!("failed to align text in {bounds}"))?;
			output::position(start, *format)
		}
	}
}
