pub mod commands;
pub mod console;
pub mod dedup;
pub mod error;
pub mod telemetry;

use anyhow::{Context as _, Result};
use clap::{ArgMatches, CommandFactory as _, FromArgMatches as _};

use crate::commands::Registry;
use crate::console::{color_enabled, ConsoleWriter};

pub use crate::dedup::{deduplicate, split_lines, Deduplication};

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Args {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Root command with every registered subcommand attached.
pub fn command(registry: &Registry) -> clap::Command {
    registry.augment(Args::command())
}

pub fn run(registry: &Registry, matches: &ArgMatches) -> Result<()> {
    let args = Args::from_arg_matches(matches)?;
    telemetry::init_tracing(if args.verbose { "debug" } else { "warn" });

    let (name, sub_matches) = matches.subcommand().context("No subcommand given")?;
    let mut writer = ConsoleWriter::stdout(color_enabled(args.no_color));
    registry.dispatch(name, sub_matches, &mut writer)
}
