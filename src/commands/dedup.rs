use std::io;

use anyhow::{Context as _, Result};
use clap::{Arg, ArgMatches};
use tracing::info;

use crate::commands::{CommandDescriptor, Platform, Subcommand};
use crate::console::{Color, Writer};
use crate::dedup::{deduplicate, Deduplication};

pub struct DedupCommand;

impl Subcommand for DedupCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor {
            name: "dedup",
            description: "Deduplicate lines of multi-line text",
            platforms: Platform::ALL,
        }
    }

    fn configure(&self, command: clap::Command) -> clap::Command {
        command.arg(
            Arg::new("value")
                .required(true)
                .allow_hyphen_values(true)
                .help("Text to deduplicate, line by line (put `--` before text that looks like a flag)"),
        )
    }

    fn handle(&self, matches: &ArgMatches, writer: &mut dyn Writer) -> Result<()> {
        let value = matches
            .get_one::<String>("value")
            .context("Missing required argument: value")?;
        let result = deduplicate(value);
        info!(
            original = result.original_count,
            unique = result.unique_count(),
            "dedup finished"
        );
        report(&result, writer).context("Failed to write dedup output")
    }
}

fn report(result: &Deduplication<'_>, writer: &mut dyn Writer) -> io::Result<()> {
    writer.write(
        &format!(
            "\nRow count changed after deduplication:\n  {} -> {}",
            result.original_count,
            result.unique_count()
        ),
        Some(Color::Red),
    )?;
    writer.write(">>>", Some(Color::Red))?;
    for line in &result.unique_lines {
        writer.write(line, None)?;
    }
    writer.write("<<<", Some(Color::Red))
}
