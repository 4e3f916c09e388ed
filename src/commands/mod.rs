//! Subcommand registration and dispatch.
//!
//! Every subcommand describes itself with a [`CommandDescriptor`] and is
//! added to a [`Registry`], which wires it into the clap command tree and
//! routes parsed matches back to its handler.

mod dedup;

use std::fmt;

use anyhow::Result;
use clap::ArgMatches;
use tracing::debug;

use crate::console::Writer;
use crate::error::RegistryError;

pub use dedup::DedupCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOS,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[Platform::Windows, Platform::Linux, Platform::MacOS];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOS => "MacOS",
        };
        f.write_str(name)
    }
}

/// Platforms are advertised in help only; dispatch does not check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub platforms: &'static [Platform],
}

impl CommandDescriptor {
    /// One-line help, e.g. `Deduplicate lines (Windows/Linux/MacOS)`.
    pub fn help(&self) -> String {
        let platforms: Vec<String> = self.platforms.iter().map(|p| p.to_string()).collect();
        format!("{} ({})", self.description, platforms.join("/"))
    }
}

pub trait Subcommand {
    fn descriptor(&self) -> CommandDescriptor;

    /// Adds the subcommand's own arguments.
    fn configure(&self, command: clap::Command) -> clap::Command;

    fn handle(&self, matches: &ArgMatches, writer: &mut dyn Writer) -> Result<()>;
}

#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Subcommand>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(Box::new(DedupCommand))?;
        Ok(registry)
    }

    pub fn register(&mut self, command: Box<dyn Subcommand>) -> Result<(), RegistryError> {
        let name = command.descriptor().name;
        if self.find(name).is_some() {
            return Err(RegistryError::DuplicateCommand(name));
        }
        debug!(name, "registered subcommand");
        self.commands.push(command);
        Ok(())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.descriptor().name).collect()
    }

    /// Attaches every registered subcommand to `root`.
    pub fn augment(&self, root: clap::Command) -> clap::Command {
        self.commands.iter().fold(root, |root, command| {
            let descriptor = command.descriptor();
            let sub = clap::Command::new(descriptor.name).about(descriptor.help());
            root.subcommand(command.configure(sub))
        })
    }

    pub fn dispatch(&self, name: &str, matches: &ArgMatches, writer: &mut dyn Writer) -> Result<()> {
        let command = self
            .find(name)
            .ok_or_else(|| RegistryError::UnknownCommand(name.to_string()))?;
        debug!(name, "dispatching subcommand");
        command.handle(matches, writer)
    }

    fn find(&self, name: &str) -> Option<&dyn Subcommand> {
        self.commands
            .iter()
            .find(|c| c.descriptor().name == name)
            .map(|c| c.as_ref())
    }
}
