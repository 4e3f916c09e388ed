use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Subcommand already registered: {0}")]
    DuplicateCommand(&'static str),

    #[error("Unknown subcommand: {0}")]
    UnknownCommand(String),
}
