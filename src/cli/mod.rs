//! Command-line interface.

pub mod args;
pub mod command;
pub mod discovery;

pub use args::Cli;
pub use command::{CommandResult, RunCommand};
pub use discovery::discover_specs;
