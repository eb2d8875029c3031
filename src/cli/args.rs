//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros on the [`Cli`]
//! struct. There are no subcommands; linting is the only operation.

use clap::Parser;
use std::path::PathBuf;

/// oaslint - Lint OpenAPI and Swagger API descriptions.
#[derive(Debug, Parser)]
#[command(name = "oaslint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Specification files to lint. With no files, *.yaml/*.yml/*.json
    /// under the current directory are auto-discovered.
    pub files: Vec<PathBuf>,

    /// Also dump each file's raw merged result object as JSON
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file (overrides .oaslintrc discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the merged effective configuration as YAML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
