//! oaslint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use oaslint::cli::{Cli, RunCommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("oaslint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oaslint=info"))
    };

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("oaslint starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let base_dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let command = RunCommand::new(&base_dir, cli);

    let mut stdout = std::io::stdout();
    match command.execute(&mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
