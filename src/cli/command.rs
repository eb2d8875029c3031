//! Lint run command.
//!
//! Ties the pieces together: resolve configuration, determine the file
//! set (explicit or auto-discovered), run the lint pipeline, print the
//! report, and map the outcome to a process exit code.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::cli::discovery::discover_specs;
use crate::config::resolve_config;
use crate::report::render;
use crate::runner::LintRunner;
use crate::Result;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 clean, 1 lint errors, 2 config/nothing-linted).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    fn with_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// The lint run implementation.
pub struct RunCommand {
    base_dir: PathBuf,
    args: Cli,
}

impl RunCommand {
    /// Create a command rooted at the given working directory.
    pub fn new(base_dir: &Path, args: Cli) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            args,
        }
    }

    /// Execute the run, writing report output to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        // Configuration problems are fatal before any file is touched.
        let config = match resolve_config(&self.base_dir, self.args.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(CommandResult::failure(2));
            }
        };

        if self.args.show_config {
            let rendered = serde_yaml::to_string(&config)
                .map_err(|e| anyhow::anyhow!("config serialization: {e}"))?;
            write!(out, "{rendered}")?;
            return Ok(CommandResult::success());
        }

        let (files, discovered) = if self.args.files.is_empty() {
            (discover_specs(&self.base_dir), true)
        } else {
            (self.args.files.clone(), false)
        };

        tracing::debug!(
            "Linting {} file(s) ({})",
            files.len(),
            if discovered { "discovered" } else { "explicit" }
        );

        let runner = LintRunner::from_config(config);
        let outcome = runner.run(&files, discovered);

        if self.args.verbose {
            for (path, result) in &outcome.results {
                let dump = serde_json::to_string_pretty(result)
                    .map_err(|e| anyhow::anyhow!("result serialization: {e}"))?;
                writeln!(out, "{}: {dump}", path.display())?;
            }
        }

        let report = render(&outcome.results);
        if !report.is_empty() {
            write!(out, "{report}")?;
        }

        if outcome.results.is_empty() {
            eprintln!("No API description files were linted");
        }

        Ok(CommandResult::with_code(outcome.exit_code()))
    }
}
