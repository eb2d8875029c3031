//! Lint run orchestration.
//!
//! A [`LintRunner`] owns the merged configuration and the two engine
//! adapters, lints one file at a time through the
//! load → build → check → merge pipeline, and processes many files on a
//! bounded worker pool. Per-file failures are isolated: a file that cannot
//! be parsed, has no descriptor, or whose engine invocation fails is
//! logged and excluded from the aggregate without aborting other files.

use crate::config::LintConfig;
use crate::document;
use crate::engine::{
    ProcessRuleEngine, ProcessValidator, RuleEngine, RuleEngineAdapter, SpecBuilderAdapter,
    SpecValidator,
};
use crate::error::{LintError, Result};
use crate::report::{merge_results, FileResult, RunTotals};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fixed cap on concurrently processed files; bounds simultaneous file
/// handles and engine subprocesses.
const MAX_CONCURRENT_FILES: usize = 8;

/// Outcome of a whole run: per-file results in input order.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub results: Vec<(PathBuf, FileResult)>,
}

impl RunOutcome {
    /// Run-wide totals per severity.
    pub fn totals(&self) -> RunTotals {
        RunTotals::collect(self.results.iter().map(|(_, r)| r))
    }

    /// Process exit code: 2 when nothing was linted, 1 when any error
    /// message exists, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.results.is_empty() {
            2
        } else if self.totals().has_errors() {
            1
        } else {
            0
        }
    }
}

/// Executes lint runs against a fixed configuration and engine pair.
pub struct LintRunner {
    config: LintConfig,
    spec_builder: SpecBuilderAdapter,
    rule_engine: RuleEngineAdapter,
}

impl LintRunner {
    /// Create a runner with explicit engine implementations.
    pub fn new(
        config: LintConfig,
        validator: Arc<dyn SpecValidator>,
        linter: Arc<dyn RuleEngine>,
    ) -> Self {
        Self {
            config,
            spec_builder: SpecBuilderAdapter::new(validator),
            rule_engine: RuleEngineAdapter::new(linter),
        }
    }

    /// Create a runner using the engine commands named in the config.
    pub fn from_config(config: LintConfig) -> Self {
        let validator = Arc::new(ProcessValidator::new(config.engines.validator.clone()));
        let linter = Arc::new(ProcessRuleEngine::new(config.engines.linter.clone()));
        Self::new(config, validator, linter)
    }

    /// Lint a single file through the full pipeline.
    pub fn lint_file(&self, path: &Path) -> Result<FileResult> {
        let doc = document::load_document(path)?;
        let validation = self.spec_builder.build(&doc)?;
        let violations = self.rule_engine.check(&doc, &self.config)?;
        Ok(merge_results(doc.version, validation, violations))
    }

    /// Lint a set of files on the bounded worker pool.
    ///
    /// `discovered` marks auto-discovered candidates: for those, a missing
    /// openapi/swagger descriptor means "not a spec file" and is skipped
    /// without comment, while explicitly named files get a visible warning.
    pub fn run(&self, files: &[PathBuf], discovered: bool) -> RunOutcome {
        let raw = self.process_all(files);

        let mut outcome = RunOutcome::default();
        for (path, result) in raw {
            match result {
                Ok(file_result) => outcome.results.push((path, file_result)),
                Err(LintError::MissingDescriptor { .. }) if discovered => {
                    tracing::debug!("Skipping {} (no openapi/swagger field)", path.display());
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }
        outcome
    }

    fn process_all(&self, files: &[PathBuf]) -> Vec<(PathBuf, Result<FileResult>)> {
        let lint_one = |path: &PathBuf| (path.clone(), self.lint_file(path));

        match rayon::ThreadPoolBuilder::new()
            .num_threads(MAX_CONCURRENT_FILES)
            .build()
        {
            Ok(pool) => pool.install(|| files.par_iter().map(lint_one).collect()),
            Err(e) => {
                tracing::warn!("Worker pool unavailable ({e}), linting sequentially");
                files.iter().map(lint_one).collect()
            }
        }
    }
}
