//! Thin adapters over the delegated engines.
//!
//! The adapters own what little in-repo logic surrounds an engine call:
//! deriving the resolution context from the document's location, injecting
//! the fingerprint function into the rule engine, and normalizing failures
//! into [`LintError::Engine`] so the runner can treat them as per-file
//! failures.

use super::{
    fingerprint::fingerprint, ResolveContext, RuleEngine, SpecValidator, ValidationReport,
    Violation,
};
use crate::config::LintConfig;
use crate::document::Document;
use crate::error::{LintError, Result};
use std::sync::Arc;

/// Adapter around the external validation engine.
pub struct SpecBuilderAdapter {
    engine: Arc<dyn SpecValidator>,
}

impl SpecBuilderAdapter {
    pub fn new(engine: Arc<dyn SpecValidator>) -> Self {
        Self { engine }
    }

    /// Build the resolved schema for a document.
    pub fn build(&self, document: &Document) -> Result<ValidationReport> {
        let ctx = ResolveContext::for_file(&document.path);
        self.engine
            .build(&document.root, &ctx)
            .map_err(|e| wrap_engine_error(self.engine.name(), e))
    }
}

/// Adapter around the external declarative rule engine.
pub struct RuleEngineAdapter {
    engine: Arc<dyn RuleEngine>,
}

impl RuleEngineAdapter {
    pub fn new(engine: Arc<dyn RuleEngine>) -> Self {
        Self { engine }
    }

    /// Evaluate the configured rules against a document.
    pub fn check(&self, document: &Document, config: &LintConfig) -> Result<Vec<Violation>> {
        let ctx = ResolveContext::for_file(&document.path);
        self.engine
            .check(&document.root, config, &ctx, fingerprint)
            .map_err(|e| wrap_engine_error(self.engine.name(), e))
    }
}

fn wrap_engine_error(engine: &str, err: LintError) -> LintError {
    match err {
        already @ LintError::Engine { .. } => already,
        other => LintError::Engine {
            engine: engine.to_string(),
            message: other.to_string(),
        },
    }
}
