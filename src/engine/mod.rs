//! Delegated validation engines.
//!
//! The actual OpenAPI validation logic lives outside this crate, behind two
//! collaborator traits: [`SpecValidator`] builds a resolved-schema object
//! (tracking circular references) and reports structural messages, and
//! [`RuleEngine`] evaluates the configured declarative rules. This module
//! defines the contract; [`process`] provides the subprocess-backed
//! implementations used by the CLI, and [`adapter`] the thin wrappers the
//! per-file pipeline calls.
//!
//! Reference resolution context is passed explicitly as a base directory
//! rather than by mutating the process working directory, so concurrent
//! per-file engine calls cannot race on process-global state.

pub mod adapter;
pub mod fingerprint;
pub mod process;

use crate::config::LintConfig;
use crate::error::Result;
use crate::report::Severity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use adapter::{RuleEngineAdapter, SpecBuilderAdapter};
pub use process::{ProcessRuleEngine, ProcessValidator};

/// Fingerprint function injected into the rule engine so it can deduplicate
/// the same underlying issue reported by overlapping rule sets.
pub type FingerprintFn = fn(rule: &str, location: &[String], message: &str) -> String;

/// Context for resolving relative `$ref` references: the directory that
/// contains the document being linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    pub base_dir: PathBuf,
}

impl ResolveContext {
    /// Build the context for a document at `path`.
    pub fn for_file(path: &Path) -> Self {
        let base_dir = match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        Self { base_dir }
    }
}

/// A single rule violation reported by either engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Location path: sequence of keys/indices into the document.
    #[serde(default)]
    pub location: Vec<String>,
    /// Human-readable message.
    pub message: String,
    /// Identifier of the violated rule.
    pub rule: String,
    /// Line number in the source file (1-indexed).
    #[serde(default)]
    pub line: u32,
    /// Severity the engine assigned from the configuration.
    pub severity: Severity,
    /// Deduplication key, when one has been computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Output of the validation engine for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The document tree with internal references expanded/tracked.
    pub resolved: Value,
    /// Whether resolution encountered circular references.
    #[serde(default)]
    pub has_circular_refs: bool,
    /// Structural validation messages.
    #[serde(default)]
    pub messages: Vec<Violation>,
}

/// The external OpenAPI validation engine: builds a resolved schema object
/// plus circular-reference metadata from a parsed document.
pub trait SpecValidator: Send + Sync {
    /// Engine name, used in error reporting.
    fn name(&self) -> &str;

    /// Build the resolved schema and collect structural messages.
    fn build(&self, document: &Value, ctx: &ResolveContext) -> Result<ValidationReport>;
}

/// The external declarative rule engine: evaluates the configured rules
/// against a parsed document.
pub trait RuleEngine: Send + Sync {
    /// Engine name, used in error reporting.
    fn name(&self) -> &str;

    /// Evaluate the configured rules and return violations. Messages for
    /// rules configured `off` must not be returned. The engine may use
    /// `fingerprint` to deduplicate issues reported by overlapping rules.
    fn check(
        &self,
        document: &Value,
        config: &LintConfig,
        ctx: &ResolveContext,
        fingerprint: FingerprintFn,
    ) -> Result<Vec<Violation>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_context_uses_parent_directory() {
        let ctx = ResolveContext::for_file(Path::new("/specs/v1/api.yaml"));
        assert_eq!(ctx.base_dir, PathBuf::from("/specs/v1"));
    }

    #[test]
    fn resolve_context_for_bare_filename_is_current_dir() {
        let ctx = ResolveContext::for_file(Path::new("api.yaml"));
        assert_eq!(ctx.base_dir, PathBuf::from("."));
    }

    #[test]
    fn violation_deserializes_engine_shape() {
        let v: Violation = serde_json::from_str(
            r#"{
                "location": ["paths", "/pets", "get"],
                "message": "Operation has no summary",
                "rule": "no_summary",
                "line": 14,
                "severity": "warning"
            }"#,
        )
        .unwrap();
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!(v.line, 14);
        assert!(v.fingerprint.is_none());
    }

    #[test]
    fn validation_report_defaults_optional_fields() {
        let report: ValidationReport =
            serde_json::from_str(r#"{"resolved": {"openapi": "3.0.0"}}"#).unwrap();
        assert!(!report.has_circular_refs);
        assert!(report.messages.is_empty());
    }
}
