//! Lint results: normalized messages, per-file buckets, run totals.

pub mod merge;
pub mod render;

use serde::{Deserialize, Serialize};

pub use merge::merge_results;
pub use render::render;

/// Severity of a reported lint message.
///
/// Ordering is by weight: `Hint < Info < Warning < Error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hint,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Singular noun for statistics output.
    pub fn noun(&self) -> &'static str {
        match self {
            Severity::Hint => "hint",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Pluralized noun for a count.
    pub fn noun_for(&self, count: usize) -> String {
        if count == 1 {
            self.noun().to_string()
        } else {
            format!("{}s", self.noun())
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

/// A single normalized lint message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMessage {
    /// Location path: sequence of keys/indices into the document.
    pub location: Vec<String>,
    /// Human-readable message.
    pub message: String,
    /// Identifier of the rule that produced this message.
    pub rule: String,
    /// Line number in the source file (1-indexed).
    pub line: u32,
}

/// The merged lint result for one file, keyed by severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Declared description version (`openapi` value or `"2.0"`).
    pub version: String,
    pub errors: Vec<LintMessage>,
    pub warnings: Vec<LintMessage>,
    pub infos: Vec<LintMessage>,
    pub hints: Vec<LintMessage>,
}

impl FileResult {
    /// Create an empty result for the given description version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Append a message to the bucket for its severity.
    pub fn push(&mut self, severity: Severity, message: LintMessage) {
        match severity {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
            Severity::Info => self.infos.push(message),
            Severity::Hint => self.hints.push(message),
        }
    }

    /// Messages in the bucket for one severity.
    pub fn bucket(&self, severity: Severity) -> &[LintMessage] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Info => &self.infos,
            Severity::Hint => &self.hints,
        }
    }

    /// Bucket sizes as `(errors, warnings, infos, hints)`.
    ///
    /// This tuple is the file-ordering sort key: comparing it directly
    /// gives the errors-most-significant lexicographic order.
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.errors.len(),
            self.warnings.len(),
            self.infos.len(),
            self.hints.len(),
        )
    }

    /// Total number of messages across all buckets.
    pub fn total(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.infos.len() + self.hints.len()
    }
}

/// Message totals across a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub hints: usize,
}

impl RunTotals {
    /// Accumulate totals over a set of file results.
    pub fn collect<'a>(results: impl IntoIterator<Item = &'a FileResult>) -> Self {
        let mut totals = Self::default();
        for result in results {
            totals.errors += result.errors.len();
            totals.warnings += result.warnings.len();
            totals.infos += result.infos.len();
            totals.hints += result.hints.len();
        }
        totals
    }

    /// Total message count.
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos + self.hints
    }

    /// Whether any error-severity message exists.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Count for one severity.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.errors,
            Severity::Warning => self.warnings,
            Severity::Info => self.infos,
            Severity::Hint => self.hints,
        }
    }
}

/// Severity order used when printing a file block and the statistics
/// footer: least severe first.
pub const PRINT_ORDER: [Severity; 4] = [
    Severity::Hint,
    Severity::Info,
    Severity::Warning,
    Severity::Error,
];
