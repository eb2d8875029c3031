//! Merging the two engines' outputs into one per-file result.

use super::{FileResult, LintMessage};
use crate::engine::{ValidationReport, Violation};

/// Combine the validation engine's messages and the rule engine's
/// violations into one [`FileResult`].
///
/// Messages are partitioned into the four severity buckets. Within each
/// bucket the engines' own ordering is preserved: validation messages
/// first, rule violations after, exactly as delivered. Messages for rules
/// configured `off` never reach this point; the engines withhold them.
pub fn merge_results(
    version: String,
    validation: ValidationReport,
    violations: Vec<Violation>,
) -> FileResult {
    let mut result = FileResult::new(version);

    for violation in validation.messages.into_iter().chain(violations) {
        let severity = violation.severity;
        result.push(
            severity,
            LintMessage {
                location: violation.location,
                message: violation.message,
                rule: violation.rule,
                line: violation.line,
            },
        );
    }

    result
}
