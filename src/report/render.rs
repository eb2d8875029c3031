//! Terminal rendering of lint results.
//!
//! Produces the multi-line report for a whole run: one block per file with
//! line-sorted messages in aligned columns, followed by run-wide
//! statistics. A run with no messages at all renders as the empty string,
//! which callers treat as the clean-run case (nothing is printed).

use super::{FileResult, LintMessage, RunTotals, Severity, PRINT_ORDER};
use console::style;
use std::fmt::Write;
use std::path::PathBuf;

/// Width of the severity label column (`warning` is the longest label).
const LABEL_WIDTH: usize = 7;

/// Render the report for an ordered collection of per-file results.
pub fn render(results: &[(PathBuf, FileResult)]) -> String {
    let totals = RunTotals::collect(results.iter().map(|(_, r)| r));
    if totals.total() == 0 {
        return String::new();
    }

    // Work on copies with each bucket stable-sorted by ascending line.
    let mut sorted: Vec<(&PathBuf, FileResult)> = results
        .iter()
        .map(|(path, result)| {
            let mut result = result.clone();
            result.errors.sort_by_key(|m| m.line);
            result.warnings.sort_by_key(|m| m.line);
            result.infos.sort_by_key(|m| m.line);
            result.hints.sort_by_key(|m| m.line);
            (path, result)
        })
        .collect();

    // Files with more errors first, then warnings, infos, hints. The sort
    // is stable, so fully tied files keep their input order.
    sorted.sort_by(|a, b| b.1.counts().cmp(&a.1.counts()));

    let line_width = line_number_width(&sorted);
    let message_width = message_column_width(&sorted);

    let mut out = String::new();
    for (path, result) in &sorted {
        if result.total() == 0 {
            continue;
        }

        let _ = writeln!(out, "{}", style(path.display().to_string()).bold());
        for severity in PRINT_ORDER {
            for message in result.bucket(severity) {
                let _ = writeln!(
                    out,
                    "{}",
                    format_message(message, severity, line_width, message_width)
                );
            }
        }
        out.push('\n');
    }

    for severity in PRINT_ORDER {
        let count = totals.count(severity);
        if count > 0 {
            let line = format!("{} {}", count, severity.noun_for(count));
            let _ = writeln!(out, "{}", paint(severity, &line));
        }
    }

    out
}

/// Rendered width of the widest line number over every message in the run.
fn line_number_width(results: &[(&PathBuf, FileResult)]) -> usize {
    all_messages(results)
        .map(|m| m.line.to_string().len())
        .max()
        .unwrap_or(0)
}

/// Width of the widest message, considering errors and warnings only;
/// info and hint messages do not influence the message column.
fn message_column_width(results: &[(&PathBuf, FileResult)]) -> usize {
    results
        .iter()
        .flat_map(|(_, r)| r.errors.iter().chain(&r.warnings))
        .map(|m| m.message.chars().count())
        .max()
        .unwrap_or(0)
}

fn all_messages<'a>(
    results: &'a [(&'a PathBuf, FileResult)],
) -> impl Iterator<Item = &'a LintMessage> {
    results.iter().flat_map(|(_, r)| {
        r.errors
            .iter()
            .chain(&r.warnings)
            .chain(&r.infos)
            .chain(&r.hints)
    })
}

fn format_message(
    message: &LintMessage,
    severity: Severity,
    line_width: usize,
    message_width: usize,
) -> String {
    let line = format!("{:>width$}", message.line, width = line_width);
    let label = format!("{:<width$}", severity.noun(), width = LABEL_WIDTH);
    let body = format!("{:<width$}", message.message, width = message_width);

    format!(
        "  {}  {}  {}  {}",
        style(line).dim(),
        paint(severity, &label),
        body,
        style(&message.rule).dim()
    )
}

fn paint(severity: Severity, text: &str) -> console::StyledObject<String> {
    let styled = style(text.to_string());
    match severity {
        Severity::Error => styled.red(),
        Severity::Warning => styled.yellow(),
        Severity::Info => styled.cyan(),
        Severity::Hint => styled.dim(),
    }
}
