//! Library-level end-to-end tests with in-process mock engines.

use oaslint::config::LintConfig;
use oaslint::engine::{
    FingerprintFn, ResolveContext, RuleEngine, SpecValidator, ValidationReport, Violation,
};
use oaslint::report::{render, Severity};
use oaslint::runner::LintRunner;
use oaslint::Result;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Validation engine returning a fixed set of messages.
struct MockValidator {
    messages: Vec<Violation>,
}

impl SpecValidator for MockValidator {
    fn name(&self) -> &str {
        "mock-validator"
    }

    fn build(&self, document: &Value, _ctx: &ResolveContext) -> Result<ValidationReport> {
        Ok(ValidationReport {
            resolved: document.clone(),
            has_circular_refs: false,
            messages: self.messages.clone(),
        })
    }
}

/// Rule engine returning fixed violations for each file title it knows.
struct MockRuleEngine {
    by_title: Vec<(String, Vec<Violation>)>,
}

impl RuleEngine for MockRuleEngine {
    fn name(&self) -> &str {
        "mock-linter"
    }

    fn check(
        &self,
        document: &Value,
        _config: &LintConfig,
        _ctx: &ResolveContext,
        _fingerprint: FingerprintFn,
    ) -> Result<Vec<Violation>> {
        let title = document["info"]["title"].as_str().unwrap_or_default();
        Ok(self
            .by_title
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, v)| v.clone())
            .unwrap_or_default())
    }
}

fn violation(rule: &str, message: &str, line: u32, severity: Severity) -> Violation {
    Violation {
        location: vec!["paths".into(), "/pets".into()],
        message: message.into(),
        rule: rule.into(),
        line,
        severity,
        fingerprint: None,
    }
}

fn write_spec(dir: &TempDir, name: &str, title: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("openapi: 3.0.3\ninfo:\n  title: {title}\n")).unwrap();
    path
}

fn runner(validator_messages: Vec<Violation>, by_title: Vec<(&str, Vec<Violation>)>) -> LintRunner {
    LintRunner::new(
        LintConfig::default(),
        Arc::new(MockValidator {
            messages: validator_messages,
        }),
        Arc::new(MockRuleEngine {
            by_title: by_title
                .into_iter()
                .map(|(t, v)| (t.to_string(), v))
                .collect(),
        }),
    )
}

#[test]
fn scenario_two_warnings_one_error_renders_and_fails() {
    console::set_colors_enabled(false);
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp, "petstore.yaml", "petstore");

    let runner = runner(
        vec![violation(
            "missing_path_parameter",
            "Path parameter petId is not defined",
            7,
            Severity::Error,
        )],
        vec![(
            "petstore",
            vec![
                violation("no_summary", "Operation has no summary", 12, Severity::Warning),
                violation(
                    "no_schema_description",
                    "Schema has no description",
                    3,
                    Severity::Warning,
                ),
            ],
        )],
    );

    let outcome = runner.run(&[spec], false);
    assert_eq!(outcome.exit_code(), 1);

    let report = render(&outcome.results);
    let lines: Vec<&str> = report.lines().collect();

    // Exactly 2 warning lines and 1 error line, warnings first.
    assert_eq!(report.matches(" warning ").count(), 2);
    assert_eq!(report.matches(" error ").count(), 1);
    assert!(lines[1].contains("no_schema_description"));
    assert!(lines[2].contains("no_summary"));
    assert!(lines[3].contains("missing_path_parameter"));

    // Statistics footer: "2 warnings" then "1 error".
    let warnings_pos = report.find("2 warnings").unwrap();
    let error_pos = report.find("1 error").unwrap();
    assert!(warnings_pos < error_pos);
}

#[test]
fn file_with_error_sorts_before_file_with_more_warnings() {
    console::set_colors_enabled(false);
    let temp = TempDir::new().unwrap();
    let file_a = write_spec(&temp, "a.yaml", "alpha");
    let file_b = write_spec(&temp, "b.yaml", "beta");

    let runner = runner(
        vec![],
        vec![
            (
                "alpha",
                vec![violation("broken", "One hard error", 4, Severity::Error)],
            ),
            (
                "beta",
                vec![
                    violation("w1", "warn one", 1, Severity::Warning),
                    violation("w2", "warn two", 2, Severity::Warning),
                    violation("w3", "warn three", 3, Severity::Warning),
                ],
            ),
        ],
    );

    // Input order puts b first; the report must still lead with a.
    let outcome = runner.run(&[file_b, file_a], false);
    let report = render(&outcome.results);

    let a_pos = report.find("a.yaml").unwrap();
    let b_pos = report.find("b.yaml").unwrap();
    assert!(a_pos < b_pos);
    assert_eq!(outcome.exit_code(), 1);
}

#[test]
fn clean_run_renders_nothing_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp, "clean.yaml", "clean");

    let runner = runner(vec![], vec![]);
    let outcome = runner.run(&[spec], false);

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(render(&outcome.results), "");
}

#[test]
fn version_string_is_attached_to_each_result() {
    let temp = TempDir::new().unwrap();
    let oas3 = write_spec(&temp, "v3.yaml", "three");
    let swagger = temp.path().join("v2.json");
    fs::write(
        &swagger,
        r#"{"swagger": "2.0", "info": {"title": "two"}}"#,
    )
    .unwrap();

    let runner = runner(vec![], vec![]);
    let outcome = runner.run(&[oas3, swagger], false);

    assert_eq!(outcome.results[0].1.version, "3.0.3");
    assert_eq!(outcome.results[1].1.version, "2.0");
}

#[test]
fn non_spec_files_are_excluded_from_discovery_results() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp, "api.yaml", "real");
    let not_a_spec = temp.path().join("values.yaml");
    fs::write(&not_a_spec, "replicas: 3\n").unwrap();

    let runner = runner(vec![], vec![]);
    let outcome = runner.run(&[spec.clone(), not_a_spec], true);

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].0, spec);
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn engine_order_is_preserved_within_buckets() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp, "api.yaml", "ordered");

    let runner = runner(
        vec![violation("from-validator", "validator first", 9, Severity::Info)],
        vec![(
            "ordered",
            vec![violation("from-linter", "linter second", 2, Severity::Info)],
        )],
    );

    let outcome = runner.run(&[spec], false);
    let infos = &outcome.results[0].1.infos;
    assert_eq!(infos[0].rule, "from-validator");
    assert_eq!(infos[1].rule, "from-linter");
}
