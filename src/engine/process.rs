//! Subprocess-backed engine implementations.
//!
//! Each delegated engine is an external executable speaking a small JSON
//! protocol: one request object on stdin, one response object on stdout.
//! The child process runs with its working directory set to the resolution
//! context's base directory so relative `$ref` references resolve against
//! the document's location; the parent process directory is never touched.

use super::{
    FingerprintFn, ResolveContext, RuleEngine, SpecValidator, ValidationReport, Violation,
};
use crate::config::LintConfig;
use crate::error::{LintError, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};

/// Validation engine invoked as an external command.
#[derive(Debug, Clone)]
pub struct ProcessValidator {
    command: String,
}

impl ProcessValidator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl SpecValidator for ProcessValidator {
    fn name(&self) -> &str {
        &self.command
    }

    fn build(&self, document: &Value, ctx: &ResolveContext) -> Result<ValidationReport> {
        let request = json!({ "document": document });
        let response = run_engine(&self.command, ctx, &request)?;

        serde_json::from_value(response).map_err(|e| LintError::Engine {
            engine: self.command.clone(),
            message: format!("invalid response: {e}"),
        })
    }
}

/// Declarative rule engine invoked as an external command.
#[derive(Debug, Clone)]
pub struct ProcessRuleEngine {
    command: String,
}

impl ProcessRuleEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[derive(Deserialize)]
struct RuleEngineResponse {
    #[serde(default)]
    violations: Vec<Violation>,
}

impl RuleEngine for ProcessRuleEngine {
    fn name(&self) -> &str {
        &self.command
    }

    fn check(
        &self,
        document: &Value,
        config: &LintConfig,
        ctx: &ResolveContext,
        fingerprint: FingerprintFn,
    ) -> Result<Vec<Violation>> {
        let request = json!({ "document": document, "config": config });
        let response = run_engine(&self.command, ctx, &request)?;

        let parsed: RuleEngineResponse =
            serde_json::from_value(response).map_err(|e| LintError::Engine {
                engine: self.command.clone(),
                message: format!("invalid response: {e}"),
            })?;

        // Violations from an external process carry no dedup key of their
        // own; attach ours so downstream merging can collapse duplicates.
        let violations = parsed
            .violations
            .into_iter()
            .map(|mut v| {
                if v.fingerprint.is_none() {
                    v.fingerprint = Some(fingerprint(&v.rule, &v.location, &v.message));
                }
                v
            })
            .collect();

        Ok(violations)
    }
}

/// Split a configured engine command into program and arguments.
fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(String::from);
    let program = parts.next().ok_or_else(|| LintError::Engine {
        engine: command.to_string(),
        message: "empty engine command".to_string(),
    })?;
    Ok((program, parts.collect()))
}

/// Run one engine invocation: JSON request in, JSON response out.
fn run_engine(command: &str, ctx: &ResolveContext, request: &Value) -> Result<Value> {
    let (program, args) = split_command(command)?;

    let engine_err = |message: String| LintError::Engine {
        engine: command.to_string(),
        message,
    };

    let mut child = Command::new(&program)
        .args(&args)
        .current_dir(&ctx.base_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| engine_err(format!("failed to start: {e}")))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| engine_err("stdin unavailable".to_string()))?;
        let body =
            serde_json::to_vec(request).map_err(|e| engine_err(format!("request encoding: {e}")))?;
        stdin
            .write_all(&body)
            .map_err(|e| engine_err(format!("failed to write request: {e}")))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| engine_err(format!("failed to wait: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(engine_err(format!(
            "exited with {:?}: {}",
            output.status.code(),
            stderr.trim()
        )));
    }

    serde_json::from_slice(&output.stdout).map_err(|e| engine_err(format!("invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_separates_program_and_args() {
        let (program, args) = split_command("oas-linter --strict").unwrap();
        assert_eq!(program, "oas-linter");
        assert_eq!(args, vec!["--strict".to_string()]);
    }

    #[test]
    fn split_command_rejects_empty() {
        assert!(matches!(
            split_command("   "),
            Err(LintError::Engine { .. })
        ));
    }

    #[test]
    fn missing_engine_binary_is_an_engine_error() {
        let ctx = ResolveContext {
            base_dir: std::env::temp_dir(),
        };
        let result = run_engine("oaslint-no-such-engine-binary", &ctx, &json!({}));
        assert!(matches!(result, Err(LintError::Engine { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn engine_response_round_trip() {
        let ctx = ResolveContext {
            base_dir: std::env::temp_dir(),
        };
        // `cat` echoes the request back, which is itself valid JSON.
        let response = run_engine("cat", &ctx, &json!({"document": {"openapi": "3.0.0"}})).unwrap();
        assert_eq!(response["document"]["openapi"], "3.0.0");
    }

    #[cfg(unix)]
    #[test]
    fn failing_engine_surfaces_exit_status() {
        let ctx = ResolveContext {
            base_dir: std::env::temp_dir(),
        };
        let result = run_engine("false", &ctx, &json!({}));
        assert!(matches!(result, Err(LintError::Engine { .. })));
    }
}
