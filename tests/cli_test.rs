//! Integration tests for the CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn oaslint() -> Command {
    Command::new(cargo_bin("oaslint"))
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    oaslint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lint OpenAPI and Swagger"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    oaslint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_show_config_prints_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    oaslint()
        .current_dir(temp.path())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("shared:"))
        .stdout(predicate::str::contains("no_summary: warning"));
    Ok(())
}

#[test]
fn cli_empty_directory_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    oaslint()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No API description files"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".oaslintrc.yaml"),
        "shared:\n  operations:\n    no_summary: fatal\n",
    )?;

    oaslint()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn cli_explicit_file_without_descriptor_is_a_visible_error() -> Result<(), Box<dyn std::error::Error>>
{
    let temp = TempDir::new()?;
    fs::write(temp.path().join("values.yaml"), "replicas: 3\n")?;

    oaslint()
        .current_dir(temp.path())
        .arg("values.yaml")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("values.yaml"))
        .stderr(predicate::str::contains("openapi"));
    Ok(())
}

#[test]
fn cli_unsupported_extension_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("spec.txt"), "openapi: 3.0.0\n")?;

    oaslint()
        .current_dir(temp.path())
        .arg("spec.txt")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format"));
    Ok(())
}

#[cfg(unix)]
mod with_stub_engines {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Install an executable engine stub that swallows its request and
    /// prints a canned JSON response.
    fn install_stub(dir: &Path, name: &str, response: &str) -> String {
        let path = dir.join(name);
        fs::write(
            &path,
            format!("#!/bin/sh\ncat > /dev/null\nprintf '%s' '{response}'\n"),
        )
        .unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn setup_project(validator_response: &str, linter_response: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let validator = install_stub(temp.path(), "validator.sh", validator_response);
        let linter = install_stub(temp.path(), "linter.sh", linter_response);
        fs::write(
            temp.path().join(".oaslintrc.yaml"),
            format!("engines:\n  validator: {validator}\n  linter: {linter}\n"),
        )
        .unwrap();
        fs::write(
            temp.path().join("petstore.yaml"),
            "openapi: 3.0.3\ninfo:\n  title: Petstore\n",
        )
        .unwrap();
        temp
    }

    const CLEAN_VALIDATOR: &str = r#"{"resolved": {}, "has_circular_refs": false, "messages": []}"#;
    const CLEAN_LINTER: &str = r#"{"violations": []}"#;

    #[test]
    fn clean_spec_prints_nothing_and_exits_zero() {
        let temp = setup_project(CLEAN_VALIDATOR, CLEAN_LINTER);

        oaslint()
            .current_dir(temp.path())
            .arg("petstore.yaml")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn spec_with_findings_renders_report_and_exits_one() {
        let validator = r#"{"resolved": {}, "messages": [
            {"location": ["paths", "/pets/{petId}"], "message": "Path parameter petId is not defined", "rule": "missing_path_parameter", "line": 7, "severity": "error"}
        ]}"#;
        let linter = r#"{"violations": [
            {"location": ["paths", "/pets", "get"], "message": "Operation has no summary", "rule": "no_summary", "line": 12, "severity": "warning"},
            {"location": ["components", "schemas", "Pet"], "message": "Schema has no description", "rule": "no_schema_description", "line": 3, "severity": "warning"}
        ]}"#;
        let temp = setup_project(validator, linter);

        let assert = oaslint()
            .current_dir(temp.path())
            .arg("petstore.yaml")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("petstore.yaml"))
            .stdout(predicate::str::contains("2 warnings"))
            .stdout(predicate::str::contains("1 error"));

        // Warnings print before the error inside the file block.
        let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let warning_pos = output.find("no_summary").unwrap();
        let error_pos = output.find("missing_path_parameter").unwrap();
        assert!(warning_pos < error_pos);
    }

    #[test]
    fn verbose_dumps_raw_merged_results() {
        let temp = setup_project(CLEAN_VALIDATOR, CLEAN_LINTER);

        oaslint()
            .current_dir(temp.path())
            .args(["--verbose", "petstore.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"version\": \"3.0.3\""));
    }

    #[test]
    fn auto_discovery_lints_specs_in_tree() {
        let temp = setup_project(CLEAN_VALIDATOR, CLEAN_LINTER);
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(
            temp.path().join("nested/other.yaml"),
            "swagger: \"2.0\"\ninfo:\n  title: Legacy\n",
        )
        .unwrap();
        // Not a spec; must be skipped silently.
        fs::write(temp.path().join("values.yaml"), "replicas: 3\n").unwrap();

        oaslint().current_dir(temp.path()).assert().success();
    }

    #[test]
    fn failing_engine_excludes_file_and_exits_two() {
        let temp = TempDir::new().unwrap();
        let validator = temp.path().join("validator.sh");
        fs::write(&validator, "#!/bin/sh\ncat > /dev/null\nexit 3\n").unwrap();
        let mut perms = fs::metadata(&validator).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&validator, perms).unwrap();

        fs::write(
            temp.path().join(".oaslintrc.yaml"),
            format!(
                "engines:\n  validator: {}\n  linter: {}\n",
                validator.display(),
                validator.display()
            ),
        )
        .unwrap();
        fs::write(temp.path().join("api.yaml"), "openapi: 3.0.0\n").unwrap();

        oaslint()
            .current_dir(temp.path())
            .arg("api.yaml")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("api.yaml"));
    }
}
