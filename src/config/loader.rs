//! Configuration file discovery and loading.
//!
//! User configuration lives in a `.oaslintrc` dotfile (YAML or JSON
//! variants). Discovery walks up from the working directory and the first
//! match wins; the loaded file is deep-merged over the built-in defaults so
//! unspecified rules inherit their default severities.

use crate::config::merger::deep_merge;
use crate::config::schema::LintConfig;
use crate::error::{LintError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized config file names, in precedence order within one directory.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".oaslintrc.yaml",
    ".oaslintrc.yml",
    ".oaslintrc.json",
    ".oaslintrc",
];

/// Find the nearest config file, walking up from `start`.
///
/// Within a directory the [`CONFIG_FILE_NAMES`] order decides ties; across
/// directories the closest one wins.
pub fn discover_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file and merge it over the built-in defaults.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist, `ConfigParse` if it
/// is not valid YAML/JSON, and `ConfigValidation` if it parses but contains
/// invalid values (e.g. an unknown severity).
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintError::Io(e)
        }
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let overlay: Value = if is_json {
        serde_json::from_str(&content).map_err(|e| LintError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| LintError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    // An empty file parses to null; treat it as "no overrides".
    let overlay = if overlay.is_null() {
        Value::Object(Default::default())
    } else {
        overlay
    };

    merge_with_defaults(&overlay)
}

/// Deep-merge an overlay value over the built-in default configuration and
/// deserialize the result into a typed [`LintConfig`].
pub fn merge_with_defaults(overlay: &Value) -> Result<LintConfig> {
    let defaults = serde_json::to_value(LintConfig::default())
        .map_err(|e| LintError::Other(anyhow::anyhow!("default config serialization: {e}")))?;

    let merged = deep_merge(&defaults, overlay);

    serde_json::from_value(merged).map_err(|e| LintError::ConfigValidation {
        message: e.to_string(),
    })
}

/// Resolve the effective configuration for a run.
///
/// With an explicit path, any load failure is fatal. Otherwise the nearest
/// discovered dotfile is used; when discovery finds nothing the built-in
/// defaults apply. A discovered file that fails to parse or validate is
/// still fatal; silent fallback only covers the absence of a config file.
pub fn resolve_config(start: &Path, explicit: Option<&Path>) -> Result<LintConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match discover_config_file(start) {
        Some(path) => {
            tracing::debug!("Using configuration from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(LintConfig::default()),
    }
}
