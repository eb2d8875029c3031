//! Auto-discovery of candidate specification files.
//!
//! When no files are named on the command line, every `*.yaml`, `*.yml`
//! and `*.json` file under the working directory is a candidate. Hidden
//! directories are always skipped, and a `.oaslintignore` file may list
//! additional glob patterns (relative to the working directory) to
//! exclude. Whether a candidate actually is an API description is decided
//! later by the descriptor check.

use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the ignore file read from the discovery root.
pub const IGNORE_FILE: &str = ".oaslintignore";

const SPEC_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Discover candidate spec files under `base`, sorted for a deterministic
/// run order.
pub fn discover_specs(base: &Path) -> Vec<PathBuf> {
    let ignores = load_ignore_patterns(base);

    let mut found = Vec::new();
    for ext in SPEC_EXTENSIONS {
        for prefix in ["", "**/"] {
            let pattern = base.join(format!("{prefix}*.{ext}"));
            let Ok(entries) = glob(&pattern.to_string_lossy()) else {
                continue;
            };
            for path in entries.flatten() {
                if !path.is_file() {
                    continue;
                }
                let Ok(relative) = path.strip_prefix(base) else {
                    continue;
                };
                if is_hidden(relative) || is_ignored(relative, &ignores) {
                    continue;
                }
                found.push(path);
            }
        }
    }

    found.sort();
    found.dedup();
    found
}

/// Read and compile the ignore patterns, tolerating a missing file.
fn load_ignore_patterns(base: &Path) -> Vec<Pattern> {
    let Ok(content) = fs::read_to_string(base.join(IGNORE_FILE)) else {
        return Vec::new();
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Pattern::new(line) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!("Ignoring bad pattern '{line}' in {IGNORE_FILE}: {e}");
                None
            }
        })
        .collect()
}

/// Whether any path component is hidden (starts with a dot).
fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
    })
}

fn is_ignored(relative: &Path, ignores: &[Pattern]) -> bool {
    ignores.iter().any(|p| p.matches_path(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "openapi: 3.0.0\n").unwrap();
    }

    fn names(dir: &TempDir) -> Vec<String> {
        discover_specs(dir.path())
            .into_iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn finds_all_spec_extensions_recursively() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "api.yaml");
        touch(&temp, "v2/api.yml");
        touch(&temp, "v3/nested/api.json");
        touch(&temp, "README.md");

        let mut found = names(&temp);
        found.sort();
        assert_eq!(found, vec!["api.yaml", "v2/api.yml", "v3/nested/api.json"]);
    }

    #[test]
    fn skips_hidden_directories() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "api.yaml");
        touch(&temp, ".git/config.yaml");
        touch(&temp, ".cache/spec.json");

        assert_eq!(names(&temp), vec!["api.yaml"]);
    }

    #[test]
    fn honors_ignore_file_patterns() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "api.yaml");
        touch(&temp, "vendor/third_party.yaml");
        touch(&temp, "fixtures/broken.json");
        fs::write(
            temp.path().join(IGNORE_FILE),
            "# generated things\nvendor/**\nfixtures/*.json\n",
        )
        .unwrap();

        assert_eq!(names(&temp), vec!["api.yaml"]);
    }

    #[test]
    fn bad_ignore_patterns_are_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "api.yaml");
        fs::write(temp.path().join(IGNORE_FILE), "[unclosed\n").unwrap();

        assert_eq!(names(&temp), vec!["api.yaml"]);
    }

    #[test]
    fn results_are_sorted() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "zeta.yaml");
        touch(&temp, "alpha.json");
        touch(&temp, "midway.yml");

        assert_eq!(names(&temp), vec!["alpha.json", "midway.yml", "zeta.yaml"]);
    }
}
