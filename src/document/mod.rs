//! API description document loading.
//!
//! Loads a candidate specification file into a generic JSON tree: the raw
//! text is preprocessed (BOM stripped, line endings normalized; both
//! transformations preserve line-number correspondence with the original
//! file), parsed according to its extension, and checked for an
//! `openapi`/`swagger` descriptor field. Documents without a descriptor
//! fail with an error distinguishable from parse failures so that
//! auto-discovery can silently skip non-spec files.

use crate::error::{LintError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported document formats, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Json,
    Yaml,
}

impl DocFormat {
    /// Determine the format for a path, failing on unsupported extensions.
    pub fn for_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(DocFormat::Json),
            "yaml" | "yml" => Ok(DocFormat::Yaml),
            _ => Err(LintError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// A parsed API description document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path the document was loaded from.
    pub path: PathBuf,
    /// Declared description version (`openapi` value, or `"2.0"`).
    pub version: String,
    /// Generic parsed tree.
    pub root: Value,
}

impl Document {
    /// Whether this is an OpenAPI 3.x document (as opposed to Swagger 2.0).
    pub fn is_oas3(&self) -> bool {
        self.version.starts_with('3')
    }
}

/// Normalize raw file content before parsing.
///
/// Strips a UTF-8 byte-order mark and converts CRLF line endings to LF.
/// Both transformations keep every remaining character on its original
/// line, so engine-reported line numbers match the file on disk.
pub fn preprocess(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).replace("\r\n", "\n")
}

/// Extract the declared description version, if any.
///
/// An `openapi` string field wins; otherwise `swagger` must be exactly
/// `"2.0"`.
pub fn declared_version(root: &Value) -> Option<String> {
    if let Some(openapi) = root.get("openapi").and_then(Value::as_str) {
        return Some(openapi.to_string());
    }
    match root.get("swagger").and_then(Value::as_str) {
        Some("2.0") => Some("2.0".to_string()),
        _ => None,
    }
}

/// Parse preprocessed content into a generic tree.
fn parse_tree(path: &Path, content: &str, format: DocFormat) -> Result<Value> {
    let parse_err = |message: String| LintError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match format {
        DocFormat::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        DocFormat::Yaml => {
            let mut value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
            value
                .apply_merge()
                .map_err(|e| parse_err(e.to_string()))?;
            serde_json::to_value(&value).map_err(|e| parse_err(e.to_string()))
        }
    }
}

/// Parse file content (already read) into a [`Document`].
pub fn parse_document(path: &Path, raw: &str) -> Result<Document> {
    let format = DocFormat::for_path(path)?;
    let content = preprocess(raw);
    let root = parse_tree(path, &content, format)?;

    let version = declared_version(&root).ok_or_else(|| LintError::MissingDescriptor {
        path: path.to_path_buf(),
    })?;

    Ok(Document {
        path: path.to_path_buf(),
        version,
        root,
    })
}

/// Read and parse a document from disk.
pub fn load_document(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path)?;
    parse_document(path, &raw)
}
