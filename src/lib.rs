//! oaslint - Lint OpenAPI and Swagger API descriptions.
//!
//! oaslint checks API description documents against a configurable rule
//! set and reports violations at four severities (error, warning, info,
//! hint). The actual validation logic is delegated to two external
//! engines; this crate owns the rule taxonomy configuration, the document
//! loading pipeline, result merging and terminal presentation, and the
//! CLI around them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, file discovery, and run command
//! - [`config`] - Configuration loading, merging, and the rule taxonomy
//! - [`document`] - API description document loading and parsing
//! - [`engine`] - Delegated engine contract, adapters, and subprocess impls
//! - [`error`] - Error types and result aliases
//! - [`report`] - Result merging, totals, and terminal rendering
//! - [`runner`] - Per-file pipeline and the bounded-parallel run
//!
//! # Example
//!
//! ```
//! use oaslint::report::{FileResult, render, Severity, LintMessage};
//! use std::path::PathBuf;
//!
//! let mut result = FileResult::new("3.0.0");
//! result.push(Severity::Warning, LintMessage {
//!     location: vec!["paths".into(), "/pets".into(), "get".into()],
//!     message: "Operation has no summary".into(),
//!     rule: "no_summary".into(),
//!     line: 14,
//! });
//!
//! let report = render(&[(PathBuf::from("api.yaml"), result)]);
//! assert!(report.contains("1 warning"));
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod report;
pub mod runner;

pub use error::{LintError, Result};
