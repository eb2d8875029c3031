//! Configuration loading, merging, and the rule taxonomy.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{discover_config_file, load_config_file, merge_with_defaults, resolve_config};
pub use merger::deep_merge;
pub use schema::{
    CaseConvention, CasedRule, EngineSettings, LintConfig, Oas3Rules, RuleEngineScope, RuleStatus,
    SharedRules, Swagger2Rules,
};
