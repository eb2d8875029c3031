//! Configuration schema definitions for oaslint.
//!
//! This module contains the full rule taxonomy that maps to the
//! `.oaslintrc` configuration file format. Rules are grouped into three
//! scopes ([`SharedRules`] apply to every document, [`Swagger2Rules`] and
//! [`Oas3Rules`] only to the matching description version) plus a
//! [`RuleEngineScope`] that is forwarded verbatim to the declarative rule
//! engine.
//!
//! Every rule is a typed struct field rather than a free-form string key,
//! so a typo in a severity value fails deserialization at the boundary.
//! Unknown rule *names* in user config are ignored; they are the external
//! engines' concern.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity assigned to a rule, or `off` to disable it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Off,
    Hint,
    Info,
    Warning,
    Error,
}

impl RuleStatus {
    /// Whether the rule is disabled.
    pub fn is_off(&self) -> bool {
        matches!(self, RuleStatus::Off)
    }
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleStatus::Off => write!(f, "off"),
            RuleStatus::Hint => write!(f, "hint"),
            RuleStatus::Info => write!(f, "info"),
            RuleStatus::Warning => write!(f, "warning"),
            RuleStatus::Error => write!(f, "error"),
        }
    }
}

/// Naming conventions accepted by case-convention rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseConvention {
    LowerSnakeCase,
    UpperSnakeCase,
    LowerCamelCase,
    UpperCamelCase,
    KebabCase,
    UpperDashCase,
}

/// A rule whose status is paired with a naming convention.
///
/// Configured as a two-element array, e.g. `["error", "lower_snake_case"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasedRule(pub RuleStatus, pub CaseConvention);

impl CasedRule {
    /// Status component of the rule.
    pub fn status(&self) -> RuleStatus {
        self.0
    }

    /// Convention component of the rule.
    pub fn convention(&self) -> CaseConvention {
        self.1
    }
}

/// Root configuration structure for `.oaslintrc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// External engine commands.
    pub engines: EngineSettings,

    /// Rules applied to every description version.
    pub shared: SharedRules,

    /// Rules applied only to Swagger 2.0 documents.
    pub swagger2: Swagger2Rules,

    /// Rules applied only to OpenAPI 3.x documents.
    pub oas3: Oas3Rules,

    /// Settings forwarded to the declarative rule engine.
    pub rule_engine: RuleEngineScope,
}

/// Commands used to invoke the two delegated engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Validation engine command (resolved schema + structural messages).
    pub validator: String,

    /// Declarative rule engine command (configured rule violations).
    pub linter: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            validator: "oas-validator".to_string(),
            linter: "oas-linter".to_string(),
        }
    }
}

/// Rules shared by Swagger 2.0 and OpenAPI 3.x documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedRules {
    pub operations: SharedOperations,
    pub pagination: SharedPagination,
    pub parameters: SharedParameters,
    pub paths: SharedPaths,
    pub responses: SharedResponses,
    pub schemas: SharedSchemas,
    pub security_definitions: SharedSecurityDefinitions,
    pub security: SharedSecurity,
    pub walker: SharedWalker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedOperations {
    pub no_operation_id: RuleStatus,
    pub operation_id_case_convention: CasedRule,
    pub no_summary: RuleStatus,
    pub no_array_responses: RuleStatus,
    pub parameter_order: RuleStatus,
    pub undefined_tag: RuleStatus,
    pub unused_tag: RuleStatus,
    pub duplicate_operation_id: RuleStatus,
    pub no_security_defined: RuleStatus,
    pub deprecated_operation_missing_sunset: RuleStatus,
}

impl Default for SharedOperations {
    fn default() -> Self {
        Self {
            no_operation_id: RuleStatus::Warning,
            operation_id_case_convention: CasedRule(
                RuleStatus::Warning,
                CaseConvention::LowerSnakeCase,
            ),
            no_summary: RuleStatus::Warning,
            no_array_responses: RuleStatus::Error,
            parameter_order: RuleStatus::Warning,
            undefined_tag: RuleStatus::Warning,
            unused_tag: RuleStatus::Warning,
            duplicate_operation_id: RuleStatus::Error,
            no_security_defined: RuleStatus::Info,
            deprecated_operation_missing_sunset: RuleStatus::Hint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedPagination {
    pub pagination_style: RuleStatus,
    pub missing_pagination_links: RuleStatus,
    pub page_limit_parameter: RuleStatus,
    pub offset_parameter_pair: RuleStatus,
}

impl Default for SharedPagination {
    fn default() -> Self {
        Self {
            pagination_style: RuleStatus::Warning,
            missing_pagination_links: RuleStatus::Hint,
            page_limit_parameter: RuleStatus::Warning,
            offset_parameter_pair: RuleStatus::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedParameters {
    pub no_parameter_description: RuleStatus,
    pub param_name_case_convention: CasedRule,
    pub invalid_type_format_pair: RuleStatus,
    pub content_type_parameter: RuleStatus,
    pub accept_type_parameter: RuleStatus,
    pub authorization_parameter: RuleStatus,
    pub required_param_has_default: RuleStatus,
    pub duplicate_parameter_name: RuleStatus,
}

impl Default for SharedParameters {
    fn default() -> Self {
        Self {
            no_parameter_description: RuleStatus::Error,
            param_name_case_convention: CasedRule(
                RuleStatus::Error,
                CaseConvention::LowerSnakeCase,
            ),
            invalid_type_format_pair: RuleStatus::Error,
            content_type_parameter: RuleStatus::Error,
            accept_type_parameter: RuleStatus::Error,
            authorization_parameter: RuleStatus::Warning,
            required_param_has_default: RuleStatus::Warning,
            duplicate_parameter_name: RuleStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedPaths {
    pub missing_path_parameter: RuleStatus,
    pub duplicate_path_parameter: RuleStatus,
    pub paths_case_convention: CasedRule,
    pub no_path_trailing_slash: RuleStatus,
    pub consecutive_path_slashes: RuleStatus,
    pub unused_path_parameter: RuleStatus,
}

impl Default for SharedPaths {
    fn default() -> Self {
        Self {
            missing_path_parameter: RuleStatus::Error,
            duplicate_path_parameter: RuleStatus::Warning,
            paths_case_convention: CasedRule(RuleStatus::Error, CaseConvention::LowerSnakeCase),
            no_path_trailing_slash: RuleStatus::Warning,
            consecutive_path_slashes: RuleStatus::Error,
            unused_path_parameter: RuleStatus::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedResponses {
    pub inline_response_schema: RuleStatus,
    pub no_success_response_code: RuleStatus,
    pub protocol_switching_and_success_code: RuleStatus,
    pub no_response_codes: RuleStatus,
    pub missing_error_response_description: RuleStatus,
    pub status_code_range: RuleStatus,
    pub error_response_schema: RuleStatus,
}

impl Default for SharedResponses {
    fn default() -> Self {
        Self {
            inline_response_schema: RuleStatus::Warning,
            no_success_response_code: RuleStatus::Warning,
            protocol_switching_and_success_code: RuleStatus::Error,
            no_response_codes: RuleStatus::Error,
            missing_error_response_description: RuleStatus::Info,
            status_code_range: RuleStatus::Warning,
            error_response_schema: RuleStatus::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedSchemas {
    pub invalid_type_format_pair: RuleStatus,
    pub no_schema_description: RuleStatus,
    pub no_property_description: RuleStatus,
    pub description_mentions_json: RuleStatus,
    pub array_of_arrays: RuleStatus,
    pub inconsistent_property_type: RuleStatus,
    pub property_case_convention: CasedRule,
    pub property_case_collision: RuleStatus,
    pub enum_case_convention: CasedRule,
    pub undefined_required_properties: RuleStatus,
    pub snake_case_only: RuleStatus,
    pub nullable_without_type: RuleStatus,
}

impl Default for SharedSchemas {
    fn default() -> Self {
        Self {
            invalid_type_format_pair: RuleStatus::Error,
            no_schema_description: RuleStatus::Warning,
            no_property_description: RuleStatus::Warning,
            description_mentions_json: RuleStatus::Warning,
            array_of_arrays: RuleStatus::Warning,
            inconsistent_property_type: RuleStatus::Warning,
            property_case_convention: CasedRule(
                RuleStatus::Error,
                CaseConvention::LowerSnakeCase,
            ),
            property_case_collision: RuleStatus::Error,
            enum_case_convention: CasedRule(RuleStatus::Error, CaseConvention::LowerSnakeCase),
            undefined_required_properties: RuleStatus::Warning,
            snake_case_only: RuleStatus::Off,
            nullable_without_type: RuleStatus::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedSecurityDefinitions {
    pub unused_security_schemes: RuleStatus,
    pub unused_security_scopes: RuleStatus,
    pub insecure_basic_auth: RuleStatus,
}

impl Default for SharedSecurityDefinitions {
    fn default() -> Self {
        Self {
            unused_security_schemes: RuleStatus::Warning,
            unused_security_scopes: RuleStatus::Warning,
            insecure_basic_auth: RuleStatus::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedSecurity {
    pub invalid_non_empty_security_array: RuleStatus,
    pub undefined_security_scheme: RuleStatus,
}

impl Default for SharedSecurity {
    fn default() -> Self {
        Self {
            invalid_non_empty_security_array: RuleStatus::Error,
            undefined_security_scheme: RuleStatus::Error,
        }
    }
}

/// Rules evaluated while walking the resolved document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedWalker {
    pub no_empty_descriptions: RuleStatus,
    pub has_circular_references: RuleStatus,
    pub ref_siblings: RuleStatus,
    pub duplicate_sibling_description: RuleStatus,
    pub incorrect_ref_pattern: RuleStatus,
}

impl Default for SharedWalker {
    fn default() -> Self {
        Self {
            no_empty_descriptions: RuleStatus::Error,
            has_circular_references: RuleStatus::Warning,
            ref_siblings: RuleStatus::Off,
            duplicate_sibling_description: RuleStatus::Hint,
            incorrect_ref_pattern: RuleStatus::Warning,
        }
    }
}

/// Rules specific to Swagger 2.0 documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swagger2Rules {
    pub operations: Swagger2Operations,
    pub parameters: Swagger2Parameters,
    pub responses: Swagger2Responses,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swagger2Operations {
    pub no_consumes_for_put_or_post: RuleStatus,
    pub get_op_has_consumes: RuleStatus,
    pub no_produces: RuleStatus,
    pub body_parameter_with_form_data: RuleStatus,
}

impl Default for Swagger2Operations {
    fn default() -> Self {
        Self {
            no_consumes_for_put_or_post: RuleStatus::Error,
            get_op_has_consumes: RuleStatus::Warning,
            no_produces: RuleStatus::Warning,
            body_parameter_with_form_data: RuleStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swagger2Parameters {
    pub collection_format_invalid_type: RuleStatus,
    pub file_type_outside_form_data: RuleStatus,
}

impl Default for Swagger2Parameters {
    fn default() -> Self {
        Self {
            collection_format_invalid_type: RuleStatus::Error,
            file_type_outside_form_data: RuleStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swagger2Responses {
    pub no_schema_for_success: RuleStatus,
}

impl Default for Swagger2Responses {
    fn default() -> Self {
        Self {
            no_schema_for_success: RuleStatus::Info,
        }
    }
}

/// Rules specific to OpenAPI 3.x documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Rules {
    pub operations: Oas3Operations,
    pub parameters: Oas3Parameters,
    pub responses: Oas3Responses,
    pub schemas: Oas3Schemas,
    pub security_definitions: Oas3SecurityDefinitions,
    pub servers: Oas3Servers,
    pub components: Oas3Components,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Operations {
    pub no_request_body_content: RuleStatus,
    pub no_request_body_name: RuleStatus,
    pub callbacks_missing_operation: RuleStatus,
}

impl Default for Oas3Operations {
    fn default() -> Self {
        Self {
            no_request_body_content: RuleStatus::Error,
            no_request_body_name: RuleStatus::Warning,
            callbacks_missing_operation: RuleStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Parameters {
    pub no_in_property: RuleStatus,
    pub invalid_in_property: RuleStatus,
    pub missing_schema_or_content: RuleStatus,
    pub has_schema_and_content: RuleStatus,
}

impl Default for Oas3Parameters {
    fn default() -> Self {
        Self {
            no_in_property: RuleStatus::Error,
            invalid_in_property: RuleStatus::Error,
            missing_schema_or_content: RuleStatus::Error,
            has_schema_and_content: RuleStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Responses {
    pub no_response_content: RuleStatus,
    pub missing_default_response: RuleStatus,
}

impl Default for Oas3Responses {
    fn default() -> Self {
        Self {
            no_response_content: RuleStatus::Warning,
            missing_default_response: RuleStatus::Hint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Schemas {
    pub json_or_param_binary_string: RuleStatus,
    pub nullable_requires_type: RuleStatus,
}

impl Default for Oas3Schemas {
    fn default() -> Self {
        Self {
            json_or_param_binary_string: RuleStatus::Warning,
            nullable_requires_type: RuleStatus::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3SecurityDefinitions {
    pub invalid_flow_type: RuleStatus,
    pub missing_token_url: RuleStatus,
    pub missing_authorization_url: RuleStatus,
    pub scopes_required_for_oauth2: RuleStatus,
}

impl Default for Oas3SecurityDefinitions {
    fn default() -> Self {
        Self {
            invalid_flow_type: RuleStatus::Error,
            missing_token_url: RuleStatus::Error,
            missing_authorization_url: RuleStatus::Error,
            scopes_required_for_oauth2: RuleStatus::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Servers {
    pub no_servers: RuleStatus,
    pub invalid_server_url_template: RuleStatus,
}

impl Default for Oas3Servers {
    fn default() -> Self {
        Self {
            no_servers: RuleStatus::Info,
            invalid_server_url_template: RuleStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oas3Components {
    pub unused_component: RuleStatus,
    pub component_name_case_convention: CasedRule,
}

impl Default for Oas3Components {
    fn default() -> Self {
        Self {
            unused_component: RuleStatus::Warning,
            component_name_case_convention: CasedRule(
                RuleStatus::Warning,
                CaseConvention::UpperCamelCase,
            ),
        }
    }
}

/// Settings forwarded verbatim to the declarative rule engine.
///
/// `rules` keys are that engine's rule identifiers; oaslint does not
/// validate them, matching the invariant that unknown rule names are the
/// engine's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleEngineScope {
    /// Named ruleset to extend; `None` uses the engine's built-in default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruleset: Option<String>,

    /// Per-rule status overrides.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleStatus>,
}
