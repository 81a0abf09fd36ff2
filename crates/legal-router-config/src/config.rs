// crates/legal-router-config/src/config.rs
// ============================================================================
// Module: Legal Router Configuration
// Description: Configuration loading and validation for Legal Router.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: legal-router-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; an absent default config file yields the
//! built-in defaults, while an explicitly named file must exist.
//! Invalid configuration fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use legal_router_core::ClarificationCatalog;
use legal_router_core::ConditionField;
use legal_router_core::EngineConfig;
use legal_router_core::RuleSetLimits;
use legal_router_core::STANDARD_LOCATIONS;
use legal_router_core::STANDARD_REQUEST_TYPES;
use legal_router_core::Taxonomy;
use legal_router_core::core::rule::DEFAULT_MAX_CONDITIONS_PER_RULE;
use legal_router_core::core::rule::DEFAULT_MAX_RULES;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "legal-router.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "LEGAL_ROUTER_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum entries on one taxonomy axis.
pub const MAX_TAXONOMY_ENTRIES: usize = 64;
/// Maximum length of one taxonomy entry.
pub(crate) const MAX_TAXONOMY_ENTRY_LENGTH: usize = 128;
/// Maximum length of a clarification prompt.
pub(crate) const MAX_QUESTION_LENGTH: usize = 1024;
/// Default maximum size of a CLI input document in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Legal Router configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouterConfig {
    /// Coverage matrix axes.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    /// Clarification prompt overrides.
    #[serde(default)]
    pub clarification: ClarificationConfig,
    /// Input and rule-set limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Decision audit log settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl RouterConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved.path)?;
        if !resolved.required && !resolved.path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved.path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.taxonomy.validate()?;
        self.clarification.validate()?;
        self.limits.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the configured coverage taxonomy.
    #[must_use]
    pub fn taxonomy(&self) -> Taxonomy {
        Taxonomy::new(
            self.taxonomy.request_types.iter().map(|entry| entry.trim()),
            self.taxonomy.locations.iter().map(|entry| entry.trim()),
        )
    }

    /// Returns the clarification catalog with configured overrides applied.
    #[must_use]
    pub fn clarification_catalog(&self) -> ClarificationCatalog {
        let mut catalog = ClarificationCatalog::new();
        for (name, question) in &self.clarification.questions {
            if let Some(field) = ConditionField::parse(name) {
                catalog = catalog.with_question(field, question.trim());
            }
        }
        if let Some(fallback) = &self.clarification.fallback {
            catalog = catalog.with_fallback(fallback.trim());
        }
        catalog
    }

    /// Returns the rule-set validation limits.
    #[must_use]
    pub const fn rule_set_limits(&self) -> RuleSetLimits {
        RuleSetLimits {
            max_rules: self.limits.max_rules,
            max_conditions_per_rule: self.limits.max_conditions_per_rule,
        }
    }

    /// Returns the engine configuration derived from this config.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            taxonomy: self.taxonomy(),
            clarification: self.clarification_catalog(),
            include_raw_text: self.audit.enabled && self.audit.include_raw_text,
        }
    }
}

// ============================================================================
// SECTION: Taxonomy
// ============================================================================

/// Coverage matrix axes.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyConfig {
    /// Request-type axis.
    #[serde(default = "default_request_types")]
    pub request_types: Vec<String>,
    /// Location axis.
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            request_types: default_request_types(),
            locations: default_locations(),
        }
    }
}

impl TaxonomyConfig {
    /// Validates both taxonomy axes.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_axis("taxonomy.request_types", &self.request_types)?;
        validate_axis("taxonomy.locations", &self.locations)
    }
}

/// Validates one axis: non-empty, bounded, no blanks, case-insensitively unique.
fn validate_axis(field: &str, entries: &[String]) -> Result<(), ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if entries.len() > MAX_TAXONOMY_ENTRIES {
        return Err(ConfigError::Invalid(format!("{field} too many entries")));
    }
    let mut seen = BTreeSet::new();
    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid(format!("{field} entries must be non-empty")));
        }
        if trimmed.len() > MAX_TAXONOMY_ENTRY_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} entry exceeds max length")));
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(ConfigError::Invalid(format!("{field} contains duplicate entry: {trimmed}")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Clarification
// ============================================================================

/// Clarification prompt overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClarificationConfig {
    /// Prompt overrides keyed by field wire name (`requestType`, `location`, ...).
    #[serde(default)]
    pub questions: BTreeMap<String, String>,
    /// Prompt for fields without a dedicated question.
    #[serde(default)]
    pub fallback: Option<String>,
}

impl ClarificationConfig {
    /// Validates prompt keys and text.
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, question) in &self.questions {
            if ConditionField::parse(name).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "clarification.questions has unknown field: {name}"
                )));
            }
            validate_question(&format!("clarification.questions.{name}"), question)?;
        }
        if let Some(fallback) = &self.fallback {
            validate_question("clarification.fallback", fallback)?;
        }
        Ok(())
    }
}

/// Validates one prompt string.
fn validate_question(field: &str, question: &str) -> Result<(), ConfigError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_QUESTION_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Input and rule-set limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum rules in a loaded rule set.
    #[serde(default = "default_max_rules")]
    pub max_rules: usize,
    /// Maximum conditions in one rule.
    #[serde(default = "default_max_conditions_per_rule")]
    pub max_conditions_per_rule: usize,
    /// Maximum size of an input document in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rules: default_max_rules(),
            max_conditions_per_rule: default_max_conditions_per_rule(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl LimitsConfig {
    /// Validates limit values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rules == 0 {
            return Err(ConfigError::Invalid("limits.max_rules must be greater than zero".to_string()));
        }
        if self.max_conditions_per_rule == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_conditions_per_rule must be greater than zero".to_string(),
            ));
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Decision audit log settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Whether routing and coverage events are logged.
    #[serde(default)]
    pub enabled: bool,
    /// JSON-lines log file path.
    #[serde(default)]
    pub path: Option<String>,
    /// Whether events carry the conversation text.
    #[serde(default)]
    pub include_raw_text: bool,
}

impl AuditConfig {
    /// Validates audit settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (&self.path, self.enabled) {
            (Some(path), _) => validate_path_string("audit.path", path),
            (None, true) => Err(ConfigError::Invalid("audit.path required when audit is enabled".to_string())),
            (None, false) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Config path plus whether its absence is an error.
struct ResolvedPath {
    /// Path to read.
    path: PathBuf,
    /// True when the path was named explicitly (CLI or environment).
    required: bool,
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<ResolvedPath, ConfigError> {
    if let Some(path) = path {
        return Ok(ResolvedPath {
            path: path.to_path_buf(),
            required: true,
        });
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath {
            path: PathBuf::from(env_path),
            required: true,
        });
    }
    Ok(ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        required: false,
    })
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default request-type axis.
fn default_request_types() -> Vec<String> {
    STANDARD_REQUEST_TYPES.iter().map(|entry| (*entry).to_string()).collect()
}

/// Default location axis.
fn default_locations() -> Vec<String> {
    STANDARD_LOCATIONS.iter().map(|entry| (*entry).to_string()).collect()
}

/// Default maximum rule count.
const fn default_max_rules() -> usize {
    DEFAULT_MAX_RULES
}

/// Default maximum conditions per rule.
const fn default_max_conditions_per_rule() -> usize {
    DEFAULT_MAX_CONDITIONS_PER_RULE
}

/// Default maximum input document size.
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

// ============================================================================
// SECTION: Tests
// ============================================================================
