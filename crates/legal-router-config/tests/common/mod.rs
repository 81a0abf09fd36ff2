// crates/legal-router-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared TOML fixtures for legal-router-config tests.
// Purpose: Reduce duplication across config validation suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use legal_router_config::ConfigError;
use legal_router_config::RouterConfig;

/// Smallest config exercising every section.
pub const MINIMAL_TOML: &str = r#"
[taxonomy]
request_types = ["contracts", "nda"]
locations = ["australia", "canada"]

[clarification]
fallback = "Tell us more."

[clarification.questions]
location = "Which office is this for?"

[limits]
max_rules = 10

[audit]
enabled = true
path = "decisions.jsonl"
"#;

/// Parses and validates TOML text.
pub fn config_from_toml(content: &str) -> Result<RouterConfig, ConfigError> {
    RouterConfig::from_toml_str(content)
}

/// Returns the minimal valid config.
pub fn minimal_config() -> Result<RouterConfig, ConfigError> {
    config_from_toml(MINIMAL_TOML)
}

/// Checks that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
