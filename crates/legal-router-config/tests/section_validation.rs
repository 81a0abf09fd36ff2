//! Section validation tests for legal-router-config.
// crates/legal-router-config/tests/section_validation.rs
// =============================================================================
// Module: Config Section Validation Tests
// Description: Validate taxonomy, clarification, limits, and audit sections.
// Purpose: Ensure configuration fails closed and converts into engine types.
// =============================================================================

use legal_router_config::RouterConfig;
use legal_router_core::ConditionField;
use legal_router_core::Taxonomy;

mod common;

use common::assert_invalid;
use common::config_from_toml;

type TestResult = Result<(), String>;

// ============================================================================
// SECTION: Defaults and Conversion
// ============================================================================

#[test]
fn empty_document_yields_standard_defaults() -> TestResult {
    let config = config_from_toml("").map_err(|err| err.to_string())?;
    if config.taxonomy() != Taxonomy::standard() {
        return Err("default taxonomy should be the standard taxonomy".to_string());
    }
    let limits = config.rule_set_limits();
    if limits.max_rules != 1_000 || limits.max_conditions_per_rule != 32 {
        return Err(format!(
            "unexpected default limits: {} rules, {} conditions",
            limits.max_rules, limits.max_conditions_per_rule
        ));
    }
    if config.limits.max_input_bytes != 1024 * 1024 {
        return Err("default max_input_bytes should be 1 MiB".to_string());
    }
    if config.audit.enabled || config.engine_config().include_raw_text {
        return Err("audit must be disabled by default".to_string());
    }
    Ok(())
}

#[test]
fn minimal_config_converts_into_engine_types() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    let engine = config.engine_config();
    if engine.taxonomy.cell_count() != 4 {
        return Err(format!("expected 4 cells, got {}", engine.taxonomy.cell_count()));
    }
    if engine.clarification.question_for(ConditionField::Location) != "Which office is this for?" {
        return Err("location override not applied".to_string());
    }
    if engine.clarification.question_for(ConditionField::Unknown) != "Tell us more." {
        return Err("fallback override not applied".to_string());
    }
    if config.rule_set_limits().max_rules != 10 {
        return Err("max_rules override not applied".to_string());
    }
    Ok(())
}

#[test]
fn raw_text_requires_enabled_audit() -> TestResult {
    let config = config_from_toml("[audit]\ninclude_raw_text = true\n").map_err(|err| err.to_string())?;
    if config.engine_config().include_raw_text {
        return Err("raw text must stay redacted while audit is disabled".to_string());
    }
    let config = config_from_toml("[audit]\nenabled = true\npath = \"a.jsonl\"\ninclude_raw_text = true\n")
        .map_err(|err| err.to_string())?;
    if !config.engine_config().include_raw_text {
        return Err("raw text opt-in should be honoured".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Taxonomy
// ============================================================================

#[test]
fn taxonomy_rejects_empty_axis() -> TestResult {
    assert_invalid(config_from_toml("[taxonomy]\nlocations = []\n"), "taxonomy.locations must be non-empty")
}

#[test]
fn taxonomy_rejects_blank_entries() -> TestResult {
    assert_invalid(
        config_from_toml("[taxonomy]\nrequest_types = [\"nda\", \"  \"]\n"),
        "taxonomy.request_types entries must be non-empty",
    )
}

#[test]
fn taxonomy_rejects_duplicates_ignoring_case() -> TestResult {
    assert_invalid(
        config_from_toml("[taxonomy]\nlocations = [\"Canada\", \"canada\"]\n"),
        "taxonomy.locations contains duplicate entry",
    )
}

#[test]
fn taxonomy_rejects_too_many_entries() -> TestResult {
    let entries: Vec<String> = (0 .. 65).map(|index| format!("\"t{index}\"")).collect();
    let content = format!("[taxonomy]\nrequest_types = [{}]\n", entries.join(", "));
    assert_invalid(config_from_toml(&content), "taxonomy.request_types too many entries")
}

// ============================================================================
// SECTION: Clarification
// ============================================================================

#[test]
fn clarification_rejects_unknown_field_keys() -> TestResult {
    assert_invalid(
        config_from_toml("[clarification.questions]\nbudget = \"How much?\"\n"),
        "clarification.questions has unknown field: budget",
    )
}

#[test]
fn clarification_rejects_blank_questions() -> TestResult {
    assert_invalid(
        config_from_toml("[clarification.questions]\nurgency = \" \"\n"),
        "clarification.questions.urgency must be non-empty",
    )?;
    assert_invalid(config_from_toml("[clarification]\nfallback = \"\"\n"), "clarification.fallback must be non-empty")
}

// ============================================================================
// SECTION: Limits and Audit
// ============================================================================

#[test]
fn limits_reject_zero_values() -> TestResult {
    assert_invalid(config_from_toml("[limits]\nmax_rules = 0\n"), "limits.max_rules must be greater than zero")?;
    assert_invalid(
        config_from_toml("[limits]\nmax_conditions_per_rule = 0\n"),
        "limits.max_conditions_per_rule must be greater than zero",
    )?;
    assert_invalid(
        config_from_toml("[limits]\nmax_input_bytes = 0\n"),
        "limits.max_input_bytes must be greater than zero",
    )
}

#[test]
fn enabled_audit_requires_path() -> TestResult {
    assert_invalid(config_from_toml("[audit]\nenabled = true\n"), "audit.path required when audit is enabled")?;
    assert_invalid(config_from_toml("[audit]\nenabled = true\npath = \"  \"\n"), "audit.path must be non-empty")
}

#[test]
fn type_errors_are_parse_errors() -> TestResult {
    assert_invalid(config_from_toml("[limits]\nmax_rules = \"many\"\n"), "config parse error")
}

#[test]
fn validate_can_be_rerun_after_mutation() -> TestResult {
    let mut config: RouterConfig = common::minimal_config().map_err(|err| err.to_string())?;
    config.taxonomy.request_types.clear();
    assert_invalid(config.validate(), "taxonomy.request_types must be non-empty")
}
