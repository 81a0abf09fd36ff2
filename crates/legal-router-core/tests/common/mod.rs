// crates/legal-router-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared rule and request fixtures for core integration tests.
// Purpose: Reduce duplication across legal-router-core test suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use legal_router_core::Condition;
use legal_router_core::ConditionField;
use legal_router_core::ConditionOperator;
use legal_router_core::ExtractedInfo;
use legal_router_core::Rule;
use legal_router_core::Taxonomy;

/// Builds an enabled rule routing to `assign_to` with `equals` conditions.
pub fn rule(id: &str, priority: i64, assign_to: &str, conditions: &[(ConditionField, &str)]) -> Rule {
    let mut rule = Rule::new(id, format!("Rule {id}"), assign_to).with_priority(priority);
    for (field, value) in conditions {
        rule = rule.with_condition(Condition::equals(*field, *value));
    }
    rule
}

/// Builds a condition with an explicit operator.
pub fn condition(field: ConditionField, operator: ConditionOperator, value: &str) -> Condition {
    Condition::new(field, operator, value)
}

/// Record with request type and location set.
pub fn info(request_type: &str, location: &str) -> ExtractedInfo {
    ExtractedInfo::new(format!("I need help with {request_type} in {location}"))
        .with_request_type(request_type)
        .with_location(location)
}

/// Record with only the request type set.
pub fn info_request_type(request_type: &str) -> ExtractedInfo {
    ExtractedInfo::new(format!("I need help with {request_type}")).with_request_type(request_type)
}

/// Small taxonomy for matrix tests (3 request types x 2 locations).
pub fn small_taxonomy() -> Taxonomy {
    Taxonomy::new(["contracts", "nda", "employment"], ["australia", "canada"])
}
