// crates/legal-router-core/src/runtime/diagnostics.rs
// ============================================================================
// Module: Legal Router Rule Diagnostics
// Description: Strict single-rule test used by the admin "test this rule" action.
// Purpose: Explain exactly which conditions of a rule fail for a sample request.
// Dependencies: crate::{core, interfaces, runtime::condition}
// ============================================================================

//! ## Overview
//! Unlike routing, a rule test never treats absent fields as satisfiable:
//! every condition must hold on the supplied record. Each failing condition
//! is reported with the reason it failed. A disabled rule is still evaluated
//! so its failures are visible, but it never matches.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ConditionFailure;
use crate::core::ConditionField;
use crate::core::ConditionOperator;
use crate::core::ExtractedInfo;
use crate::core::FailureKind;
use crate::core::Rule;
use crate::core::RuleTestResult;
use crate::interfaces::FieldSource;
use crate::runtime::condition::ConditionOutcome;
use crate::runtime::condition::evaluate_condition;

// ============================================================================
// SECTION: Rule Test
// ============================================================================

/// Tests one rule against a record using strict evaluation.
#[must_use]
pub fn test_rule(rule: &Rule, info: &ExtractedInfo) -> RuleTestResult {
    let failures: Vec<ConditionFailure> = rule
        .conditions
        .iter()
        .enumerate()
        .filter_map(|(index, condition)| {
            let kind = match evaluate_condition(condition, info) {
                ConditionOutcome::Satisfied => return None,
                ConditionOutcome::Unknown => FailureKind::MissingField,
                ConditionOutcome::Unsatisfied
                    if condition.field == ConditionField::Unknown
                        || condition.operator == ConditionOperator::Unknown =>
                {
                    FailureKind::Unsupported
                }
                ConditionOutcome::Unsatisfied => FailureKind::NotSatisfied,
            };
            Some(ConditionFailure {
                index,
                condition: condition.clone(),
                kind,
                actual: info.field_value(condition.field).map(|value| value.render().into_owned()),
            })
        })
        .collect();

    if !rule.enabled {
        let reason = if failures.is_empty() {
            format!(
                "Rule \"{}\" is disabled and never matches; its conditions would otherwise be satisfied.",
                rule.name
            )
        } else {
            let details: Vec<String> = failures.iter().map(describe_failure).collect();
            format!("Rule \"{}\" is disabled and never matches; also: {}.", rule.name, details.join("; "))
        };
        return RuleTestResult {
            matches: false,
            reason,
            failures,
        };
    }

    if failures.is_empty() {
        let reason = if rule.conditions.is_empty() {
            format!("Rule \"{}\" has no conditions and matches every request.", rule.name)
        } else {
            format!("All {} conditions of rule \"{}\" are satisfied.", rule.conditions.len(), rule.name)
        };
        return RuleTestResult {
            matches: true,
            reason,
            failures,
        };
    }

    let details: Vec<String> = failures.iter().map(describe_failure).collect();
    RuleTestResult {
        matches: false,
        reason: format!("Rule \"{}\" does not match: {}.", rule.name, details.join("; ")),
        failures,
    }
}

/// Renders one failure for the summary reason.
fn describe_failure(failure: &ConditionFailure) -> String {
    let condition = &failure.condition;
    match failure.kind {
        FailureKind::MissingField => format!("{} is not provided (needs {condition})", condition.field),
        FailureKind::NotSatisfied => format!(
            "{} is \"{}\" (needs {condition})",
            condition.field,
            failure.actual.as_deref().unwrap_or_default()
        ),
        FailureKind::Unsupported => {
            format!("condition {} uses an unsupported field or operator", failure.index)
        }
    }
}
