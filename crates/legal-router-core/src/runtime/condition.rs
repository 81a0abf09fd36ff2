// crates/legal-router-core/src/runtime/condition.rs
// ============================================================================
// Module: Legal Router Condition Evaluation
// Description: Evaluates one field/operator/value condition against a record.
// Purpose: Provide the single comparison primitive shared by routing and coverage.
// Dependencies: crate::{core, interfaces}, bigdecimal
// ============================================================================

//! ## Overview
//! Conditions evaluate to a three-valued [`ConditionOutcome`]: satisfied,
//! unsatisfied, or unknown because the targeted field is absent. Strict
//! evaluation treats unknown as a failure; relaxed ("could match") evaluation
//! treats it as potentially satisfiable.
//!
//! String operators compare case-insensitively on the rendered values.
//! Ordering operators coerce both sides to decimals; a side that is not
//! numeric makes the comparison false. Unknown fields or operators never
//! match, in either mode.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;

use crate::core::Condition;
use crate::core::ConditionField;
use crate::core::ConditionOperator;
use crate::core::ConditionValue;
use crate::core::FieldValue;
use crate::core::Rule;
use crate::core::rule::parse_decimal;
use crate::interfaces::FieldSource;

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Three-valued result of evaluating one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionOutcome {
    /// The field is present and satisfies the condition.
    Satisfied,
    /// The field is present and fails the condition, or the condition is malformed.
    Unsatisfied,
    /// The field is absent.
    Unknown,
}

impl ConditionOutcome {
    /// Collapses the outcome to a boolean under the given mode.
    #[must_use]
    pub const fn holds(self, mode: MatchMode) -> bool {
        match self {
            Self::Satisfied => true,
            Self::Unsatisfied => false,
            Self::Unknown => matches!(mode, MatchMode::Relaxed),
        }
    }
}

impl From<bool> for ConditionOutcome {
    fn from(value: bool) -> Self {
        if value { Self::Satisfied } else { Self::Unsatisfied }
    }
}

/// How absent fields are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Absent fields never satisfy a condition.
    Strict,
    /// Absent fields are potentially satisfiable ("could match").
    Relaxed,
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates a condition against a record, distinguishing absent fields.
#[must_use]
pub fn evaluate_condition<S: FieldSource + ?Sized>(
    condition: &Condition,
    record: &S,
) -> ConditionOutcome {
    if condition.field == ConditionField::Unknown
        || condition.operator == ConditionOperator::Unknown
    {
        return ConditionOutcome::Unsatisfied;
    }
    let Some(actual) = record.field_value(condition.field) else {
        return ConditionOutcome::Unknown;
    };
    ConditionOutcome::from(compare(condition.operator, &actual, &condition.value))
}

/// Evaluates a condition to a boolean under `mode`.
#[must_use]
pub fn evaluate<S: FieldSource + ?Sized>(condition: &Condition, record: &S, mode: MatchMode) -> bool {
    evaluate_condition(condition, record).holds(mode)
}

/// Returns true when every condition of the rule holds under `mode`.
///
/// An empty condition list matches every record.
#[must_use]
pub fn rule_matches<S: FieldSource + ?Sized>(rule: &Rule, record: &S, mode: MatchMode) -> bool {
    rule.conditions.iter().all(|condition| evaluate(condition, record, mode))
}

// ============================================================================
// SECTION: Comparisons
// ============================================================================

/// Applies an operator to a present field value.
fn compare(operator: ConditionOperator, actual: &FieldValue<'_>, expected: &ConditionValue) -> bool {
    match operator {
        ConditionOperator::Equals => fold(&actual.render()) == fold(&expected.render()),
        ConditionOperator::NotEquals => fold(&actual.render()) != fold(&expected.render()),
        ConditionOperator::Contains => fold(&actual.render()).contains(&fold(&expected.render())),
        ConditionOperator::GreaterThan => {
            compare_numeric(actual, expected).is_some_and(std::cmp::Ordering::is_gt)
        }
        ConditionOperator::LessThan => {
            compare_numeric(actual, expected).is_some_and(std::cmp::Ordering::is_lt)
        }
        ConditionOperator::Unknown => false,
    }
}

/// Lowercases a value for case-insensitive comparison.
fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Orders the field value against the literal; `None` if either side is not numeric.
fn compare_numeric(
    actual: &FieldValue<'_>,
    expected: &ConditionValue,
) -> Option<std::cmp::Ordering> {
    let left = field_decimal(actual)?;
    let right = expected.to_decimal()?;
    Some(left.cmp(&right))
}

/// Coerces a field value to a decimal.
fn field_decimal(value: &FieldValue<'_>) -> Option<BigDecimal> {
    match value {
        FieldValue::Number(number) if number.is_finite() => parse_decimal(&value.render()),
        FieldValue::Number(_) => None,
        FieldValue::Text(text) => parse_decimal(text),
    }
}
