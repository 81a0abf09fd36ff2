// crates/legal-router-core/src/core/decision.rs
// ============================================================================
// Module: Legal Router Decisions
// Description: Routing decisions and single-rule diagnostic results.
// Purpose: Define the pure output values returned by the router.
// Dependencies: crate::core::{extracted, identifiers, rule}, serde
// ============================================================================

//! ## Overview
//! A [`RoutingDecision`] is either a match (with an assignee), a request for
//! clarification (with the fields worth asking about), or a fallback. The
//! `reasoning` string is informational only; callers branch on the typed
//! fields or on [`RoutingDecision::outcome`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::extracted::ExtractedInfo;
use crate::core::identifiers::Assignee;
use crate::core::rule::Condition;
use crate::core::rule::ConditionField;
use crate::core::rule::Rule;

// ============================================================================
// SECTION: Routing Decision
// ============================================================================

/// Fields the router needs before it can commit, with matching prompts.
///
/// # Invariants
/// - `questions[i]` asks for `missing_fields[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clarification {
    /// Unset fields that would narrow the candidate rules.
    pub missing_fields: Vec<ConditionField>,
    /// One prompt per missing field.
    pub questions: Vec<String>,
}

/// Router output for one extracted-info record.
///
/// # Invariants
/// - `matched` implies `assign_to` and `matched_rule` are set.
/// - `needs_clarification` is only set when `matched` is false.
/// - `confidence` is within `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    /// Whether a rule was selected.
    pub matched: bool,
    /// Assignee of the selected rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_to: Option<Assignee>,
    /// Confidence score (0-100).
    pub confidence: u8,
    /// Selected rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<Rule>,
    /// Input the decision was made for.
    pub extracted_info: ExtractedInfo,
    /// Human-readable explanation.
    pub reasoning: String,
    /// Clarification request when more information would disambiguate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_clarification: Option<Clarification>,
}

impl RoutingDecision {
    /// Classifies the decision.
    #[must_use]
    pub const fn outcome(&self) -> RoutingOutcome {
        if self.matched {
            RoutingOutcome::Matched
        } else if self.needs_clarification.is_some() {
            RoutingOutcome::Clarification
        } else {
            RoutingOutcome::Fallback
        }
    }
}

/// Coarse classification of a [`RoutingDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingOutcome {
    /// A rule was selected.
    Matched,
    /// The caller should ask follow-up questions.
    Clarification,
    /// No rule applies.
    Fallback,
}

// ============================================================================
// SECTION: Rule Diagnostics
// ============================================================================

/// Why a single condition failed under strict evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The targeted field has no value.
    MissingField,
    /// The field has a value that does not satisfy the condition.
    NotSatisfied,
    /// The condition cannot be evaluated (unknown field or operator).
    Unsupported,
}

/// Failed condition reported by a rule test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionFailure {
    /// Zero-based index of the condition within the rule.
    pub index: usize,
    /// Failing condition.
    pub condition: Condition,
    /// Failure classification.
    pub kind: FailureKind,
    /// Rendered field value when one was present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

/// Result of strictly testing one rule against one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTestResult {
    /// Whether every condition held.
    pub matches: bool,
    /// Human-readable explanation.
    pub reason: String,
    /// Conditions that failed, in rule order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ConditionFailure>,
}
