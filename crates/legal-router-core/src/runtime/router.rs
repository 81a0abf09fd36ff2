// crates/legal-router-core/src/runtime/router.rs
// ============================================================================
// Module: Legal Router Rule Matching
// Description: Selects a rule for an extracted-info record or asks for more detail.
// Purpose: Turn one conversation turn's extracted fields into a routing decision.
// Dependencies: crate::{core, runtime::{clarification, condition, confidence}}
// ============================================================================

//! ## Overview
//! Routing works on "potential matches": enabled rules that do not contradict
//! any field already known. Absent fields are treated as satisfiable.
//!
//! - No potential match: fallback decision.
//! - One potential match: commit to it, even if some of its fields are still
//!   unknown, since it is the only reachable outcome.
//! - Several: ask about the unset fields the candidates condition on. When no
//!   such field remains, pick the candidate with the lowest priority value.
//!
//! The lowest-priority tie-break is established behaviour that downstream
//! routing relies on, even though evaluation order is highest priority first.
//! Candidates that differ only on fields that are already known can never be
//! separated by clarification, and candidates whose differences lie in
//! thresholds on an unset field keep asking for that field on every turn.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ConditionField;
use crate::core::ExtractedInfo;
use crate::core::RoutingDecision;
use crate::core::Rule;
use crate::runtime::clarification::ClarificationCatalog;
use crate::runtime::condition::MatchMode;
use crate::runtime::condition::rule_matches;
use crate::runtime::confidence::CLARIFICATION_CONFIDENCE;
use crate::runtime::confidence::FALLBACK_CONFIDENCE;
use crate::runtime::confidence::TIE_BREAK_CONFIDENCE;
use crate::runtime::confidence::calculate_confidence;

// ============================================================================
// SECTION: Routing
// ============================================================================

/// Routes a record against a rule snapshot.
#[must_use]
pub fn route_with(
    info: &ExtractedInfo,
    rules: &[Rule],
    catalog: &ClarificationCatalog,
) -> RoutingDecision {
    let candidates = potential_matches(info, rules);
    match candidates.as_slice() {
        [] => fallback(info),
        [only] => commit(info, only),
        _ => disambiguate(info, &candidates, catalog),
    }
}

/// Enabled rules sorted by priority descending; ties keep input order.
#[must_use]
pub fn prioritized(rules: &[Rule]) -> Vec<&Rule> {
    let mut ordered: Vec<&Rule> = rules.iter().filter(|rule| rule.enabled).collect();
    ordered.sort_by(|left, right| right.priority.cmp(&left.priority));
    ordered
}

/// Enabled rules that could still match the record, in priority order.
#[must_use]
pub fn potential_matches<'a>(info: &ExtractedInfo, rules: &'a [Rule]) -> Vec<&'a Rule> {
    prioritized(rules)
        .into_iter()
        .filter(|rule| rule_matches(*rule, info, MatchMode::Relaxed))
        .collect()
}

/// Unset fields the candidates condition on, in first-seen order.
#[must_use]
pub fn differentiating_fields(info: &ExtractedInfo, candidates: &[&Rule]) -> Vec<ConditionField> {
    let mut fields = Vec::new();
    for rule in candidates {
        for condition in &rule.conditions {
            let field = condition.field;
            if field != ConditionField::Unknown && !info.has_field(field) && !fields.contains(&field)
            {
                fields.push(field);
            }
        }
    }
    fields
}

// ============================================================================
// SECTION: Decisions
// ============================================================================

/// Decision when no rule could apply.
fn fallback(info: &ExtractedInfo) -> RoutingDecision {
    RoutingDecision {
        matched: false,
        assign_to: None,
        confidence: FALLBACK_CONFIDENCE,
        matched_rule: None,
        extracted_info: info.clone(),
        reasoning: "No routing rule applies to this request; it should go to general legal \
                    triage."
            .to_string(),
        needs_clarification: None,
    }
}

/// Decision committing to the only reachable rule.
fn commit(info: &ExtractedInfo, rule: &Rule) -> RoutingDecision {
    let reasoning = match &rule.description {
        Some(description) => format!(
            "Matched rule \"{}\" (priority {}): {}",
            rule.name, rule.priority, description
        ),
        None => format!("Matched rule \"{}\" (priority {}).", rule.name, rule.priority),
    };
    RoutingDecision {
        matched: true,
        assign_to: Some(rule.action.assign_to.clone()),
        confidence: calculate_confidence(info, true),
        matched_rule: Some(rule.clone()),
        extracted_info: info.clone(),
        reasoning,
        needs_clarification: None,
    }
}

/// Decision for several potential matches.
fn disambiguate(
    info: &ExtractedInfo,
    candidates: &[&Rule],
    catalog: &ClarificationCatalog,
) -> RoutingDecision {
    let fields = differentiating_fields(info, candidates);
    if !fields.is_empty() {
        let labels: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
        return RoutingDecision {
            matched: false,
            assign_to: None,
            confidence: CLARIFICATION_CONFIDENCE,
            matched_rule: None,
            extracted_info: info.clone(),
            reasoning: format!(
                "{} rules could apply; more information is needed about: {}.",
                candidates.len(),
                labels.join(", ")
            ),
            needs_clarification: Some(catalog.clarify(fields)),
        };
    }

    // min_by_key keeps the first of equal minima, so input order breaks exact ties.
    let Some(chosen) = candidates.iter().min_by_key(|rule| rule.priority) else {
        return fallback(info);
    };
    RoutingDecision {
        matched: true,
        assign_to: Some(chosen.action.assign_to.clone()),
        confidence: TIE_BREAK_CONFIDENCE,
        matched_rule: Some((*chosen).clone()),
        extracted_info: info.clone(),
        reasoning: format!(
            "{} similar rules apply and no further detail would separate them; selected \"{}\" \
             (priority {}).",
            candidates.len(),
            chosen.name,
            chosen.priority
        ),
        needs_clarification: None,
    }
}
