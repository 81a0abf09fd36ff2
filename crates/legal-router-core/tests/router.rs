// crates/legal-router-core/tests/router.rs
// ============================================================================
// Module: Router Tests
// Description: Match, clarification, fallback, and tie-break routing paths.
// Purpose: Pin routing decisions for the documented request scenarios.
// Dependencies: legal-router-core
// ============================================================================
//! ## Overview
//! Covers the single-match, ambiguity, no-match, and tie-break scenarios plus
//! confidence scoring and disabled-rule handling.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use common::condition;
use common::info;
use common::info_request_type;
use common::rule;
use legal_router_core::Assignee;
use legal_router_core::ClarificationCatalog;
use legal_router_core::ConditionField;
use legal_router_core::ConditionOperator;
use legal_router_core::ExtractedInfo;
use legal_router_core::Rule;
use legal_router_core::RoutingOutcome;
use legal_router_core::RuleId;
use legal_router_core::route;
use legal_router_core::route_with;
use legal_router_core::runtime::calculate_confidence;
use legal_router_core::runtime::clarification::GENERIC_QUESTION;
use legal_router_core::runtime::potential_matches;

use ConditionField::Location;
use ConditionField::RequestType;

// ============================================================================
// SECTION: Scenarios
// ============================================================================

#[test]
fn single_clean_match_routes_to_assignee() {
    let rules = vec![rule("r1", 1, "jane@acme.corp", &[(RequestType, "contracts"), (Location, "australia")])];
    let decision = route(&info("contracts", "australia"), &rules);

    assert!(decision.matched);
    assert_eq!(decision.assign_to, Some(Assignee::new("jane@acme.corp")));
    assert_eq!(decision.matched_rule.as_ref().map(|rule| rule.id.clone()), Some(RuleId::new("r1")));
    assert_eq!(decision.confidence, 98);
    assert_eq!(decision.outcome(), RoutingOutcome::Matched);
    assert!(decision.needs_clarification.is_none());
}

#[test]
fn ambiguity_asks_for_the_differentiating_field() {
    let rules = vec![
        rule("general", 0, "a@acme.corp", &[(RequestType, "contracts")]),
        rule("aus", 0, "b@acme.corp", &[(RequestType, "contracts"), (Location, "australia")]),
    ];
    let decision = route(&info_request_type("contracts"), &rules);

    assert!(!decision.matched);
    assert_eq!(decision.confidence, 30);
    assert!(decision.assign_to.is_none());
    let clarification = decision.needs_clarification.expect("clarification");
    assert_eq!(clarification.missing_fields, vec![Location]);
    assert_eq!(clarification.questions.len(), 1);
    assert!(clarification.questions[0].contains("country or region"));
}

#[test]
fn no_potential_match_falls_back() {
    let rules = vec![rule("nda", 0, "n@acme.corp", &[(RequestType, "nda")])];
    let decision = route(&info("contracts", "other"), &rules);

    assert!(!decision.matched);
    assert_eq!(decision.confidence, 20);
    assert!(decision.matched_rule.is_none());
    assert!(decision.needs_clarification.is_none());
    assert_eq!(decision.outcome(), RoutingOutcome::Fallback);
    assert!(!decision.reasoning.is_empty());
}

/// Unresolvable ambiguity picks the LOWEST priority value. This mirrors the
/// established routing behaviour; do not flip it to highest-priority without
/// revisiting every deployed rule set.
#[test]
fn unresolvable_ambiguity_selects_lowest_priority_value() {
    let conditions = [(RequestType, "contracts"), (Location, "australia")];
    let rules = vec![
        rule("high", 10, "high@acme.corp", &conditions),
        rule("low", 1, "low@acme.corp", &conditions),
    ];
    let decision = route(&info("contracts", "australia"), &rules);

    assert!(decision.matched);
    assert_eq!(decision.confidence, 35);
    assert_eq!(decision.assign_to, Some(Assignee::new("low@acme.corp")));
    assert!(decision.reasoning.contains("Rule low"));
}

#[test]
fn exact_priority_ties_keep_input_order() {
    let conditions = [(RequestType, "contracts")];
    let rules = vec![
        rule("first", 5, "first@acme.corp", &conditions),
        rule("second", 5, "second@acme.corp", &conditions),
    ];
    let decision = route(&info("contracts", "canada"), &rules);
    assert_eq!(decision.assign_to, Some(Assignee::new("first@acme.corp")));
}

// ============================================================================
// SECTION: Potential Matches
// ============================================================================

#[test]
fn single_potential_match_commits_before_all_fields_are_known() {
    let rules = vec![
        rule("aus", 3, "aus@acme.corp", &[(RequestType, "contracts"), (Location, "australia")]),
        rule("nda", 2, "nda@acme.corp", &[(RequestType, "nda")]),
    ];
    let decision = route(&info_request_type("contracts"), &rules);

    assert!(decision.matched);
    assert_eq!(decision.assign_to, Some(Assignee::new("aus@acme.corp")));
    // request type known, location unknown: 50 + 20, then +20 for the match.
    assert_eq!(decision.confidence, 90);
}

#[test]
fn committed_reasoning_names_priority_and_description() {
    let rules = vec![
        rule("emp", 4, "people@acme.corp", &[(RequestType, "employment")])
            .with_description("Employment matters go to the people team"),
    ];
    let decision = route(&info_request_type("employment"), &rules);

    assert!(decision.matched);
    assert!(decision.reasoning.contains("priority 4"));
    assert!(decision.reasoning.contains("Employment matters go to the people team"));

    let undescribed = vec![rule("emp", 4, "people@acme.corp", &[(RequestType, "employment")])];
    let decision = route(&info_request_type("employment"), &undescribed);
    assert!(decision.reasoning.ends_with("(priority 4)."));
}

#[test]
fn empty_condition_rule_matches_any_input() {
    let rules = vec![Rule::new("catch-all", "Catch all", "desk@acme.corp")];
    for input in [ExtractedInfo::new("anything"), info("nda", "canada")] {
        let decision = route(&input, &rules);
        assert!(decision.matched);
        assert_eq!(decision.assign_to, Some(Assignee::new("desk@acme.corp")));
    }
}

#[test]
fn disabled_rules_are_never_candidates() {
    let rules = vec![
        rule("off", 9, "off@acme.corp", &[(RequestType, "contracts")]).with_enabled(false),
        rule("on", 1, "on@acme.corp", &[(RequestType, "contracts")]),
    ];
    let input = info("contracts", "australia");
    let candidates = potential_matches(&input, &rules);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, RuleId::new("on"));

    let decision = route(&input, &rules);
    assert_eq!(decision.assign_to, Some(Assignee::new("on@acme.corp")));
}

#[test]
fn candidates_are_ordered_by_priority_descending() {
    let rules = vec![
        rule("low", 1, "low@acme.corp", &[]),
        rule("high", 7, "high@acme.corp", &[]),
        rule("mid", 4, "mid@acme.corp", &[]),
    ];
    let input = ExtractedInfo::new("");
    let ids: Vec<&str> = potential_matches(&input, &rules).iter().map(|rule| rule.id.as_str()).collect();
    assert_eq!(ids, vec!["high", "mid", "low"]);
}

#[test]
fn empty_rule_set_falls_back() {
    let decision = route(&info("contracts", "australia"), &[]);
    assert_eq!(decision.outcome(), RoutingOutcome::Fallback);
    assert_eq!(decision.confidence, 20);
}

// ============================================================================
// SECTION: Clarification Edge Cases
// ============================================================================

#[test]
fn threshold_rules_keep_asking_for_the_same_field() {
    let big = rule("big", 2, "big@acme.corp", &[(RequestType, "contracts")]).with_condition(condition(
        ConditionField::Value,
        ConditionOperator::GreaterThan,
        "100000",
    ));
    let small = rule("small", 1, "small@acme.corp", &[(RequestType, "contracts")]).with_condition(
        condition(ConditionField::Value, ConditionOperator::GreaterThan, "50000"),
    );
    let rules = vec![big, small];
    let input = info("contracts", "australia");

    let first = route(&input, &rules);
    let second = route(&input, &rules);
    assert_eq!(first, second);
    assert_eq!(first.needs_clarification.as_ref().map(|c| c.missing_fields.clone()), Some(vec![ConditionField::Value]));

    // Once the value satisfies both thresholds nothing differentiates them.
    let resolved = route(&input.clone().with_value(200_000.0), &rules);
    assert!(resolved.matched);
    assert_eq!(resolved.assign_to, Some(Assignee::new("small@acme.corp")));
}

#[test]
fn missing_fields_are_deduplicated_in_first_seen_order() {
    let rules = vec![
        rule("a", 3, "a@acme.corp", &[(Location, "australia"), (RequestType, "contracts")]),
        rule("b", 2, "b@acme.corp", &[(RequestType, "nda"), (Location, "canada")]),
    ];
    let decision = route(&ExtractedInfo::new("help"), &rules);
    let clarification = decision.needs_clarification.expect("clarification");
    assert_eq!(clarification.missing_fields, vec![Location, RequestType]);
    assert_eq!(clarification.questions.len(), 2);
}

#[test]
fn catalog_overrides_and_fallback_prompts_are_used() {
    let rules = vec![
        rule("a", 1, "a@acme.corp", &[(RequestType, "contracts")]),
        rule("b", 1, "b@acme.corp", &[(RequestType, "nda")]),
    ];
    let catalog = ClarificationCatalog::new().with_question(RequestType, "Contract or NDA?");
    let decision = route_with(&ExtractedInfo::new("help"), &rules, &catalog);
    let clarification = decision.needs_clarification.expect("clarification");
    assert_eq!(clarification.questions, vec!["Contract or NDA?".to_string()]);
    assert_eq!(catalog.question_for(ConditionField::Unknown), GENERIC_QUESTION);
}

// ============================================================================
// SECTION: Confidence
// ============================================================================

#[test]
fn confidence_follows_field_bonuses_and_caps() {
    let empty = ExtractedInfo::new("");
    assert_eq!(calculate_confidence(&empty, true), 70);
    assert_eq!(calculate_confidence(&empty, false), 20);

    let partial = ExtractedInfo::new("").with_value(10.0).with_department("legal");
    assert_eq!(calculate_confidence(&partial, true), 80);
    assert_eq!(calculate_confidence(&partial, false), 30);

    let full = info("contracts", "australia").with_value(1.0).with_department("sales");
    assert_eq!(calculate_confidence(&full, true), 98);
    assert_eq!(calculate_confidence(&full, false), 70);
}

#[test]
fn routing_does_not_mutate_rules() {
    let rules = vec![rule("r1", 1, "jane@acme.corp", &[(RequestType, "contracts")])];
    let before = rules.clone();
    let _ = route(&info("contracts", "australia"), &rules);
    assert_eq!(rules, before);
}
