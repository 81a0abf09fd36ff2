// crates/legal-router-cli/tests/audit_log.rs
// ============================================================================
// Module: Decision Log Tests
// Description: JSONL decision log behaviour through the routing engine.
// Purpose: Ensure each decision lands as one parseable JSON line.
// Dependencies: legal-router-cli, legal-router-core, serde_json, tempfile
// ============================================================================
//! ## Overview
//! Routes and analyzes through a real engine backed by a temporary log file.

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

use std::fs;
use std::sync::Arc;

use legal_router_cli::audit::JsonlDecisionLog;
use legal_router_core::Condition;
use legal_router_core::ConditionField;
use legal_router_core::EngineConfig;
use legal_router_core::ExtractedInfo;
use legal_router_core::Rule;
use legal_router_core::RoutingEngine;

fn nda_rule() -> Rule {
    let mut rule = Rule::new("nda", "NDA desk", "nda@acme.corp");
    rule.priority = 5;
    rule.conditions.push(Condition::equals(ConditionField::RequestType, "nda"));
    rule
}

#[test]
fn every_decision_appends_one_json_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decisions.jsonl");
    let log = JsonlDecisionLog::open(&path).unwrap();
    let engine = RoutingEngine::with_sink(EngineConfig::default(), Arc::new(log));
    let rules = vec![nda_rule()];

    engine.route(&ExtractedInfo::new("nda please").with_request_type("nda"), &rules).unwrap();
    engine.analyze_coverage(&rules).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> =
        contents.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "routing_decision");
    assert_eq!(lines[0]["matched_rule_id"], "nda");
    assert!(lines[0]["raw_text"].is_null());
    assert_eq!(lines[1]["event"], "coverage_report");
}

#[test]
fn reopening_the_log_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decisions.jsonl");
    for _ in 0 .. 2 {
        let log = JsonlDecisionLog::open(&path).unwrap();
        let engine = RoutingEngine::with_sink(EngineConfig::default(), Arc::new(log));
        engine.route(&ExtractedInfo::new("hello"), &[]).unwrap();
    }
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn open_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("decisions.jsonl");
    assert!(JsonlDecisionLog::open(&path).is_err());
}
