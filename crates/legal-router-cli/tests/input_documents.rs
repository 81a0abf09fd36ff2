// crates/legal-router-cli/tests/input_documents.rs
// ============================================================================
// Module: CLI Input Document Tests
// Description: Rules and info file decoding with bounded reads.
// Purpose: Ensure both rule file shapes decode and oversized input is refused.
// Dependencies: legal-router-cli, tempfile
// ============================================================================
//! ## Overview
//! Exercises the loaders the CLI uses before any routing happens.

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

use legal_router_cli::input::InputError;
use legal_router_cli::input::ReadLimitError;
use legal_router_cli::input::load_info;
use legal_router_cli::input::load_rules;
use legal_router_cli::input::parse_rules;
use legal_router_cli::input::read_bytes_with_limit;

const RULE_JSON: &str = r#"{"id":"r1","name":"Contracts","priority":3,"conditions":[{"field":"requestType","operator":"equals","value":"contracts"}],"action":{"assignTo":"contracts@acme.corp"}}"#;

#[test]
fn bare_and_wrapped_rule_files_decode_identically() {
    let bare = parse_rules(format!("[{RULE_JSON}]").as_bytes()).unwrap();
    let wrapped = parse_rules(format!("{{\"rules\":[{RULE_JSON}]}}").as_bytes()).unwrap();
    assert_eq!(bare, wrapped);
    assert_eq!(bare.rules.len(), 1);
    assert_eq!(bare.rules[0].priority, 3);
    assert!(bare.rules[0].enabled);
}

#[test]
fn info_file_decodes_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("info.json");
    fs::write(&path, r#"{"requestType":"nda","location":"canada","value":5000,"rawText":"hi"}"#)
        .unwrap();
    let info = load_info(&path, 1024).unwrap();
    assert_eq!(info.request_type.as_deref(), Some("nda"));
    assert_eq!(info.location.as_deref(), Some("canada"));
    assert_eq!(info.value, Some(5000.0));
    assert_eq!(info.raw_text, "hi");
}

#[test]
fn oversized_input_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, format!("[{RULE_JSON}]")).unwrap();

    let err = read_bytes_with_limit(&path, 16).unwrap_err();
    assert!(matches!(err, ReadLimitError::TooLarge { limit: 16, .. }));

    let err = load_rules(&path, 16).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
    assert!(err.to_string().contains("exceeds limit 16"));
}

#[test]
fn malformed_json_reports_document_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, "{\"rules\": 7}").unwrap();
    let err = load_rules(&path, 1024).unwrap_err();
    assert!(matches!(err, InputError::Decode { kind: "rules", .. }));
    assert!(err.to_string().starts_with("invalid rules document"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_info(&path, 1024).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
