// crates/legal-router-cli/tests/coverage_text.rs
// ============================================================================
// Module: Coverage Text Rendering Tests
// Description: Plain-text coverage matrix output.
// Purpose: Ensure the terminal view reflects the report it renders.
// Dependencies: legal-router-cli, legal-router-core
// ============================================================================
//! ## Overview
//! Renders small reports and checks header, grid marks, and warnings.

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

use legal_router_cli::render::coverage_text;
use legal_router_core::Condition;
use legal_router_core::ConditionField;
use legal_router_core::Rule;
use legal_router_core::Taxonomy;
use legal_router_core::analyze_coverage_with;

fn taxonomy() -> Taxonomy {
    Taxonomy::new(["contracts", "nda"], ["australia", "canada"])
}

#[test]
fn fully_covered_matrix_has_no_warnings() {
    let taxonomy = taxonomy();
    let rules = vec![Rule::new("all", "Catch all", "legal@acme.corp")];
    let report = analyze_coverage_with(&rules, &taxonomy);
    let text = coverage_text(&report, &taxonomy);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Coverage: 100% (4 of 4 combinations)");
    assert!(lines[1].contains("australia") && lines[1].contains("canada"));
    assert!(lines[2].starts_with("contracts") && lines[2].ends_with("100%"));
    assert!(lines[2 ..= 3].iter().all(|line| !line.contains('.')));
    assert_eq!(lines.last().copied(), Some("No warnings."));
}

#[test]
fn gaps_render_as_dots_with_warnings() {
    let taxonomy = taxonomy();
    let mut rule = Rule::new("nda", "NDA desk", "nda@acme.corp");
    rule.conditions.push(Condition::equals(ConditionField::RequestType, "nda"));
    let report = analyze_coverage_with(&[rule], &taxonomy);
    let text = coverage_text(&report, &taxonomy);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Coverage: 50% (2 of 4 combinations)");
    assert!(lines[2].starts_with("contracts") && lines[2].contains('.') && !lines[2].contains('#'));
    assert!(lines[3].starts_with("nda") && lines[3].contains('#') && lines[3].ends_with("100%"));
    assert!(text.contains(&format!("Warnings ({}):", report.warnings.len())));
    assert!(lines.iter().any(|line| line.starts_with("  [high]")));
}
