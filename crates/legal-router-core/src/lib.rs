// crates/legal-router-core/src/lib.rs
// ============================================================================
// Module: Legal Router Core Library
// Description: Public API surface for the legal request routing engine.
// Purpose: Expose rule types, routing, coverage analysis, and audit interfaces.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Legal Router core decides which staff member should handle a legal request
//! given structured fields extracted from conversation text and a snapshot of
//! admin-defined rules. It also reports how completely a rule set covers the
//! request-type x location space.
//!
//! The three entry points are total functions:
//! - [`route`] returns a match, a clarification request, or a fallback.
//! - [`analyze_coverage`] builds the coverage matrix and its findings.
//! - [`test_rule`] explains why one rule does or does not match a record.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::CoverageAuditEvent;
pub use interfaces::DecisionSink;
pub use interfaces::FieldSource;
pub use interfaces::NoopDecisionSink;
pub use interfaces::RoutingAuditEvent;
pub use interfaces::SinkError;
pub use runtime::ClarificationCatalog;
pub use runtime::ConditionOutcome;
pub use runtime::EngineConfig;
pub use runtime::MatchMode;
pub use runtime::RoutingEngine;
pub use runtime::analyze_coverage_with;
pub use runtime::route_with;
pub use runtime::test_rule;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Routes a record against a rule snapshot using the built-in prompts.
#[must_use]
pub fn route(info: &ExtractedInfo, rules: &[Rule]) -> RoutingDecision {
    route_with(info, rules, &ClarificationCatalog::default())
}

/// Analyzes coverage of a rule snapshot over the standard taxonomy.
#[must_use]
pub fn analyze_coverage(rules: &[Rule]) -> CoverageReport {
    analyze_coverage_with(rules, &Taxonomy::standard())
}
