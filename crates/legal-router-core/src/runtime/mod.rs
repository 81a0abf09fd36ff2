// crates/legal-router-core/src/runtime/mod.rs
// ============================================================================
// Module: Legal Router Runtime
// Description: Condition evaluation, routing, coverage, and diagnostics.
// Purpose: Implement the pure rule-matching and coverage-analysis engine.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime functions are pure: they read the rule snapshot they are given and
//! allocate fresh results. Nothing here performs I/O or holds shared state.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod clarification;
pub mod condition;
pub mod confidence;
pub mod coverage;
pub mod diagnostics;
pub mod engine;
pub mod router;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use clarification::ClarificationCatalog;
pub use condition::ConditionOutcome;
pub use condition::MatchMode;
pub use condition::evaluate;
pub use condition::evaluate_condition;
pub use condition::rule_matches;
pub use confidence::calculate_confidence;
pub use coverage::analyze_coverage_with;
pub use diagnostics::test_rule;
pub use engine::EngineConfig;
pub use engine::RoutingEngine;
pub use router::differentiating_fields;
pub use router::potential_matches;
pub use router::route_with;
