// crates/legal-router-core/src/core/mod.rs
// ============================================================================
// Module: Legal Router Core Types
// Description: Canonical rule, request, decision, and coverage structures.
// Purpose: Provide stable, serializable types for the routing engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define rules, extracted request fields, routing decisions,
//! coverage reports, and the taxonomy the coverage matrix spans. Wire names
//! are camelCase to match the admin UI and chat layer payloads.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod coverage;
pub mod decision;
pub mod extracted;
pub mod hashing;
pub mod identifiers;
pub mod rule;
pub mod taxonomy;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use coverage::AxisCoverage;
pub use coverage::CellRule;
pub use coverage::CoverageCell;
pub use coverage::CoverageConflict;
pub use coverage::CoverageGap;
pub use coverage::CoverageMatrix;
pub use coverage::CoverageReport;
pub use coverage::CoverageSummary;
pub use coverage::CoverageWarning;
pub use coverage::WarningKind;
pub use coverage::WarningSeverity;
pub use decision::Clarification;
pub use decision::ConditionFailure;
pub use decision::FailureKind;
pub use decision::RoutingDecision;
pub use decision::RoutingOutcome;
pub use decision::RuleTestResult;
pub use extracted::ExtractedInfo;
pub use extracted::FieldValue;
pub use extracted::Urgency;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::Assignee;
pub use identifiers::RuleId;
pub use rule::Condition;
pub use rule::ConditionField;
pub use rule::ConditionOperator;
pub use rule::ConditionValue;
pub use rule::Rule;
pub use rule::RuleAction;
pub use rule::RuleSet;
pub use rule::RuleSetError;
pub use rule::RuleSetLimits;
pub use taxonomy::STANDARD_LOCATIONS;
pub use taxonomy::STANDARD_REQUEST_TYPES;
pub use taxonomy::Taxonomy;
