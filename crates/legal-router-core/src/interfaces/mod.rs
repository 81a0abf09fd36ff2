// crates/legal-router-core/src/interfaces/mod.rs
// ============================================================================
// Module: Legal Router Interfaces
// Description: Seams between the routing engine and its collaborators.
// Purpose: Abstract field lookup and decision auditing behind small traits.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! The engine reads request fields through [`FieldSource`] so the same
//! condition evaluator serves both routing (an [`crate::ExtractedInfo`]) and
//! coverage analysis (a synthetic matrix cell). Audit events leave the engine
//! through [`DecisionSink`]; the engine itself performs no I/O.
//!
//! Audit events redact conversation text unless the caller opts in.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use thiserror::Error;

use crate::core::Assignee;
use crate::core::ConditionField;
use crate::core::CoverageReport;
use crate::core::FieldValue;
use crate::core::HashDigest;
use crate::core::RoutingDecision;
use crate::core::RoutingOutcome;
use crate::core::RuleId;

// ============================================================================
// SECTION: Field Source
// ============================================================================

/// Record whose fields conditions are evaluated against.
pub trait FieldSource {
    /// Returns the value of `field`, or `None` when it is absent.
    fn field_value(&self, field: ConditionField) -> Option<FieldValue<'_>>;
}

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// Redaction label for events that omit conversation text.
pub const REDACTION_REDACTED: &str = "redacted";
/// Redaction label for events that carry conversation text.
pub const REDACTION_RAW: &str = "raw";

/// Audit record for one routing decision.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Digest of the rule snapshot the decision was made against.
    pub rule_set_hash: Option<HashDigest>,
    /// Whether a rule was selected.
    pub matched: bool,
    /// Decision classification.
    pub outcome: RoutingOutcome,
    /// Selected rule, if any.
    pub matched_rule_id: Option<RuleId>,
    /// Selected assignee, if any.
    pub assign_to: Option<Assignee>,
    /// Confidence score.
    pub confidence: u8,
    /// Fields the caller should ask about.
    pub missing_fields: Vec<ConditionField>,
    /// Conversation text (explicit opt-in only).
    pub raw_text: Option<String>,
    /// Redaction classification.
    pub redaction: &'static str,
}

impl RoutingAuditEvent {
    /// Builds an audit event from a decision.
    #[must_use]
    pub fn from_decision(
        decision: &RoutingDecision,
        rule_set_hash: Option<HashDigest>,
        include_raw_text: bool,
    ) -> Self {
        Self {
            event: "routing_decision",
            timestamp_ms: now_ms(),
            rule_set_hash,
            matched: decision.matched,
            outcome: decision.outcome(),
            matched_rule_id: decision.matched_rule.as_ref().map(|rule| rule.id.clone()),
            assign_to: decision.assign_to.clone(),
            confidence: decision.confidence,
            missing_fields: decision
                .needs_clarification
                .as_ref()
                .map(|clarification| clarification.missing_fields.clone())
                .unwrap_or_default(),
            raw_text: include_raw_text.then(|| decision.extracted_info.raw_text.clone()),
            redaction: if include_raw_text { REDACTION_RAW } else { REDACTION_REDACTED },
        }
    }
}

/// Audit record for one coverage analysis.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Digest of the analyzed rule snapshot.
    pub rule_set_hash: Option<HashDigest>,
    /// Coverage score.
    pub score: u8,
    /// Matrix size.
    pub total_combinations: usize,
    /// Covered cells.
    pub covered_combinations: usize,
    /// Number of gaps.
    pub gap_count: usize,
    /// Number of priority conflicts.
    pub conflict_count: usize,
    /// Number of warnings.
    pub warning_count: usize,
}

impl CoverageAuditEvent {
    /// Builds an audit event from a report.
    #[must_use]
    pub fn from_report(report: &CoverageReport, rule_set_hash: Option<HashDigest>) -> Self {
        Self {
            event: "coverage_report",
            timestamp_ms: now_ms(),
            rule_set_hash,
            score: report.score,
            total_combinations: report.total_combinations,
            covered_combinations: report.covered_combinations,
            gap_count: report.gaps.len(),
            conflict_count: report.conflicts.len(),
            warning_count: report.warnings.len(),
        }
    }
}

/// Milliseconds since the Unix epoch (zero if the clock is before it).
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|duration| duration.as_millis()).unwrap_or(0)
}

// ============================================================================
// SECTION: Decision Sink
// ============================================================================

/// Errors raised by decision sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink could not persist the event.
    #[error("decision sink write failed: {0}")]
    Write(String),
}

/// Destination for routing and coverage audit events.
pub trait DecisionSink: Send + Sync {
    /// Records a routing decision.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the event cannot be persisted.
    fn record_routing(&self, event: &RoutingAuditEvent) -> Result<(), SinkError>;

    /// Records a coverage analysis.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the event cannot be persisted.
    fn record_coverage(&self, event: &CoverageAuditEvent) -> Result<(), SinkError>;
}

/// Sink that discards every event.
pub struct NoopDecisionSink;

impl DecisionSink for NoopDecisionSink {
    fn record_routing(&self, _event: &RoutingAuditEvent) -> Result<(), SinkError> {
        Ok(())
    }

    fn record_coverage(&self, _event: &CoverageAuditEvent) -> Result<(), SinkError> {
        Ok(())
    }
}
