// crates/legal-router-core/src/runtime/engine.rs
// ============================================================================
// Module: Legal Router Engine
// Description: Configured facade over routing, coverage, and rule diagnostics.
// Purpose: Bundle taxonomy, prompts, and an audit sink for service callers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! [`RoutingEngine`] holds configuration only; it never caches rules. Each
//! call takes the caller's current rule snapshot, computes a fresh result,
//! and reports an audit event to the configured [`DecisionSink`]. Callers
//! that mutate their rule store concurrently must snapshot it before calling.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::CoverageReport;
use crate::core::ExtractedInfo;
use crate::core::HashDigest;
use crate::core::RoutingDecision;
use crate::core::Rule;
use crate::core::RuleTestResult;
use crate::core::Taxonomy;
use crate::core::hashing::digest_canonical_json;
use crate::interfaces::CoverageAuditEvent;
use crate::interfaces::DecisionSink;
use crate::interfaces::NoopDecisionSink;
use crate::interfaces::RoutingAuditEvent;
use crate::interfaces::SinkError;
use crate::runtime::clarification::ClarificationCatalog;
use crate::runtime::coverage::analyze_coverage_with;
use crate::runtime::diagnostics::test_rule;
use crate::runtime::router::route_with;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Coverage matrix axes.
    pub taxonomy: Taxonomy,
    /// Clarification prompts.
    pub clarification: ClarificationCatalog,
    /// Whether audit events carry conversation text.
    pub include_raw_text: bool,
}

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Routing engine bound to a configuration and an audit sink.
#[derive(Clone)]
pub struct RoutingEngine {
    /// Engine configuration.
    config: EngineConfig,
    /// Audit destination.
    sink: Arc<dyn DecisionSink>,
}

impl RoutingEngine {
    /// Creates an engine that discards audit events.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_sink(config, Arc::new(NoopDecisionSink))
    }

    /// Creates an engine that reports to `sink`.
    #[must_use]
    pub fn with_sink(config: EngineConfig, sink: Arc<dyn DecisionSink>) -> Self {
        Self {
            config,
            sink,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Routes a record and records the decision.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the audit event cannot be recorded.
    pub fn route(&self, info: &ExtractedInfo, rules: &[Rule]) -> Result<RoutingDecision, SinkError> {
        let decision = route_with(info, rules, &self.config.clarification);
        let event = RoutingAuditEvent::from_decision(
            &decision,
            snapshot_hash(rules),
            self.config.include_raw_text,
        );
        self.sink.record_routing(&event)?;
        Ok(decision)
    }

    /// Analyzes coverage and records a summary event.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the audit event cannot be recorded.
    pub fn analyze_coverage(&self, rules: &[Rule]) -> Result<CoverageReport, SinkError> {
        let report = analyze_coverage_with(rules, &self.config.taxonomy);
        let event = CoverageAuditEvent::from_report(&report, snapshot_hash(rules));
        self.sink.record_coverage(&event)?;
        Ok(report)
    }

    /// Tests one rule strictly against a record.
    #[must_use]
    pub fn test_rule(&self, rule: &Rule, info: &ExtractedInfo) -> RuleTestResult {
        test_rule(rule, info)
    }
}

impl Default for RoutingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Digest of the rule snapshot; `None` when it cannot be canonicalized.
fn snapshot_hash(rules: &[Rule]) -> Option<HashDigest> {
    digest_canonical_json(rules).ok()
}
