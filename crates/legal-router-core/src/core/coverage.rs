// crates/legal-router-core/src/core/coverage.rs
// ============================================================================
// Module: Legal Router Coverage Report
// Description: Coverage matrix, gaps, conflicts, warnings, and summaries.
// Purpose: Define the report produced by the coverage analyzer.
// Dependencies: crate::core::{identifiers, rule}, serde
// ============================================================================

//! ## Overview
//! A [`CoverageReport`] is recomputed from scratch on every request. The
//! matrix maps request type to location to the rules that would apply to that
//! combination; every other section is derived from the matrix.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::RuleId;
use crate::core::rule::RuleAction;

// ============================================================================
// SECTION: Matrix
// ============================================================================

/// Rule reference stored in a matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRule {
    /// Rule identifier.
    pub id: RuleId,
    /// Rule name.
    pub name: String,
    /// Rule priority.
    pub priority: i64,
    /// Rule action.
    pub action: RuleAction,
}

/// One request-type/location combination.
///
/// # Invariants
/// - `covered == !rules.is_empty()`.
/// - `rules` is sorted by priority descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageCell {
    /// Whether any enabled rule applies.
    pub covered: bool,
    /// Every applicable rule.
    pub rules: Vec<CellRule>,
}

/// Request type -> location -> cell.
pub type CoverageMatrix = BTreeMap<String, BTreeMap<String, CoverageCell>>;

// ============================================================================
// SECTION: Findings
// ============================================================================

/// Uncovered combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageGap {
    /// Request type of the cell.
    pub request_type: String,
    /// Location of the cell.
    pub location: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Rules that tie on priority within one cell.
///
/// # Invariants
/// - `rules` has at least two entries, all at `priority`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageConflict {
    /// Request type of the cell.
    pub request_type: String,
    /// Location of the cell.
    pub location: String,
    /// Shared priority.
    pub priority: i64,
    /// Tied rules, in cell order.
    pub rules: Vec<CellRule>,
}

impl CoverageConflict {
    /// Returns the identifiers of the tied rules.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id.clone()).collect()
    }
}

/// Warning severity; ordering is high before medium before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// Must be addressed.
    High,
    /// Should be reviewed.
    Medium,
    /// Informational.
    Low,
}

impl WarningSeverity {
    /// Returns the stable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A request type has no covered location.
    NoCoverage,
    /// A request type is covered in fewer than 30% of locations.
    LowCoverage,
    /// A request type is partially covered.
    PartialCoverage,
    /// Rules tie on priority in a cell.
    PriorityConflict,
    /// An enabled rule applies to no cell.
    OrphanRule,
}

/// Coverage warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageWarning {
    /// Severity.
    pub severity: WarningSeverity,
    /// Category.
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
    /// Request type concerned, when the warning is per request type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    /// Rules concerned.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rule_ids: Vec<RuleId>,
}

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Coverage of one axis entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisCoverage {
    /// Covered cells in the row or column.
    pub covered: usize,
    /// Size of the other axis.
    pub total: usize,
    /// Rounded percentage (0-100).
    pub percentage: u8,
}

/// Per-axis coverage rollups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    /// Coverage per request type (denominator: location count).
    pub by_request_type: BTreeMap<String, AxisCoverage>,
    /// Coverage per location (denominator: request-type count).
    pub by_location: BTreeMap<String, AxisCoverage>,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Full coverage analysis of a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    /// Rounded covered percentage (0-100).
    pub score: u8,
    /// Number of cells in the matrix.
    pub total_combinations: usize,
    /// Number of covered cells.
    pub covered_combinations: usize,
    /// Uncovered cells in taxonomy order.
    pub gaps: Vec<CoverageGap>,
    /// Priority ties in taxonomy order.
    pub conflicts: Vec<CoverageConflict>,
    /// Warnings ordered high, medium, low.
    pub warnings: Vec<CoverageWarning>,
    /// Full matrix.
    pub matrix: CoverageMatrix,
    /// Per-axis rollups.
    pub summary: CoverageSummary,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rounded integer percentage of `part` over `whole` (half rounds up).
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let scaled = (part.saturating_mul(100) + whole / 2) / whole;
    u8::try_from(scaled.min(100)).unwrap_or(100)
}
