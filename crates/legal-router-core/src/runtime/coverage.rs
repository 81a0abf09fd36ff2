// crates/legal-router-core/src/runtime/coverage.rs
// ============================================================================
// Module: Legal Router Coverage Analysis
// Description: Request-type x location coverage matrix over a rule snapshot.
// Purpose: Show admins which combinations route, which do not, and which tie.
// Dependencies: crate::{core, interfaces, runtime::condition}
// ============================================================================

//! ## Overview
//! Every cell of the taxonomy's request-type x location grid is checked
//! against every enabled rule. Only `requestType` and `location` conditions
//! constrain a cell; conditions on other fields are ignored, so a rule with
//! no condition on an axis spans that whole axis. Cell conditions are
//! evaluated with the same condition evaluator used for routing.
//!
//! Warnings are ordered high, then medium, then low severity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::CellRule;
use crate::core::ConditionField;
use crate::core::CoverageCell;
use crate::core::CoverageConflict;
use crate::core::CoverageGap;
use crate::core::CoverageMatrix;
use crate::core::CoverageReport;
use crate::core::CoverageSummary;
use crate::core::CoverageWarning;
use crate::core::FieldValue;
use crate::core::Rule;
use crate::core::RuleId;
use crate::core::Taxonomy;
use crate::core::WarningKind;
use crate::core::WarningSeverity;
use crate::core::coverage::AxisCoverage;
use crate::core::coverage::percentage;
use crate::interfaces::FieldSource;
use crate::runtime::condition::MatchMode;
use crate::runtime::condition::evaluate;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Request types covered in fewer than this share of locations warn at high severity.
pub const LOW_COVERAGE_PERCENT: usize = 30;

// ============================================================================
// SECTION: Cell Records
// ============================================================================

/// Synthetic record for one matrix cell.
#[derive(Debug, Clone, Copy)]
struct CellRecord<'a> {
    /// Request type of the cell.
    request_type: &'a str,
    /// Location of the cell.
    location: &'a str,
}

impl FieldSource for CellRecord<'_> {
    fn field_value(&self, field: ConditionField) -> Option<FieldValue<'_>> {
        match field {
            ConditionField::RequestType => Some(FieldValue::Text(self.request_type)),
            ConditionField::Location => Some(FieldValue::Text(self.location)),
            _ => None,
        }
    }
}

/// Returns true when the rule's axis conditions all hold for the cell.
fn covers(rule: &Rule, cell: &CellRecord<'_>) -> bool {
    rule.conditions
        .iter()
        .filter(|condition| {
            matches!(condition.field, ConditionField::RequestType | ConditionField::Location)
        })
        .all(|condition| evaluate(condition, cell, MatchMode::Strict))
}

// ============================================================================
// SECTION: Analysis
// ============================================================================

/// Analyzes coverage of the enabled rules over the taxonomy.
#[must_use]
pub fn analyze_coverage_with(rules: &[Rule], taxonomy: &Taxonomy) -> CoverageReport {
    let mut enabled: Vec<&Rule> = rules.iter().filter(|rule| rule.enabled).collect();
    enabled.sort_by(|left, right| right.priority.cmp(&left.priority));

    let mut matrix = CoverageMatrix::new();
    let mut gaps = Vec::new();
    let mut conflicts = Vec::new();
    let mut hits: BTreeMap<&RuleId, usize> = BTreeMap::new();
    let mut covered_combinations = 0;
    let request_types = taxonomy.request_type_axis();
    let locations = taxonomy.location_axis();

    for &request_type in &request_types {
        let row = matrix.entry(request_type.to_string()).or_default();
        for &location in &locations {
            let record = CellRecord {
                request_type,
                location,
            };
            let rules: Vec<CellRule> = enabled
                .iter()
                .filter(|rule| covers(rule, &record))
                .map(|rule| {
                    *hits.entry(&rule.id).or_insert(0) += 1;
                    cell_rule(rule)
                })
                .collect();

            if rules.is_empty() {
                gaps.push(CoverageGap {
                    request_type: request_type.to_string(),
                    location: location.to_string(),
                    reason: format!("No rule routes {request_type} requests in {location}."),
                });
            } else {
                covered_combinations += 1;
                conflicts.extend(priority_ties(request_type, location, &rules));
            }

            row.insert(location.to_string(), CoverageCell {
                covered: !rules.is_empty(),
                rules,
            });
        }
    }

    let summary = summarize(&matrix, &request_types, &locations);
    let orphans: Vec<&Rule> =
        enabled.iter().copied().filter(|rule| !hits.contains_key(&rule.id)).collect();
    let warnings = build_warnings(&request_types, &summary, &conflicts, &orphans);
    let total_combinations = request_types.len() * locations.len();

    CoverageReport {
        score: percentage(covered_combinations, total_combinations),
        total_combinations,
        covered_combinations,
        gaps,
        conflicts,
        warnings,
        matrix,
        summary,
    }
}

/// Projects a rule into its matrix form.
fn cell_rule(rule: &Rule) -> CellRule {
    CellRule {
        id: rule.id.clone(),
        name: rule.name.clone(),
        priority: rule.priority,
        action: rule.action.clone(),
    }
}

/// Groups a priority-sorted cell by priority and keeps groups of two or more.
fn priority_ties(request_type: &str, location: &str, rules: &[CellRule]) -> Vec<CoverageConflict> {
    rules
        .chunk_by(|left, right| left.priority == right.priority)
        .filter(|group| group.len() >= 2)
        .map(|group| CoverageConflict {
            request_type: request_type.to_string(),
            location: location.to_string(),
            priority: group[0].priority,
            rules: group.to_vec(),
        })
        .collect()
}

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Derives per-axis rollups from the matrix.
fn summarize(matrix: &CoverageMatrix, request_types: &[&str], locations: &[&str]) -> CoverageSummary {
    let mut summary = CoverageSummary::default();
    for request_type in request_types {
        let covered =
            locations.iter().filter(|location| is_covered(matrix, request_type, location)).count();
        summary.by_request_type.insert((*request_type).to_string(), axis(covered, locations.len()));
    }
    for location in locations {
        let covered = request_types
            .iter()
            .filter(|request_type| is_covered(matrix, request_type, location))
            .count();
        summary.by_location.insert((*location).to_string(), axis(covered, request_types.len()));
    }
    summary
}

/// Looks up whether a cell is covered.
fn is_covered(matrix: &CoverageMatrix, request_type: &str, location: &str) -> bool {
    matrix
        .get(request_type)
        .and_then(|row| row.get(location))
        .is_some_and(|cell| cell.covered)
}

/// Builds an axis rollup.
fn axis(covered: usize, total: usize) -> AxisCoverage {
    AxisCoverage {
        covered,
        total,
        percentage: percentage(covered, total),
    }
}

// ============================================================================
// SECTION: Warnings
// ============================================================================

/// Builds the severity-ordered warning list.
fn build_warnings(
    request_types: &[&str],
    summary: &CoverageSummary,
    conflicts: &[CoverageConflict],
    orphans: &[&Rule],
) -> Vec<CoverageWarning> {
    let mut warnings = Vec::new();

    for &request_type in request_types {
        let Some(coverage) = summary.by_request_type.get(request_type) else {
            continue;
        };
        if let Some(warning) = request_type_warning(request_type, coverage) {
            warnings.push(warning);
        }
    }

    for conflict in conflicts {
        let ids = conflict.rule_ids();
        let labels: Vec<&str> = ids.iter().map(RuleId::as_str).collect();
        warnings.push(CoverageWarning {
            severity: WarningSeverity::Medium,
            kind: WarningKind::PriorityConflict,
            message: format!(
                "Rules {} share priority {} for {} in {}; their order is ambiguous.",
                labels.join(", "),
                conflict.priority,
                conflict.request_type,
                conflict.location
            ),
            request_type: Some(conflict.request_type.clone()),
            rule_ids: ids,
        });
    }

    for rule in orphans {
        warnings.push(CoverageWarning {
            severity: WarningSeverity::Low,
            kind: WarningKind::OrphanRule,
            message: format!(
                "Rule \"{}\" ({}) does not apply to any request type and location.",
                rule.name, rule.id
            ),
            request_type: None,
            rule_ids: vec![rule.id.clone()],
        });
    }

    warnings.sort_by_key(|warning| warning.severity);
    warnings
}

/// Coverage warning for one request type, if its coverage is incomplete.
fn request_type_warning(request_type: &str, coverage: &AxisCoverage) -> Option<CoverageWarning> {
    let (severity, kind, message) = if coverage.covered == 0 {
        (
            WarningSeverity::High,
            WarningKind::NoCoverage,
            format!("Critical: {request_type} requests have no coverage in any location."),
        )
    } else if coverage.covered * 100 < coverage.total * LOW_COVERAGE_PERCENT {
        (
            WarningSeverity::High,
            WarningKind::LowCoverage,
            format!(
                "{request_type} requests are only covered in {}% of locations ({} of {}).",
                coverage.percentage, coverage.covered, coverage.total
            ),
        )
    } else if coverage.covered < coverage.total {
        (
            WarningSeverity::Medium,
            WarningKind::PartialCoverage,
            format!(
                "{request_type} requests are covered in {}% of locations ({} of {}).",
                coverage.percentage, coverage.covered, coverage.total
            ),
        )
    } else {
        return None;
    };
    Some(CoverageWarning {
        severity,
        kind,
        message,
        request_type: Some(request_type.to_string()),
        rule_ids: Vec::new(),
    })
}
