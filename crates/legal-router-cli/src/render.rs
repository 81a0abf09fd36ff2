// crates/legal-router-cli/src/render.rs
// ============================================================================
// Module: Legal Router Text Rendering
// Description: Plain-text rendering of coverage reports.
// Purpose: Give admins a readable matrix view in the terminal.
// Dependencies: legal-router-core
// ============================================================================

//! ## Overview
//! The text view prints the score, a request-type x location grid (`#` for a
//! covered cell, `.` for a gap), then warnings in severity order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use legal_router_core::CoverageReport;
use legal_router_core::Taxonomy;

// ============================================================================
// SECTION: Coverage Text
// ============================================================================

/// Marker for a covered cell.
const COVERED_MARK: char = '#';
/// Marker for a gap.
const GAP_MARK: char = '.';

/// Renders a coverage report as plain text, one line per entry.
#[must_use]
pub fn coverage_text(report: &CoverageReport, taxonomy: &Taxonomy) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Coverage: {}% ({} of {} combinations)",
        report.score, report.covered_combinations, report.total_combinations
    );

    let request_types = taxonomy.request_type_axis();
    let locations = taxonomy.location_axis();
    let label_width = request_types.iter().map(|entry| entry.len()).max().unwrap_or(0);
    let _ = write!(out, "{:label_width$}", "");
    for location in &locations {
        let _ = write!(out, " {location}");
    }
    out.push('\n');

    for &request_type in &request_types {
        let _ = write!(out, "{request_type:label_width$}");
        for &location in &locations {
            let covered = report
                .matrix
                .get(request_type)
                .and_then(|row| row.get(location))
                .is_some_and(|cell| cell.covered);
            let mark = if covered { COVERED_MARK } else { GAP_MARK };
            let _ = write!(out, " {mark:^width$}", width = location.len());
        }
        let percentage =
            report.summary.by_request_type.get(request_type).map_or(0, |axis| axis.percentage);
        let _ = writeln!(out, "  {percentage}%");
    }

    if report.warnings.is_empty() {
        out.push_str("No warnings.\n");
    } else {
        let _ = writeln!(out, "Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            let _ = writeln!(out, "  [{}] {}", warning.severity.as_str(), warning.message);
        }
    }
    out
}
