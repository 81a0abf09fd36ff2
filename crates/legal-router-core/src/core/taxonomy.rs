// crates/legal-router-core/src/core/taxonomy.rs
// ============================================================================
// Module: Legal Router Taxonomy
// Description: Enumerations of request types and locations.
// Purpose: Define the axes of the coverage matrix as injectable data.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The taxonomy lists every request type and location the coverage analyzer
//! enumerates. It is configuration data: the standard legal taxonomy is the
//! default, and tests or deployments can supply smaller or different axes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Standard Enumerations
// ============================================================================

/// Standard request types, in presentation order.
pub const STANDARD_REQUEST_TYPES: &[&str] = &[
    "contracts",
    "nda",
    "employment",
    "litigation_disputes",
    "intellectual_property",
    "privacy_data_protection",
    "regulatory_compliance",
    "corporate_transactions",
    "other",
];

/// Standard locations, in presentation order.
pub const STANDARD_LOCATIONS: &[&str] = &[
    "australia",
    "united_states",
    "united_kingdom",
    "european_union",
    "asia_pacific",
    "canada",
    "other",
];

// ============================================================================
// SECTION: Taxonomy
// ============================================================================

/// Request-type and location axes of the coverage matrix.
///
/// # Invariants
/// - Entry order is preserved in gaps, warnings, and summaries.
/// - Entries that differ only in case name the same axis value; the first one
///   wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    /// Request-type axis.
    pub request_types: Vec<String>,
    /// Location axis.
    pub locations: Vec<String>,
}

impl Taxonomy {
    /// Creates a taxonomy from explicit axes.
    #[must_use]
    pub fn new<R, L>(request_types: R, locations: L) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            request_types: dedupe(request_types.into_iter().map(Into::into)),
            locations: dedupe(locations.into_iter().map(Into::into)),
        }
    }

    /// Returns the standard legal taxonomy.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_REQUEST_TYPES.iter().copied(), STANDARD_LOCATIONS.iter().copied())
    }

    /// Returns the distinct request types in first-seen order.
    #[must_use]
    pub fn request_type_axis(&self) -> Vec<&str> {
        distinct(&self.request_types)
    }

    /// Returns the distinct locations in first-seen order.
    #[must_use]
    pub fn location_axis(&self) -> Vec<&str> {
        distinct(&self.locations)
    }

    /// Returns the number of distinct cells in the matrix.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.request_type_axis().len() * self.location_axis().len()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Borrows the entries, skipping case-insensitive repeats.
fn distinct(entries: &[String]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .collect()
}

/// Collects the entries, skipping case-insensitive repeats.
fn dedupe(entries: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    entries.filter(|entry| seen.insert(entry.to_lowercase())).collect()
}
