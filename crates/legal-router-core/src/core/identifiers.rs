// crates/legal-router-core/src/core/identifiers.rs
// ============================================================================
// Module: Legal Router Identifiers
// Description: Opaque identifiers for rules and routing assignees.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Rules are addressed by an opaque string identifier and route to an
//! assignee, an email-shaped staff identifier. Both serialize as plain
//! strings on the wire. Neither type normalizes its contents; shape checks
//! live in rule-set validation so that routing stays total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Rule identifier, unique within a rule set.
///
/// # Invariants
/// - Opaque UTF-8 string; uniqueness is enforced by rule-set validation only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new rule identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RuleId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Staff member a request is routed to.
///
/// # Invariants
/// - Opaque UTF-8 string; expected to be email-shaped (see [`Self::is_email_shaped`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignee(String);

impl Assignee {
    /// Creates a new assignee identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier looks like `local@domain.tld`.
    #[must_use]
    pub fn is_email_shaped(&self) -> bool {
        let Some((local, domain)) = self.0.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') || self.0.chars().any(char::is_whitespace) {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Assignee {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Assignee {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
