// crates/legal-router-core/src/core/rule.rs
// ============================================================================
// Module: Legal Router Rules
// Description: Conditional routing rules, conditions, and rule-set validation.
// Purpose: Define the admin-authored rule model consumed by routing and coverage.
// Dependencies: crate::core::{hashing, identifiers}, bigdecimal, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A rule is an ordered list of conditions (implicitly ANDed) plus an
//! assignment action. Rules are owned by an external store and passed into
//! the engine by value on every call; the engine never mutates them.
//!
//! Unknown field or operator names deserialize into explicit `Unknown`
//! variants instead of failing, so a malformed rule simply never matches.
//! [`RuleSet::validate`] rejects such rules for callers that want a strict
//! input contract.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Number;
use thiserror::Error;

use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::digest_canonical_json;
use crate::core::identifiers::Assignee;
use crate::core::identifiers::RuleId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum number of rules accepted by validation.
pub const DEFAULT_MAX_RULES: usize = 1_000;
/// Default maximum number of conditions per rule accepted by validation.
pub const DEFAULT_MAX_CONDITIONS_PER_RULE: usize = 32;

// ============================================================================
// SECTION: Condition Fields and Operators
// ============================================================================

/// Extracted-info field a condition targets.
///
/// # Invariants
/// - Wire names are camelCase and stable.
/// - [`ConditionField::Unknown`] captures any unrecognized wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionField {
    /// Kind of legal request (contracts, nda, ...).
    RequestType,
    /// Jurisdiction or office location.
    Location,
    /// Monetary value of the matter.
    Value,
    /// Requesting department.
    Department,
    /// Urgency level.
    Urgency,
    /// Unrecognized field name.
    #[serde(other)]
    Unknown,
}

impl ConditionField {
    /// All recognized fields in canonical order.
    pub const ALL: [Self; 5] =
        [Self::RequestType, Self::Location, Self::Value, Self::Department, Self::Urgency];

    /// Returns the stable wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequestType => "requestType",
            Self::Location => "location",
            Self::Value => "value",
            Self::Department => "department",
            Self::Urgency => "urgency",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire name; returns `None` for unrecognized names.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

impl fmt::Display for ConditionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a condition.
///
/// # Invariants
/// - Wire names are `snake_case` and stable.
/// - [`ConditionOperator::Unknown`] captures any unrecognized wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    /// Case-insensitive string equality.
    Equals,
    /// Case-insensitive substring test.
    Contains,
    /// Numeric `>`.
    GreaterThan,
    /// Numeric `<`.
    LessThan,
    /// Case-insensitive string inequality.
    NotEquals,
    /// Unrecognized operator name.
    #[serde(other)]
    Unknown,
}

impl ConditionOperator {
    /// Returns the stable wire name of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::NotEquals => "not_equals",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for numeric ordering operators.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::GreaterThan | Self::LessThan)
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Conditions
// ============================================================================

/// Literal a condition compares against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// JSON number literal.
    Number(Number),
    /// JSON string literal.
    Text(String),
}

impl ConditionValue {
    /// Renders the literal the way string comparisons see it.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Number(number) => render_number(number),
            Self::Text(text) => text.clone(),
        }
    }

    /// Coerces the literal to a decimal; `None` when it is not numeric.
    #[must_use]
    pub fn to_decimal(&self) -> Option<BigDecimal> {
        match self {
            Self::Number(number) => BigDecimal::from_str(&number.to_string()).ok(),
            Self::Text(text) => parse_decimal(text),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for ConditionValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

/// Single field/operator/value test within a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Targeted field.
    pub field: ConditionField,
    /// Comparison operator.
    pub operator: ConditionOperator,
    /// Literal compared against the field value.
    pub value: ConditionValue,
}

impl Condition {
    /// Creates a condition.
    #[must_use]
    pub fn new(
        field: ConditionField,
        operator: ConditionOperator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }

    /// Shorthand for an `equals` condition.
    #[must_use]
    pub fn equals(field: ConditionField, value: impl Into<ConditionValue>) -> Self {
        Self::new(field, ConditionOperator::Equals, value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.field, self.operator, self.value.render())
    }
}

// ============================================================================
// SECTION: Rules
// ============================================================================

/// Action taken when a rule is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleAction {
    /// Staff member the request is routed to.
    pub assign_to: Assignee,
}

/// Admin-defined conditional routing rule.
///
/// # Invariants
/// - `conditions` are ANDed; an empty list matches every input.
/// - Higher `priority` is evaluated first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule identifier.
    pub id: RuleId,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled rules never match and never count toward coverage.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Evaluation priority (higher first).
    #[serde(default)]
    pub priority: i64,
    /// Ordered conditions (implicit AND).
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Assignment action.
    pub action: RuleAction,
    /// Creation timestamp as stored by the rule store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Match counter maintained by the rule store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_count: Option<u64>,
}

impl Rule {
    /// Creates an enabled rule with no conditions at priority zero.
    #[must_use]
    pub fn new(id: impl Into<RuleId>, name: impl Into<String>, assign_to: impl Into<Assignee>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            enabled: true,
            priority: 0,
            conditions: Vec::new(),
            action: RuleAction {
                assign_to: assign_to.into(),
            },
            created_at: None,
            match_count: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Appends a condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Serde default for [`Rule::enabled`].
const fn default_enabled() -> bool {
    true
}

// ============================================================================
// SECTION: Rule Sets
// ============================================================================

/// Hard limits applied by [`RuleSet::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSetLimits {
    /// Maximum number of rules.
    pub max_rules: usize,
    /// Maximum number of conditions in a single rule.
    pub max_conditions_per_rule: usize,
}

impl Default for RuleSetLimits {
    fn default() -> Self {
        Self {
            max_rules: DEFAULT_MAX_RULES,
            max_conditions_per_rule: DEFAULT_MAX_CONDITIONS_PER_RULE,
        }
    }
}

/// Snapshot of the rule store passed into the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    /// Rules in store order.
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Wraps a rule list.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
        }
    }

    /// Returns the rules as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// Computes the canonical digest of the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn canonical_hash(&self) -> Result<HashDigest, HashError> {
        digest_canonical_json(&self.rules)
    }

    /// Validates the rule-set input contract.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleSetError`] encountered, in rule order.
    pub fn validate(&self, limits: &RuleSetLimits) -> Result<(), RuleSetError> {
        if self.rules.len() > limits.max_rules {
            return Err(RuleSetError::TooManyRules {
                count: self.rules.len(),
                limit: limits.max_rules,
            });
        }
        let mut seen = BTreeSet::new();
        for rule in &self.rules {
            if rule.id.as_str().trim().is_empty() {
                return Err(RuleSetError::EmptyRuleId);
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(RuleSetError::DuplicateRuleId(rule.id.clone()));
            }
            validate_rule(rule, limits)?;
        }
        Ok(())
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

/// Rule-set validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// More rules than the configured limit.
    #[error("rule set has {count} rules (limit {limit})")]
    TooManyRules {
        /// Number of rules supplied.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
    /// A rule has a blank identifier.
    #[error("rule id must not be empty")]
    EmptyRuleId,
    /// Two rules share an identifier.
    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(RuleId),
    /// A rule has more conditions than the configured limit.
    #[error("rule {rule_id} has {count} conditions (limit {limit})")]
    TooManyConditions {
        /// Offending rule.
        rule_id: RuleId,
        /// Number of conditions supplied.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
    /// A rule has a blank assignee.
    #[error("rule {0} has an empty assignTo")]
    EmptyAssignee(RuleId),
    /// A rule assignee is not email-shaped.
    #[error("rule {rule_id} assignTo is not email-shaped: {assignee}")]
    InvalidAssignee {
        /// Offending rule.
        rule_id: RuleId,
        /// Supplied assignee.
        assignee: Assignee,
    },
    /// A condition targets an unrecognized field.
    #[error("rule {rule_id} condition {index} has an unknown field")]
    UnknownField {
        /// Offending rule.
        rule_id: RuleId,
        /// Zero-based condition index.
        index: usize,
    },
    /// A condition uses an unrecognized operator.
    #[error("rule {rule_id} condition {index} has an unknown operator")]
    UnknownOperator {
        /// Offending rule.
        rule_id: RuleId,
        /// Zero-based condition index.
        index: usize,
    },
    /// An ordering operator compares against a non-numeric literal.
    #[error("rule {rule_id} condition {index} uses {operator} with non-numeric value")]
    NonNumericOrdering {
        /// Offending rule.
        rule_id: RuleId,
        /// Zero-based condition index.
        index: usize,
        /// Ordering operator.
        operator: ConditionOperator,
    },
}

/// Validates a single rule against the limits.
fn validate_rule(rule: &Rule, limits: &RuleSetLimits) -> Result<(), RuleSetError> {
    if rule.conditions.len() > limits.max_conditions_per_rule {
        return Err(RuleSetError::TooManyConditions {
            rule_id: rule.id.clone(),
            count: rule.conditions.len(),
            limit: limits.max_conditions_per_rule,
        });
    }
    let assignee = &rule.action.assign_to;
    if assignee.as_str().trim().is_empty() {
        return Err(RuleSetError::EmptyAssignee(rule.id.clone()));
    }
    if !assignee.is_email_shaped() {
        return Err(RuleSetError::InvalidAssignee {
            rule_id: rule.id.clone(),
            assignee: assignee.clone(),
        });
    }
    for (index, condition) in rule.conditions.iter().enumerate() {
        if condition.field == ConditionField::Unknown {
            return Err(RuleSetError::UnknownField {
                rule_id: rule.id.clone(),
                index,
            });
        }
        if condition.operator == ConditionOperator::Unknown {
            return Err(RuleSetError::UnknownOperator {
                rule_id: rule.id.clone(),
                index,
            });
        }
        if condition.operator.is_ordering() && condition.value.to_decimal().is_none() {
            return Err(RuleSetError::NonNumericOrdering {
                rule_id: rule.id.clone(),
                index,
                operator: condition.operator,
            });
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Numeric Helpers
// ============================================================================

/// Parses trimmed text as a decimal; blank or non-numeric text yields `None`.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    BigDecimal::from_str(trimmed).ok()
}

/// Renders a JSON number without a trailing `.0` for integral floats.
fn render_number(number: &Number) -> String {
    if number.is_f64()
        && let Some(value) = number.as_f64()
    {
        return render_f64(value);
    }
    number.to_string()
}

/// Renders a float the way a human would type it (`500000`, not `500000.0`).
#[must_use]
pub fn render_f64(value: f64) -> String {
    format!("{value}")
}
