// crates/legal-router-core/src/core/extracted.rs
// ============================================================================
// Module: Legal Router Extracted Info
// Description: Structured fields extracted from a conversational request.
// Purpose: Carry the LLM extraction output into the router.
// Dependencies: crate::core::rule, serde
// ============================================================================

//! ## Overview
//! [`ExtractedInfo`] is produced by an external LLM tool-call layer once per
//! conversation turn. Every structured field is optional: an absent field is
//! "not yet known", which the router treats differently from a known value
//! that fails a condition.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::rule::ConditionField;
use crate::core::rule::render_f64;
use crate::interfaces::FieldSource;

// ============================================================================
// SECTION: Urgency
// ============================================================================

/// Urgency level reported by the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Low urgency.
    Low,
    /// Medium urgency.
    Medium,
    /// High urgency.
    High,
}

impl Urgency {
    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Field Values
// ============================================================================

/// Borrowed view of a present field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Text value.
    Text(&'a str),
    /// Numeric value.
    Number(f64),
}

impl FieldValue<'_> {
    /// Renders the value as the string comparisons see it.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(render_f64(*number)),
        }
    }
}

// ============================================================================
// SECTION: Extracted Info
// ============================================================================

/// Structured request fields extracted from conversation text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    /// Kind of legal request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    /// Jurisdiction or office location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Monetary value of the matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Requesting department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Urgency level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    /// Original conversation text the fields were extracted from.
    #[serde(default)]
    pub raw_text: String,
}

impl ExtractedInfo {
    /// Creates an empty record for the given raw text.
    #[must_use]
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    /// Sets the request type.
    #[must_use]
    pub fn with_request_type(mut self, request_type: impl Into<String>) -> Self {
        self.request_type = Some(request_type.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the urgency.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Returns true when the field has a value.
    #[must_use]
    pub fn has_field(&self, field: ConditionField) -> bool {
        self.field_value(field).is_some()
    }
}

impl FieldSource for ExtractedInfo {
    fn field_value(&self, field: ConditionField) -> Option<FieldValue<'_>> {
        match field {
            ConditionField::RequestType => self.request_type.as_deref().map(FieldValue::Text),
            ConditionField::Location => self.location.as_deref().map(FieldValue::Text),
            ConditionField::Value => self.value.map(FieldValue::Number),
            ConditionField::Department => self.department.as_deref().map(FieldValue::Text),
            ConditionField::Urgency => self.urgency.map(|urgency| FieldValue::Text(urgency.as_str())),
            ConditionField::Unknown => None,
        }
    }
}
