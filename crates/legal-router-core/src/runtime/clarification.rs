// crates/legal-router-core/src/runtime/clarification.rs
// ============================================================================
// Module: Legal Router Clarification Prompts
// Description: Follow-up questions for fields that would disambiguate rules.
// Purpose: Map missing fields to natural-language prompts.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Each field has a fixed prompt. Deployments may override prompts per field;
//! a field without a prompt gets the generic fallback question.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::Clarification;
use crate::core::ConditionField;

// ============================================================================
// SECTION: Default Prompts
// ============================================================================

/// Generic prompt for fields without a dedicated question.
pub const GENERIC_QUESTION: &str = "Could you share a bit more detail about your request?";

/// Returns the built-in prompt for a field.
#[must_use]
pub const fn default_question(field: ConditionField) -> Option<&'static str> {
    match field {
        ConditionField::RequestType => {
            Some("What type of legal help do you need (for example a contract, NDA, or dispute)?")
        }
        ConditionField::Location => Some("Which country or region is this matter based in?"),
        ConditionField::Value => Some("What is the approximate value of this matter?"),
        ConditionField::Department => Some("Which department is this request coming from?"),
        ConditionField::Urgency => Some("How urgent is this: low, medium, or high?"),
        ConditionField::Unknown => None,
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Prompt table with per-field overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClarificationCatalog {
    /// Overrides keyed by field.
    overrides: BTreeMap<ConditionField, String>,
    /// Prompt for fields without a question.
    fallback: String,
}

impl ClarificationCatalog {
    /// Creates a catalog with the built-in prompts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
            fallback: GENERIC_QUESTION.to_string(),
        }
    }

    /// Overrides the prompt for one field.
    #[must_use]
    pub fn with_question(mut self, field: ConditionField, question: impl Into<String>) -> Self {
        self.overrides.insert(field, question.into());
        self
    }

    /// Replaces the generic fallback prompt.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Returns the prompt for a field.
    #[must_use]
    pub fn question_for(&self, field: ConditionField) -> &str {
        self.overrides
            .get(&field)
            .map(String::as_str)
            .or_else(|| default_question(field))
            .unwrap_or(&self.fallback)
    }

    /// Builds a clarification block for the given fields.
    #[must_use]
    pub fn clarify(&self, fields: Vec<ConditionField>) -> Clarification {
        let questions = fields.iter().map(|field| self.question_for(*field).to_string()).collect();
        Clarification {
            missing_fields: fields,
            questions,
        }
    }
}

impl Default for ClarificationCatalog {
    fn default() -> Self {
        Self::new()
    }
}
