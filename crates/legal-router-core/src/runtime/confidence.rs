// crates/legal-router-core/src/runtime/confidence.rs
// ============================================================================
// Module: Legal Router Confidence Scoring
// Description: Heuristic confidence score for routing decisions.
// Purpose: Rate how well-specified a request is and whether a rule was found.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Confidence starts at a base score, gains points for each known field, and
//! is then raised (capped) when a rule matched or lowered (floored) when none
//! did. The router also uses fixed scores for ambiguity and fallback paths.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ExtractedInfo;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Starting score before field bonuses.
pub const BASE_CONFIDENCE: u8 = 50;
/// Bonus for a known request type.
pub const REQUEST_TYPE_BONUS: u8 = 20;
/// Bonus for a known location.
pub const LOCATION_BONUS: u8 = 20;
/// Bonus for a known value.
pub const VALUE_BONUS: u8 = 5;
/// Bonus for a known department.
pub const DEPARTMENT_BONUS: u8 = 5;
/// Adjustment applied when a rule matched.
pub const MATCH_BONUS: u8 = 20;
/// Upper bound after the match bonus.
pub const MATCH_CAP: u8 = 98;
/// Adjustment applied when no rule matched.
pub const NO_MATCH_PENALTY: u8 = 30;
/// Lower bound after the no-match penalty.
pub const NO_MATCH_FLOOR: u8 = 15;
/// Fixed score when no rule could apply.
pub const FALLBACK_CONFIDENCE: u8 = 20;
/// Fixed score when clarification is requested.
pub const CLARIFICATION_CONFIDENCE: u8 = 30;
/// Fixed score when ambiguity is resolved by tie-break.
pub const TIE_BREAK_CONFIDENCE: u8 = 35;

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Computes the confidence score for a record.
#[must_use]
pub const fn calculate_confidence(info: &ExtractedInfo, matched: bool) -> u8 {
    let mut score = BASE_CONFIDENCE;
    if info.request_type.is_some() {
        score += REQUEST_TYPE_BONUS;
    }
    if info.location.is_some() {
        score += LOCATION_BONUS;
    }
    if info.value.is_some() {
        score += VALUE_BONUS;
    }
    if info.department.is_some() {
        score += DEPARTMENT_BONUS;
    }
    if matched {
        let raised = score + MATCH_BONUS;
        if raised > MATCH_CAP { MATCH_CAP } else { raised }
    } else {
        let lowered = score.saturating_sub(NO_MATCH_PENALTY);
        if lowered < NO_MATCH_FLOOR { NO_MATCH_FLOOR } else { lowered }
    }
}
