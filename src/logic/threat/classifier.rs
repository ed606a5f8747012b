//! Risk Classifier
//!
//! Maps a clamped threat score to one of four ordinal risk tiers.
//! Total over the whole [0, 100] domain, no gaps: every score lands in
//! exactly one tier.

use super::rules::{CRITICAL_RISK_MIN, HIGH_RISK_MIN, MEDIUM_RISK_MIN};
use super::types::RiskLevel;

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify a threat score into its risk tier.
///
/// Boundaries are inclusive at the stated thresholds:
/// >= 76 Critical, 51-75 High, 26-50 Medium, <= 25 Low.
pub fn classify(score: u8) -> RiskLevel {
    if score >= CRITICAL_RISK_MIN {
        RiskLevel::Critical
    } else if score >= HIGH_RISK_MIN {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_MIN {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

// ============================================================================
// TESTS
// ============================================================================
