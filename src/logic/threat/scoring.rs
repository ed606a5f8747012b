//! Threat Scoring Engine
//!
//! Pure function mapping an entity's accumulated flags and attributes
//! to a bounded score in [0, 100]. Always a full recompute from the
//! current entity state - never incremental, so corrections to any
//! input are reflected without special-casing. Referentially
//! transparent: same state, same score, regardless of call history.

use super::rules::*;
use super::types::{RiskLevel, ScoreBreakdown, ThreatAssessment};
use crate::logic::entity::{Entity, Severity};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Compute the entity's threat score, clamped to [0, 100].
pub fn threat_score(entity: &Entity) -> u8 {
    breakdown(entity).final_score
}

/// Points contributed by a single red flag severity.
pub fn flag_points(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => CRITICAL_FLAG_POINTS,
        Severity::Warning => WARNING_FLAG_POINTS,
        Severity::Info => INFO_FLAG_POINTS,
    }
}

/// Assemble the score term by term. All contributions are additive and
/// non-negative, so the order of accumulation is irrelevant.
pub fn breakdown(entity: &Entity) -> ScoreBreakdown {
    // Superseded flags are corrections of record - the replacement
    // carries the current signal, so only active flags count.
    let flag_points: u32 = entity
        .active_red_flags()
        .map(|f| self::flag_points(f.severity))
        .sum();

    let footprint = &entity.digital_footprint;
    let mut footprint_penalty = 0u32;
    if !footprint.has_website {
        footprint_penalty += NO_WEBSITE_PENALTY;
    }
    if !footprint.has_social_media {
        footprint_penalty += NO_SOCIAL_MEDIA_PENALTY;
    }
    if !footprint.has_reviews {
        footprint_penalty += NO_REVIEWS_PENALTY;
    }
    if footprint.search_result_count < LOW_SEARCH_RESULT_THRESHOLD {
        footprint_penalty += LOW_SEARCH_PRESENCE_PENALTY;
    }

    let legal = &entity.legal_status;
    let mut legal_penalty = 0u32;
    if !legal.registration_verified {
        legal_penalty += UNVERIFIED_REGISTRATION_PENALTY;
    }
    if legal.is_dormant {
        legal_penalty += DORMANT_PENALTY;
    }
    if legal.has_labor_violations {
        legal_penalty += LABOR_VIOLATION_PENALTY;
    }
    if legal.has_pending_litigation {
        legal_penalty += PENDING_LITIGATION_PENALTY;
    }

    let raw_total = flag_points + footprint_penalty + legal_penalty;

    ScoreBreakdown {
        flag_points,
        footprint_penalty,
        legal_penalty,
        raw_total,
        final_score: raw_total.min(MAX_THREAT_SCORE as u32) as u8,
    }
}

// ============================================================================
// ASSESSMENT (score + tier + reasons)
// ============================================================================

/// Score the entity and explain every contribution.
pub fn assess(entity: &Entity) -> ThreatAssessment {
    let breakdown = breakdown(entity);
    let mut reasons = Vec::new();

    let active_flags = entity.active_red_flags().count();
    if active_flags > 0 {
        reasons.push(format!(
            "{} active red flag(s) (+{})",
            active_flags, breakdown.flag_points
        ));
    }

    let footprint = &entity.digital_footprint;
    if !footprint.has_website {
        reasons.push(format!("No website (+{})", NO_WEBSITE_PENALTY));
    }
    if !footprint.has_social_media {
        reasons.push(format!("No social media (+{})", NO_SOCIAL_MEDIA_PENALTY));
    }
    if !footprint.has_reviews {
        reasons.push(format!("No reviews (+{})", NO_REVIEWS_PENALTY));
    }
    if footprint.search_result_count < LOW_SEARCH_RESULT_THRESHOLD {
        reasons.push(format!(
            "Only {} search result(s) (+{})",
            footprint.search_result_count, LOW_SEARCH_PRESENCE_PENALTY
        ));
    }

    let legal = &entity.legal_status;
    if !legal.registration_verified {
        reasons.push(format!(
            "Registration not verified (+{})",
            UNVERIFIED_REGISTRATION_PENALTY
        ));
    }
    if legal.is_dormant {
        reasons.push(format!("Dormant (+{})", DORMANT_PENALTY));
    }
    if legal.has_labor_violations {
        reasons.push(format!("Labor violations (+{})", LABOR_VIOLATION_PENALTY));
    }
    if legal.has_pending_litigation {
        reasons.push(format!(
            "Pending litigation (+{})",
            PENDING_LITIGATION_PENALTY
        ));
    }

    if breakdown.raw_total > MAX_THREAT_SCORE as u32 {
        reasons.push(format!(
            "Raw total {} clamped to {}",
            breakdown.raw_total, MAX_THREAT_SCORE
        ));
    }

    let score = breakdown.final_score;
    let risk = super::classifier::classify(score);
    reasons.push(format!("Final score: {}/100 -> {}", score, risk));

    ThreatAssessment {
        score,
        risk,
        reasons,
        breakdown,
    }
}

/// Convenience: score and classify in one step.
pub fn assess_risk(entity: &Entity) -> RiskLevel {
    super::classifier::classify(threat_score(entity))
}

// ============================================================================
// TESTS
// ============================================================================
