//! Entity Validation
//!
//! Invariant checks for the entity and its sub-records. Every check
//! runs before the corresponding mutation is applied, so a rejected
//! operation leaves prior state untouched. Closed enumerations are
//! enforced by the types themselves; what remains here are the
//! cross-record rules serde cannot see.

use std::collections::HashSet;

use super::types::{DigitalFootprint, Entity, LegalStatus, RedFlag};
use crate::error::{CoreError, CoreResult};

/// Validate the whole entity: gated detail lists, unique sub-record
/// ids, and every cross-reference resolving within the same entity.
pub fn validate_entity(entity: &Entity) -> CoreResult<()> {
    validate_digital_footprint(&entity.digital_footprint)?;
    validate_legal_status(&entity.legal_status)?;

    ensure_unique(entity.red_flags.iter().map(|f| f.flag_id.as_str()), "red flag")?;
    ensure_unique(
        entity.evidence.iter().map(|e| e.evidence_id.as_str()),
        "evidence",
    )?;
    ensure_unique(entity.sources.iter().map(|s| s.source_id.as_str()), "source")?;
    ensure_unique(
        entity.actions_taken.iter().map(|a| a.action_id.as_str()),
        "action",
    )?;

    for flag in &entity.red_flags {
        validate_flag_references(flag, entity)?;
        if let Some(successor) = &flag.superseded_by {
            if entity.find_red_flag(successor).is_none() {
                return Err(CoreError::Validation(format!(
                    "red flag '{}' superseded by unknown flag '{}'",
                    flag.flag_id, successor
                )));
            }
            if successor == &flag.flag_id {
                return Err(CoreError::Validation(format!(
                    "red flag '{}' cannot supersede itself",
                    flag.flag_id
                )));
            }
        }
    }

    Ok(())
}

/// Dangling evidence references are a validation error, not silently
/// ignored.
pub fn validate_flag_references(flag: &RedFlag, entity: &Entity) -> CoreResult<()> {
    for evidence_id in &flag.evidence_ids {
        if entity.find_evidence(evidence_id).is_none() {
            return Err(CoreError::Validation(format!(
                "red flag '{}' references unknown evidence '{}'",
                flag.flag_id, evidence_id
            )));
        }
    }
    Ok(())
}

pub fn validate_digital_footprint(footprint: &DigitalFootprint) -> CoreResult<()> {
    if footprint.website_url.is_some() && !footprint.has_website {
        return Err(CoreError::Validation(
            "websiteUrl present but hasWebsite is false".to_string(),
        ));
    }
    if !footprint.social_media_links.is_empty() && !footprint.has_social_media {
        return Err(CoreError::Validation(
            "socialMediaLinks present but hasSocialMedia is false".to_string(),
        ));
    }
    if !footprint.review_platforms.is_empty() && !footprint.has_reviews {
        return Err(CoreError::Validation(
            "reviewPlatforms present but hasReviews is false".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_legal_status(legal: &LegalStatus) -> CoreResult<()> {
    if !legal.litigation_details.is_empty() && !legal.has_pending_litigation {
        return Err(CoreError::Validation(
            "litigationDetails present but hasPendingLitigation is false".to_string(),
        ));
    }
    if !legal.labor_violation_details.is_empty() && !legal.has_labor_violations {
        return Err(CoreError::Validation(
            "laborViolationDetails present but hasLaborViolations is false".to_string(),
        ));
    }
    Ok(())
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "duplicate {} id '{}'",
                what, id
            )));
        }
    }
    Ok(())
}
