//! Lifecycle State Machine
//!
//! The transition table and its application to an entity. Entering
//! `Active` for the first time stamps `investigation_start_date`;
//! re-entries never overwrite it.

use chrono::Utc;

use super::types::InvestigationStatus;
use crate::error::{CoreError, CoreResult};
use crate::logic::entity::Entity;

// ============================================================================
// TRANSITION TABLE
// ============================================================================

/// Whether `from -> to` is a legal transition.
pub fn can_transition(from: InvestigationStatus, to: InvestigationStatus) -> bool {
    use InvestigationStatus::*;
    matches!(
        (from, to),
        (Initial, Active)
            | (Active, Verified)
            | (Active, Archived)
            | (Verified, Resolved)
            | (Verified, Active)   // regression on new conflicting evidence
            | (Resolved, Archived)
            | (Archived, Active)   // reopen
    )
}

/// Legal targets from a given state, in table order.
pub fn allowed_targets(from: InvestigationStatus) -> Vec<InvestigationStatus> {
    use InvestigationStatus::*;
    [Initial, Active, Verified, Resolved, Archived]
        .into_iter()
        .filter(|to| can_transition(from, *to))
        .collect()
}

// ============================================================================
// APPLICATION
// ============================================================================

/// Apply a status transition to the entity.
///
/// Fails with `InvalidTransition` naming the attempted pair; on
/// failure the entity is untouched. Every successful transition bumps
/// `last_updated`.
pub fn transition(entity: &mut Entity, target: InvestigationStatus) -> CoreResult<()> {
    let from = entity.investigation_status;
    if !can_transition(from, target) {
        return Err(CoreError::InvalidTransition { from, to: target });
    }

    entity.investigation_status = target;
    let now = Utc::now();
    entity.last_updated = now;

    // First entry into Active starts the investigation clock
    if target == InvestigationStatus::Active && entity.investigation_start_date.is_none() {
        entity.investigation_start_date = Some(now);
    }

    log::info!("entity {}: {} -> {}", entity.entity_id, from, target);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use InvestigationStatus::*;

    fn entity() -> Entity {
        Entity::new("company-lc", "Lifecycle SpA", "Chile", "Tourism", "SPA")
    }

    #[test]
    fn test_transition_table() {
        let legal = [
            (Initial, Active),
            (Active, Verified),
            (Active, Archived),
            (Verified, Resolved),
            (Verified, Active),
            (Resolved, Archived),
            (Archived, Active),
        ];
        for from in [Initial, Active, Verified, Resolved, Archived] {
            for to in [Initial, Active, Verified, Resolved, Archived] {
                assert_eq!(
                    can_transition(from, to),
                    legal.contains(&(from, to)),
                    "table mismatch for {} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_first_activation_sets_start_date() {
        let mut e = entity();
        assert!(e.investigation_start_date.is_none());

        transition(&mut e, Active).unwrap();
        assert_eq!(e.investigation_status, Active);
        assert!(e.investigation_start_date.is_some());
    }

    #[test]
    fn test_illegal_transition_names_pair_and_leaves_state() {
        let mut e = entity();
        transition(&mut e, Active).unwrap();
        transition(&mut e, Archived).unwrap();

        let err = transition(&mut e, Verified).unwrap_err();
        match err {
            CoreError::InvalidTransition { from, to } => {
                assert_eq!(from, Archived);
                assert_eq!(to, Verified);
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
        assert_eq!(e.investigation_status, Archived);
    }

    #[test]
    fn test_reopen_does_not_reset_start_date() {
        let mut e = entity();
        transition(&mut e, Active).unwrap();
        let started = e.investigation_start_date;

        transition(&mut e, Archived).unwrap();
        transition(&mut e, Active).unwrap();

        assert_eq!(e.investigation_start_date, started);
    }

    #[test]
    fn test_regression_from_verified() {
        let mut e = entity();
        transition(&mut e, Active).unwrap();
        transition(&mut e, Verified).unwrap();
        // New conflicting evidence sends the case back
        transition(&mut e, Active).unwrap();
        assert_eq!(e.investigation_status, Active);
    }

    #[test]
    fn test_resolution_path() {
        let mut e = entity();
        for step in [Active, Verified, Resolved, Archived] {
            transition(&mut e, step).unwrap();
        }
        assert_eq!(e.investigation_status, Archived);
        // Initial is never re-enterable
        assert!(allowed_targets(Archived).contains(&Active));
        assert!(!allowed_targets(Archived).contains(&Initial));
    }

    #[test]
    fn test_transition_bumps_last_updated() {
        let mut e = entity();
        let before = e.last_updated;
        transition(&mut e, Active).unwrap();
        assert!(e.last_updated >= before);
    }
}
