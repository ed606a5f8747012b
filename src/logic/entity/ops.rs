//! Entity Mutation Operations
//!
//! Append-only additions to the sub-collections and replacement of the
//! scoring inputs. Every operation validates first, applies, bumps
//! `last_updated`, and re-derives the score/tier cache in the same
//! operation - a record never leaves an op with raw fields and cache
//! out of sync.

use chrono::Utc;

use super::types::{Action, ActionKind, DigitalFootprint, Entity, Evidence, LegalStatus, RedFlag, Source};
use super::validate;
use crate::error::{CoreError, CoreResult};
use crate::logic::threat;

impl Entity {
    /// Append a red flag. The flag's evidence references must resolve
    /// against evidence already on this entity.
    pub fn add_red_flag(&mut self, flag: RedFlag) -> CoreResult<()> {
        if self.find_red_flag(&flag.flag_id).is_some() {
            return Err(CoreError::Validation(format!(
                "duplicate red flag id '{}'",
                flag.flag_id
            )));
        }
        if flag.superseded_by.is_some() {
            return Err(CoreError::Validation(format!(
                "new red flag '{}' cannot arrive already superseded",
                flag.flag_id
            )));
        }
        validate::validate_flag_references(&flag, self)?;

        log::debug!(
            "entity {}: adding {} flag '{}'",
            self.entity_id,
            flag.severity,
            flag.title
        );
        self.red_flags.push(flag);
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    /// Correct an existing flag without destroying history: the
    /// replacement is appended and the old flag is stamped with its id.
    /// Superseded flags stop contributing to the score.
    pub fn supersede_red_flag(&mut self, flag_id: &str, replacement: RedFlag) -> CoreResult<()> {
        let old = self
            .find_red_flag(flag_id)
            .ok_or_else(|| CoreError::Validation(format!("unknown red flag id '{}'", flag_id)))?;
        if old.is_superseded() {
            return Err(CoreError::Validation(format!(
                "red flag '{}' is already superseded",
                flag_id
            )));
        }
        if self.find_red_flag(&replacement.flag_id).is_some() {
            return Err(CoreError::Validation(format!(
                "duplicate red flag id '{}'",
                replacement.flag_id
            )));
        }
        if replacement.superseded_by.is_some() {
            return Err(CoreError::Validation(format!(
                "replacement flag '{}' cannot arrive already superseded",
                replacement.flag_id
            )));
        }
        validate::validate_flag_references(&replacement, self)?;

        let replacement_id = replacement.flag_id.clone();
        self.red_flags.push(replacement);
        if let Some(old) = self.red_flags.iter_mut().find(|f| f.flag_id == flag_id) {
            old.superseded_by = Some(replacement_id.clone());
        }
        log::info!(
            "entity {}: flag '{}' superseded by '{}'",
            self.entity_id,
            flag_id,
            replacement_id
        );
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    pub fn add_evidence(&mut self, evidence: Evidence) -> CoreResult<()> {
        if self.find_evidence(&evidence.evidence_id).is_some() {
            return Err(CoreError::Validation(format!(
                "duplicate evidence id '{}'",
                evidence.evidence_id
            )));
        }
        self.evidence.push(evidence);
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    pub fn add_source(&mut self, source: Source) -> CoreResult<()> {
        if self.sources.iter().any(|s| s.source_id == source.source_id) {
            return Err(CoreError::Validation(format!(
                "duplicate source id '{}'",
                source.source_id
            )));
        }
        self.sources.push(source);
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    /// Record a remediation action. Opening an investigation also
    /// registers the actor on the case.
    pub fn add_action(&mut self, action: Action) -> CoreResult<()> {
        if self
            .actions_taken
            .iter()
            .any(|a| a.action_id == action.action_id)
        {
            return Err(CoreError::Validation(format!(
                "duplicate action id '{}'",
                action.action_id
            )));
        }
        if action.action_type == ActionKind::InvestigationOpened
            && !self.investigated_by.contains(&action.taken_by)
        {
            self.investigated_by.push(action.taken_by.clone());
        }
        self.actions_taken.push(action);
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    /// Replace the digital footprint summary.
    pub fn update_digital_footprint(&mut self, footprint: DigitalFootprint) -> CoreResult<()> {
        validate::validate_digital_footprint(&footprint)?;
        self.digital_footprint = footprint;
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    /// Replace the legal status summary.
    pub fn update_legal_status(&mut self, legal: LegalStatus) -> CoreResult<()> {
        validate::validate_legal_status(&legal)?;
        self.legal_status = legal;
        self.touch();
        self.recompute_derived();
        Ok(())
    }

    /// Re-derive the cached score and tier from the raw fields.
    pub fn recompute_derived(&mut self) {
        self.overall_threat_score = threat::threat_score(self);
        self.risk_level = threat::classify(self.overall_threat_score);
        log::debug!(
            "entity {}: score {} -> {}",
            self.entity_id,
            self.overall_threat_score,
            self.risk_level
        );
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
