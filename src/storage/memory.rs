//! In-Memory Store
//!
//! HashMap behind a mutex. Backs tests and embedders that do not need
//! durable persistence; the single lock serializes writes per
//! identifier, which is exactly the consistency discipline the core
//! expects from any collaborator.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{EntityStore, UpsertOutcome};
use crate::error::CoreResult;
use crate::logic::entity::{validate_entity, Entity};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl EntityStore for MemoryStore {
    fn find_by_identifier(&self, entity_id: &str) -> CoreResult<Option<Entity>> {
        Ok(self.entries.lock().get(entity_id).cloned())
    }

    fn upsert(&self, entity: Entity) -> CoreResult<UpsertOutcome> {
        // A record violating the model invariants never reaches the map
        validate_entity(&entity)?;

        let mut entries = self.entries.lock();
        let outcome = if entries.contains_key(&entity.entity_id) {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Inserted
        };
        log::info!(
            "store: {} entity {} (score {}, {})",
            match outcome {
                UpsertOutcome::Inserted => "inserted",
                UpsertOutcome::Updated => "updated",
            },
            entity.entity_id,
            entity.overall_threat_score,
            entity.risk_level
        );
        entries.insert(entity.entity_id.clone(), entity);
        Ok(outcome)
    }
}

// ============================================================================
// TESTS
// ============================================================================
