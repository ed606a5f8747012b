//! Storage Collaborator Contract
//!
//! The minimal interface the core depends on: lookup by identifier and
//! an upsert keyed uniquely by identifier. Persistence, retries, and
//! multi-writer coordination are collaborator concerns; the core only
//! requires that writes are serialized per identifier so concurrent
//! additions are never silently lost.

pub mod memory;

use crate::error::{CoreError, CoreResult};
use crate::logic::entity::Entity;

pub use memory::MemoryStore;

/// Outcome of an upsert, in the collaborator's insert-or-replace terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Store contract the core is written against.
pub trait EntityStore {
    /// Look up an entity by its immutable identifier.
    fn find_by_identifier(&self, entity_id: &str) -> CoreResult<Option<Entity>>;

    /// Insert or replace the record keyed by `entity_id`.
    fn upsert(&self, entity: Entity) -> CoreResult<UpsertOutcome>;
}

/// Lookup that treats absence as an error, for callers that require
/// the record to exist. Not retried by the core.
pub fn fetch_required(store: &dyn EntityStore, entity_id: &str) -> CoreResult<Entity> {
    store
        .find_by_identifier(entity_id)?
        .ok_or_else(|| CoreError::NotFound(format!("entity '{}'", entity_id)))
}
