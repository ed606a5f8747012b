//! FraudWatch Core
//!
//! Tracks entities under investigation (organizations suspected of
//! fraud, labor abuse, or related misconduct), accumulates structured
//! evidence against them, and derives a normalized threat score and
//! risk tier used to prioritize follow-up action.
//!
//! ## Structure
//! - `logic::entity` - Entity model, sub-records, validation, mutation ops
//! - `logic::threat` - Threat scoring engine and risk classifier
//! - `logic::lifecycle` - Investigation status state machine
//! - `logic::record` - JSON record revival for the persistence collaborator
//! - `storage` - Minimal store contract + in-memory implementation
//!
//! The core is pure, synchronous computation: no I/O, no configuration,
//! no retries. Persistence and multi-writer coordination belong to the
//! storage collaborator.

pub mod error;
pub mod logic;
pub mod storage;

pub use error::{CoreError, CoreResult};
pub use logic::entity::{
    validate_entity, Action, ActionKind, AffectedIndividuals, DigitalFootprint, Entity, Evidence,
    EvidenceKind, FlagCategory, LegalStatus, RedFlag, Reliability, Severity, Source, SourceKind,
};
pub use logic::lifecycle::{can_transition, transition, InvestigationStatus};
pub use logic::record::{entity_from_value, entity_to_value, parse_entity};
pub use logic::threat::{assess, classify, threat_score, RiskLevel, ScoreBreakdown, ThreatAssessment};
pub use storage::{fetch_required, EntityStore, MemoryStore, UpsertOutcome};
