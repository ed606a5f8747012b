//! Entity Model
//!
//! The shape and invariants of a tracked entity and its sub-records
//! (red flags, evidence, sources, remediation actions).
//!
//! ## Structure
//! - `types`: Data structures only, no logic
//! - `validate`: Invariant checks, run before any mutation is applied
//! - `ops`: Mutation operations with recompute-on-write
//!
//! ## Usage
//! ```ignore
//! let mut entity = Entity::new("company-001", "Rampane SpA", "Chile", "Tourism", "SPA");
//! entity.add_red_flag(RedFlag::new(
//!     FlagCategory::NoDigitalPresence,
//!     Severity::Critical,
//!     "No verifiable online presence",
//!     "Zero search results for the legal name",
//!     "hannibal",
//! ))?;
//! ```

pub mod ops;
pub mod types;
pub mod validate;


pub use types::{
    Action, ActionKind, AffectedIndividuals, DigitalFootprint, Entity, Evidence, EvidenceKind,
    FlagCategory, LegalStatus, RedFlag, Reliability, Severity, Source, SourceKind,
};
pub use validate::validate_entity;
