//! Investigation Lifecycle
//!
//! State machine governing an entity's investigation status. Illegal
//! transitions fail with `InvalidTransitionError` naming the attempted
//! pair and leave the entity unchanged.
//!
//! ## Structure
//! - `types`: InvestigationStatus (no logic)
//! - `machine`: Transition table and application

pub mod machine;
pub mod types;

pub use machine::{allowed_targets, can_transition, transition};
pub use types::InvestigationStatus;
