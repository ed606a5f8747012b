//! Threat Module
//!
//! Derives the threat score and risk tier from an entity's accumulated
//! state. Scoring is a full recompute on every call - there is no
//! incremental path, so a correction to any input is reflected without
//! special-casing.
//!
//! ## Structure
//! - `types`: RiskLevel, ScoreBreakdown, ThreatAssessment (no logic)
//! - `rules`: Point values and tier boundaries (no logic)
//! - `scoring`: Score computation
//! - `classifier`: Score -> tier mapping

pub mod classifier;
pub mod rules;
pub mod scoring;
pub mod types;

pub use classifier::classify;
pub use scoring::{assess, threat_score};
pub use types::{RiskLevel, ScoreBreakdown, ThreatAssessment};
