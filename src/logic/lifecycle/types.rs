//! Lifecycle Types

use serde::{Deserialize, Serialize};

/// Lifecycle state of an entity's case.
///
/// `Archived` is not strictly terminal: an archived case can be
/// reopened, but only by an explicit transition back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationStatus {
    /// Entry state: record created, investigation not yet started
    Initial,
    /// Investigation in progress
    Active,
    /// Findings verified against evidence
    Verified,
    /// Case concluded
    Resolved,
    /// Shelved; reopenable via Active only
    Archived,
}

impl InvestigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestigationStatus::Initial => "INITIAL",
            InvestigationStatus::Active => "ACTIVE",
            InvestigationStatus::Verified => "VERIFIED",
            InvestigationStatus::Resolved => "RESOLVED",
            InvestigationStatus::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
