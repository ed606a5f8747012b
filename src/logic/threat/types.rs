//! Threat Types
//!
//! Core types for scoring and classification. No logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk tier, derived solely from the threat score.
///
/// Ordinal: Low < Medium < High < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",      // Green
            RiskLevel::Medium => "#f59e0b",   // Yellow
            RiskLevel::High => "#f97316",     // Orange
            RiskLevel::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// How the final score was assembled. `raw_total` may exceed 100;
/// `final_score` is the clamped value that gets persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub flag_points: u32,
    pub footprint_penalty: u32,
    pub legal_penalty: u32,
    pub raw_total: u32,
    pub final_score: u8,
}

// ============================================================================
// THREAT ASSESSMENT
// ============================================================================

/// Full scoring result with human-readable reasons, for consumers that
/// need to explain the number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatAssessment {
    pub score: u8,
    pub risk: RiskLevel,
    pub reasons: Vec<String>,
    pub breakdown: ScoreBreakdown,
}
