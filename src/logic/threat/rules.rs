//! Threat Scoring Rules & Boundaries
//!
//! Point values for the scoring engine and the fixed tier boundaries
//! for the classifier. No logic here - only constants.

// ============================================================================
// RED FLAG POINTS (per flag, by severity)
// ============================================================================

pub const CRITICAL_FLAG_POINTS: u32 = 25;
pub const WARNING_FLAG_POINTS: u32 = 15;
pub const INFO_FLAG_POINTS: u32 = 5;

// ============================================================================
// DIGITAL FOOTPRINT PENALTIES
// ============================================================================

pub const NO_WEBSITE_PENALTY: u32 = 20;
pub const NO_SOCIAL_MEDIA_PENALTY: u32 = 15;
pub const NO_REVIEWS_PENALTY: u32 = 10;
pub const LOW_SEARCH_PRESENCE_PENALTY: u32 = 15;

/// Below this many search results the entity counts as near-invisible
pub const LOW_SEARCH_RESULT_THRESHOLD: u32 = 5;

// ============================================================================
// LEGAL STATUS PENALTIES
// ============================================================================

pub const UNVERIFIED_REGISTRATION_PENALTY: u32 = 20;
pub const DORMANT_PENALTY: u32 = 10;
pub const LABOR_VIOLATION_PENALTY: u32 = 25;
pub const PENDING_LITIGATION_PENALTY: u32 = 15;

// ============================================================================
// SCORE DOMAIN & TIER BOUNDARIES
// ============================================================================

/// Scores saturate here; the raw sum is never persisted.
pub const MAX_THREAT_SCORE: u8 = 100;

/// At or above this score = Critical
pub const CRITICAL_RISK_MIN: u8 = 76;

/// At or above this score = High (below Critical)
pub const HIGH_RISK_MIN: u8 = 51;

/// At or above this score = Medium (below High)
pub const MEDIUM_RISK_MIN: u8 = 26;
