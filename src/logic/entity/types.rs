//! Entity Types
//!
//! Data structures for the tracked entity and its sub-records.
//! No validation or scoring logic here.
//!
//! Field names serialize in the persisted document shape (camelCase,
//! SCREAMING_SNAKE_CASE enum tags) so a record round-trips unchanged
//! through the storage collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::lifecycle::InvestigationStatus;
use crate::logic::threat::RiskLevel;

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity of a red flag, drives its scoring contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",     // Blue
            Severity::Warning => "#f59e0b",  // Yellow
            Severity::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RED FLAG
// ============================================================================

/// Category of suspicious behavior. Closed set: unknown categories are
/// rejected at deserialization instead of being silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagCategory {
    NoDigitalPresence,
    FakeCredentials,
    LaborViolations,
    UnpaidWages,
    FraudulentActivity,
    TaxEvasion,
    Harassment,
    WrongfulTermination,
    ShellCompany,
    DefunctBusiness,
    SuspiciousRegistration,
    NoPhysicalAddress,
    Unreachable,
    FakeJobPostings,
    InvestmentScam,
    Other,
}

/// A discrete, timestamped indicator of suspicious behavior.
///
/// Flags are append-only: corrections add a replacement flag and stamp
/// the old one's `superseded_by`, preserving investigative history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlag {
    pub flag_id: String,
    pub category: FlagCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub discovered_date: DateTime<Utc>,
    pub discovered_by: String,
    /// Non-owning cross-reference into the same entity's evidence list.
    #[serde(default)]
    pub evidence_ids: Vec<String>,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<String>,
    /// Set when a later flag corrects this one. Superseded flags stay
    /// in the record but no longer contribute to the score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superseded_by: Option<String>,
}

impl RedFlag {
    pub fn new(
        category: FlagCategory,
        severity: Severity,
        title: &str,
        description: &str,
        discovered_by: &str,
    ) -> Self {
        Self {
            flag_id: format!("flag-{}", Uuid::new_v4()),
            category,
            severity,
            title: title.to_string(),
            description: description.to_string(),
            discovered_date: Utc::now(),
            discovered_by: discovered_by.to_string(),
            evidence_ids: vec![],
            verified: false,
            verification_method: None,
            superseded_by: None,
        }
    }

    /// Link supporting evidence by id
    pub fn with_evidence(mut self, evidence_ids: Vec<String>) -> Self {
        self.evidence_ids = evidence_ids;
        self
    }

    /// Mark as verified with the method used
    pub fn verified_by(mut self, method: &str) -> Self {
        self.verified = true;
        self.verification_method = Some(method.to_string());
        self
    }

    pub fn is_superseded(&self) -> bool {
        self.superseded_by.is_some()
    }
}

// ============================================================================
// DIGITAL FOOTPRINT
// ============================================================================

/// Summary of an entity's detectable online presence.
///
/// Detail fields are gated by their boolean: a url without
/// `has_website` is a validation error, never silently kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalFootprint {
    pub has_website: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub has_social_media: bool,
    #[serde(default)]
    pub social_media_links: Vec<String>,
    pub has_reviews: bool,
    #[serde(default)]
    pub review_platforms: Vec<String>,
    #[serde(default)]
    pub has_business_listings: bool,
    pub search_result_count: u32,
}

// ============================================================================
// LEGAL STATUS
// ============================================================================

/// Summary of an entity's registration and compliance posture.
/// Detail lists must be empty when their governing boolean is false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalStatus {
    pub registration_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_dormant: bool,
    pub is_defunct: bool,
    pub has_pending_litigation: bool,
    #[serde(default)]
    pub litigation_details: Vec<String>,
    pub has_labor_violations: bool,
    #[serde(default)]
    pub labor_violation_details: Vec<String>,
}

// ============================================================================
// EVIDENCE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    Screenshot,
    Document,
    Testimony,
    WebSearch,
    RegistryCheck,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub evidence_id: String,
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub collected_date: DateTime<Utc>,
    pub collected_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Evidence {
    pub fn new(kind: EvidenceKind, description: &str, collected_by: &str) -> Self {
        Self {
            evidence_id: format!("evidence-{}", Uuid::new_v4()),
            kind,
            description: description.to_string(),
            file_path: None,
            url: None,
            collected_date: Utc::now(),
            collected_by: collected_by.to_string(),
            notes: None,
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_file(mut self, file_path: &str) -> Self {
        self.file_path = Some(file_path.to_string());
        self
    }
}

// ============================================================================
// SOURCE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    WebSearch,
    GovernmentRegistry,
    NewsArticle,
    SocialMedia,
    DirectReport,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub source_id: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub date_accessed: DateTime<Utc>,
    pub reliability: Reliability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Source {
    pub fn new(kind: SourceKind, name: &str, reliability: Reliability) -> Self {
        Self {
            source_id: format!("source-{}", Uuid::new_v4()),
            kind,
            name: name.to_string(),
            url: None,
            date_accessed: Utc::now(),
            reliability,
            notes: None,
        }
    }
}

// ============================================================================
// ACTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    ReportFiled,
    InvestigationOpened,
    LegalAction,
    WarningIssued,
    CaseClosed,
    Other,
}

/// A remediation action taken against the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_id: String,
    pub action_type: ActionKind,
    pub description: String,
    pub taken_by: String,
    pub taken_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Action {
    pub fn new(action_type: ActionKind, description: &str, taken_by: &str) -> Self {
        Self {
            action_id: format!("action-{}", Uuid::new_v4()),
            action_type,
            description: description.to_string(),
            taken_by: taken_by.to_string(),
            taken_date: Utc::now(),
            authority: None,
            reference_number: None,
            outcome: None,
            documents: vec![],
        }
    }

    pub fn with_authority(mut self, authority: &str) -> Self {
        self.authority = Some(authority.to_string());
        self
    }

    pub fn with_reference(mut self, reference_number: &str) -> Self {
        self.reference_number = Some(reference_number.to_string());
        self
    }
}

// ============================================================================
// IMPACT
// ============================================================================

/// Who the entity's conduct affected and at what reported cost.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedIndividuals {
    pub count: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_losses: Option<u64>,
}

// ============================================================================
// ENTITY
// ============================================================================

/// The tracked organization.
///
/// `overall_threat_score` and `risk_level` are a derived cache: every
/// mutation operation re-derives them from the raw fields in the same
/// operation, and the loader overwrites whatever was persisted. The
/// cache is never the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    // Identification. `entity_id` is immutable once assigned and
    // globally unique within the collaborator store.
    pub entity_id: String,
    pub legal_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub industry: String,
    pub entity_type: String,

    // Red flags, insertion-ordered and append-only
    #[serde(default)]
    pub red_flags: Vec<RedFlag>,
    pub risk_level: RiskLevel,
    pub overall_threat_score: u8,

    // Investigation lifecycle
    pub investigation_status: InvestigationStatus,
    #[serde(default)]
    pub investigated_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigation_start_date: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,

    // Scoring inputs
    #[serde(default)]
    pub digital_footprint: DigitalFootprint,
    #[serde(default)]
    pub legal_status: LegalStatus,

    // Collected material
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub sources: Vec<Source>,

    // Patterns and impact
    #[serde(default)]
    pub suspicious_patterns: Vec<String>,
    #[serde(default)]
    pub similar_entities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_individuals: Option<AffectedIndividuals>,

    #[serde(default)]
    pub actions_taken: Vec<Action>,

    // Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,
}

impl Entity {
    /// Create an entity in the `Initial` status with empty
    /// sub-collections. The derived score/tier pair is computed
    /// immediately: an empty footprint and an unverified registration
    /// are themselves scoring signals.
    pub fn new(
        entity_id: &str,
        legal_name: &str,
        country: &str,
        industry: &str,
        entity_type: &str,
    ) -> Self {
        let now = Utc::now();
        let mut entity = Self {
            entity_id: entity_id.to_string(),
            legal_name: legal_name.to_string(),
            commercial_name: None,
            tax_id: None,
            country: country.to_string(),
            region: None,
            industry: industry.to_string(),
            entity_type: entity_type.to_string(),
            red_flags: vec![],
            risk_level: RiskLevel::Low,
            overall_threat_score: 0,
            investigation_status: InvestigationStatus::Initial,
            investigated_by: vec![],
            investigation_start_date: None,
            last_updated: now,
            digital_footprint: DigitalFootprint::default(),
            legal_status: LegalStatus::default(),
            evidence: vec![],
            sources: vec![],
            suspicious_patterns: vec![],
            similar_entities: vec![],
            affected_individuals: None,
            actions_taken: vec![],
            reported_by: None,
            reported_date: None,
            tags: vec![],
            notes: String::new(),
            created_at: now,
        };
        entity.recompute_derived();
        entity
    }

    /// Red flags that currently count: everything not superseded.
    pub fn active_red_flags(&self) -> impl Iterator<Item = &RedFlag> {
        self.red_flags.iter().filter(|f| !f.is_superseded())
    }

    pub fn find_evidence(&self, evidence_id: &str) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.evidence_id == evidence_id)
    }

    pub fn find_red_flag(&self, flag_id: &str) -> Option<&RedFlag> {
        self.red_flags.iter().find(|f| f.flag_id == flag_id)
    }
}
