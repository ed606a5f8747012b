//! Record Revival
//!
//! Ingests an entity from the serialized JSON shape used by the
//! persistence collaborator. Timestamp fields arrive as ISO-8601
//! strings and are normalized recursively, including every nested
//! sub-record, before deserialization. The persisted score/tier cache
//! is never trusted: a loaded entity always carries freshly derived
//! values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::logic::entity::{validate_entity, Entity};

/// ISO-8601 date or datetime. Fractional seconds and either a Z or a
/// numeric offset are accepted; a bare date gets midnight UTC.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(T\d{2}:\d{2}:\d{2}(\.\d{1,9})?(Z|[+-]\d{2}:\d{2}))?$")
        .expect("ISO date pattern is valid")
});

// ============================================================================
// PARSING
// ============================================================================

/// Parse an entity from raw JSON text.
pub fn parse_entity(raw: &str) -> CoreResult<Entity> {
    let value: Value = serde_json::from_str(raw)?;
    entity_from_value(value)
}

/// Build an entity from an already-parsed JSON document.
///
/// Normalizes date strings, deserializes (unknown enum variants are a
/// validation failure, not a silent acceptance), validates the
/// cross-record invariants, and re-derives the score/tier pair.
pub fn entity_from_value(mut value: Value) -> CoreResult<Entity> {
    revive_dates(&mut value);

    let mut entity: Entity = serde_json::from_value(value)
        .map_err(|e| CoreError::Validation(format!("malformed entity record: {}", e)))?;
    validate_entity(&entity)?;

    let persisted = entity.overall_threat_score;
    entity.recompute_derived();
    if entity.overall_threat_score != persisted {
        log::warn!(
            "entity {}: persisted score {} stale, recomputed {}",
            entity.entity_id,
            persisted,
            entity.overall_threat_score
        );
    }

    Ok(entity)
}

/// Serialize an entity back into the persisted document shape.
pub fn entity_to_value(entity: &Entity) -> CoreResult<Value> {
    Ok(serde_json::to_value(entity)?)
}

// ============================================================================
// DATE REVIVAL
// ============================================================================

/// Recursively rewrite ISO-8601 date strings into full RFC 3339 so
/// chrono accepts them. Mirrors the collaborator's convention of
/// storing native date values rather than strings.
fn revive_dates(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (_, v) in map.iter_mut() {
                revive_dates(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                revive_dates(v);
            }
        }
        Value::String(s) => {
            if ISO_DATE.is_match(s) && !s.contains('T') {
                // Bare date: pin to midnight UTC
                *s = format!("{}T00:00:00Z", s);
            }
        }
        _ => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::lifecycle::InvestigationStatus;
    use crate::logic::threat::RiskLevel;

    fn sample_record() -> String {
        r#"{
            "entityId": "company-1731240000000",
            "legalName": "Rampane SpA",
            "commercialName": "Rampane Adventure",
            "country": "Chile",
            "region": "Patagonia",
            "industry": "Tourism",
            "entityType": "SPA",
            "redFlags": [{
                "flagId": "flag-001",
                "category": "NO_DIGITAL_PRESENCE",
                "severity": "CRITICAL",
                "title": "No verifiable online presence",
                "description": "Zero search results for the legal name",
                "discoveredDate": "2025-11-10T14:30:00.000Z",
                "discoveredBy": "hannibal",
                "evidenceIds": ["evidence-001"],
                "verified": true,
                "verificationMethod": "web search"
            }],
            "riskLevel": "LOW",
            "overallThreatScore": 3,
            "investigationStatus": "ACTIVE",
            "investigatedBy": ["hannibal"],
            "investigationStartDate": "2025-11-10T14:00:00.000Z",
            "lastUpdated": "2025-11-11T09:00:00.000Z",
            "digitalFootprint": {
                "hasWebsite": false,
                "hasSocialMedia": false,
                "hasReviews": false,
                "hasBusinessListings": false,
                "searchResultCount": 0
            },
            "legalStatus": {
                "registrationVerified": false,
                "registrationDate": "2024-03-15",
                "isActive": false,
                "isDormant": true,
                "isDefunct": false,
                "hasPendingLitigation": false,
                "litigationDetails": [],
                "hasLaborViolations": false,
                "laborViolationDetails": []
            },
            "evidence": [{
                "evidenceId": "evidence-001",
                "type": "WEB_SEARCH",
                "description": "Search returned no results",
                "collectedDate": "2025-11-10T14:10:00.000Z",
                "collectedBy": "hannibal"
            }],
            "sources": [{
                "sourceId": "source-001",
                "type": "GOVERNMENT_REGISTRY",
                "name": "SII",
                "url": "https://www.sii.cl",
                "dateAccessed": "2025-11-10T14:20:00.000Z",
                "reliability": "HIGH"
            }],
            "actionsTaken": [{
                "actionId": "action-001",
                "actionType": "INVESTIGATION_OPENED",
                "description": "Opened after worker report",
                "takenBy": "hannibal",
                "takenDate": "2025-11-10T14:00:00.000Z",
                "authority": "Dirección del Trabajo"
            }],
            "tags": ["fraud", "labor-abuse"],
            "notes": "Reported by former employee",
            "createdAt": "2025-11-10T14:00:00.000Z"
        }"#
        .to_string()
    }

    #[test]
    fn test_parse_revives_nested_dates() {
        let entity = parse_entity(&sample_record()).unwrap();
        assert_eq!(entity.entity_id, "company-1731240000000");
        assert_eq!(entity.investigation_status, InvestigationStatus::Active);
        assert_eq!(
            entity.red_flags[0].discovered_date.to_rfc3339(),
            "2025-11-10T14:30:00+00:00"
        );
        assert_eq!(entity.evidence[0].collected_by, "hannibal");
        // Bare date pinned to midnight UTC
        let registered = entity.legal_status.registration_date.unwrap();
        assert_eq!(registered.to_rfc3339(), "2024-03-15T00:00:00+00:00");
    }

    #[test]
    fn test_stale_persisted_cache_is_overwritten() {
        // The record claims score 3 / LOW; raw fields say otherwise:
        // 25 flag + 60 footprint + 30 legal (unverified + dormant) = 115
        let entity = parse_entity(&sample_record()).unwrap();
        assert_eq!(entity.overall_threat_score, 100);
        assert_eq!(entity.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_unknown_enum_variant_rejected() {
        let raw = sample_record().replace("NO_DIGITAL_PRESENCE", "COSMIC_RAYS");
        let err = parse_entity(&raw).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_dangling_reference_rejected_on_load() {
        let raw = sample_record().replace("\"evidence-001\"]", "\"evidence-999\"]");
        let err = parse_entity(&raw).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_gated_detail_rejected_on_load() {
        let raw = sample_record().replace(
            "\"litigationDetails\": []",
            "\"litigationDetails\": [\"orphan detail\"]",
        );
        let err = parse_entity(&raw).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_unparseable_input_is_malformed() {
        let err = parse_entity("not json at all").unwrap_err();
        assert!(matches!(err, CoreError::Malformed(_)));
    }

    #[test]
    fn test_round_trip_preserves_record() {
        let entity = parse_entity(&sample_record()).unwrap();
        let value = entity_to_value(&entity).unwrap();
        let again = entity_from_value(value).unwrap();
        assert_eq!(again.entity_id, entity.entity_id);
        assert_eq!(again.overall_threat_score, entity.overall_threat_score);
        assert_eq!(again.red_flags.len(), entity.red_flags.len());
        assert_eq!(again.last_updated, entity.last_updated);
    }
}
