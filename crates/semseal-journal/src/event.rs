use semseal_canonical::{EvidenceId, Language, SemanticFingerprint, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of the event stream.
///
/// The stream stores arbitrary JSON objects; the only structural
/// requirement is a string `event_type`. Typed views such as [`SealEvent`]
/// are parsed on demand.
pub type EventJson = Value;

/// Event type written when evidence is sealed.
pub const EVIDENCE_SEALED: &str = "evidence_sealed";

/// Typed form of an `evidence_sealed` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealEvent {
    /// Always [`EVIDENCE_SEALED`].
    pub event_type: String,
    /// Identifier of the evidence record written by this seal.
    pub evidence_id: EvidenceId,
    /// Fingerprint the record is stored under.
    pub fingerprint: SemanticFingerprint,
    /// Languages of the sealed expressions, sorted.
    pub languages: Vec<Language>,
    /// When the seal happened.
    pub sealed_at: Timestamp,
}

impl SealEvent {
    /// Creates an `evidence_sealed` event.
    pub fn new(
        evidence_id: EvidenceId,
        fingerprint: SemanticFingerprint,
        mut languages: Vec<Language>,
        sealed_at: Timestamp,
    ) -> Self {
        languages.sort();
        languages.dedup();
        Self {
            event_type: EVIDENCE_SEALED.to_string(),
            evidence_id,
            fingerprint,
            languages,
            sealed_at,
        }
    }

    /// Parses a generic event; `None` for other event types or bad shapes.
    pub fn from_event(event: &EventJson) -> Option<Self> {
        if event_type(event) != Some(EVIDENCE_SEALED) {
            return None;
        }
        serde_json::from_value(event.clone()).ok()
    }
}

/// The `event_type` of an event, if it has one.
pub fn event_type(event: &EventJson) -> Option<&str> {
    event.get("event_type").and_then(Value::as_str)
}

/// Whether a JSON value is an object carrying a string `event_type`.
pub fn is_valid_event_structure(value: &EventJson) -> bool {
    value.is_object() && event_type(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fingerprint() -> SemanticFingerprint {
        SemanticFingerprint::parse(&format!("sha256:{}", "ab".repeat(32))).unwrap()
    }

    #[test]
    fn seal_event_round_trips_through_json() {
        let event = SealEvent::new(
            EvidenceId::parse("ev-1").unwrap(),
            fingerprint(),
            vec![Language::Zh, Language::En, Language::Zh],
            Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
        );
        assert_eq!(event.languages, vec![Language::En, Language::Zh]);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], EVIDENCE_SEALED);
        assert_eq!(value["languages"], json!(["en", "zh"]));
        assert_eq!(SealEvent::from_event(&value), Some(event));
    }

    #[test]
    fn other_event_types_are_not_seal_events() {
        let other = json!({"event_type": "note", "evidence_id": "ev-1"});
        assert!(is_valid_event_structure(&other));
        assert_eq!(SealEvent::from_event(&other), None);
        assert!(!is_valid_event_structure(&json!({"kind": "x"})));
        assert!(!is_valid_event_structure(&json!(["event_type"])));
    }
}
