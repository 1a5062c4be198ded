//! Evidence record document.

use semseal_canonical::{hash, CanonicalNode, EvidenceId, Language, SemanticFingerprint, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Durable record pairing a fingerprint with its source expressions.
///
/// Stored as one JSON document per fingerprint. Unknown fields are rejected
/// so a record written by an incompatible version fails loudly on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvidenceRecord {
    /// Fingerprint the record is addressed by.
    pub semantic_hash: SemanticFingerprint,
    /// Tree the fingerprint was computed from.
    pub canonical_ast: CanonicalNode,
    /// Source text per language.
    pub expressions: BTreeMap<Language, String>,
    /// When the record was written (UTC, `Z` suffix).
    pub sealed_at: Timestamp,
    /// Identifier of this seal; distinct across re-seals.
    pub evidence_id: EvidenceId,
    /// Lexicon the fingerprint was derived with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_version: Option<String>,
}

impl EvidenceRecord {
    /// Checks the record's internal consistency against `expected`.
    ///
    /// Returns the reason for the first violation found.
    pub fn validate(&self, expected: &SemanticFingerprint) -> Result<(), String> {
        if self.semantic_hash != *expected {
            return Err(format!(
                "semantic_hash {} does not match requested {}",
                self.semantic_hash, expected
            ));
        }
        if !self.canonical_ast.is_well_formed() {
            return Err("canonical_ast is not a SEQUENCE of LEAF nodes".to_string());
        }
        let actual = hash(&self.canonical_ast).map_err(|err| err.to_string())?;
        if actual != *expected {
            return Err(format!("canonical_ast hashes to {}", actual));
        }
        if self.expressions.is_empty() {
            return Err("expressions is empty".to_string());
        }
        Ok(())
    }

    /// Languages of the stored expressions, sorted.
    pub fn languages(&self) -> Vec<Language> {
        self.expressions.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semseal_canonical::{build, tokenize};

    fn record(text: &str) -> EvidenceRecord {
        let tree = build(&tokenize(text, Language::En).tokens);
        EvidenceRecord {
            semantic_hash: hash(&tree).unwrap(),
            canonical_ast: tree,
            expressions: BTreeMap::from([(Language::En, text.to_string())]),
            sealed_at: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
            evidence_id: EvidenceId::parse("ev-1").unwrap(),
            lexicon_version: Some("lexicon-v1".to_string()),
        }
    }

    #[test]
    fn consistent_record_validates() {
        let r = record("restart server");
        assert_eq!(r.validate(&r.semantic_hash.clone()), Ok(()));
    }

    #[test]
    fn tampered_tree_is_rejected() {
        let mut r = record("restart server");
        let expected = r.semantic_hash.clone();
        r.canonical_ast = record("stop server").canonical_ast;
        assert!(r.validate(&expected).unwrap_err().contains("hashes to"));
    }

    #[test]
    fn wrong_address_and_empty_expressions_are_rejected() {
        let r = record("restart server");
        let other = record("stop server").semantic_hash;
        assert!(r.validate(&other).is_err());

        let mut empty = record("restart server");
        empty.expressions.clear();
        assert_eq!(
            empty.validate(&empty.semantic_hash.clone()),
            Err("expressions is empty".to_string())
        );
    }

    #[test]
    fn serializes_language_keys_as_tags() {
        let value = serde_json::to_value(record("restart server")).unwrap();
        assert_eq!(value["expressions"]["en"], "restart server");
        assert_eq!(value["canonical_ast"]["type"], "SEQUENCE");
        assert!(value["semantic_hash"].as_str().unwrap().starts_with("sha256:"));
    }
}
