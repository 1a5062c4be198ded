//! Semantic fingerprints.
//!
//! A fingerprint is `sha256(canonical_json(tree))`, formatted as
//! `"<algorithm_tag>:<hex digest>"`. Both parts participate in equality.

use crate::ast::CanonicalNode;
use crate::encoder::{to_canonical_json, EncodingError};
use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// SHA-256 (the only algorithm today).
    #[serde(rename = "sha256")]
    Sha256,
}

impl DigestAlg {
    /// Tag written before the `:` separator.
    pub fn tag(self) -> &'static str {
        match self {
            DigestAlg::Sha256 => "sha256",
        }
    }

    fn parse(tag: &str) -> Result<Self, ValidationError> {
        match tag {
            "sha256" => Ok(DigestAlg::Sha256),
            other => Err(ValidationError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Algorithm tag plus lowercase hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticFingerprint {
    alg: DigestAlg,
    hex: String,
}

fn hex_digest() -> &'static Regex {
    static HEX_DIGEST: OnceLock<Regex> = OnceLock::new();
    HEX_DIGEST.get_or_init(|| Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex"))
}

impl SemanticFingerprint {
    /// Constructs a validated fingerprint.
    pub fn new(alg: DigestAlg, hex: impl Into<String>) -> Result<Self, ValidationError> {
        let hex = hex.into();
        if !hex_digest().is_match(&hex) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: hex,
            });
        }
        Ok(Self { alg, hex })
    }

    /// Parses `"<algorithm_tag>:<hex digest>"`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let (tag, hex) = value
            .split_once(':')
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "fingerprint",
                value: value.to_string(),
            })?;
        Self::new(DigestAlg::parse(tag)?, hex)
    }

    /// Digest algorithm.
    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    /// Lowercase hex digest.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Filesystem-safe form: the `:` separator replaced with `_`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.alg.tag(), self.hex)
    }
}

impl fmt::Display for SemanticFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alg.tag(), self.hex)
    }
}

impl FromStr for SemanticFingerprint {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SemanticFingerprint {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SemanticFingerprint> for String {
    fn from(value: SemanticFingerprint) -> Self {
        value.to_string()
    }
}

/// Hashes a canonical tree.
pub fn hash(node: &CanonicalNode) -> Result<SemanticFingerprint, EncodingError> {
    let bytes = to_canonical_json(node)?;
    let digest = Sha256::digest(&bytes);
    Ok(SemanticFingerprint {
        alg: DigestAlg::Sha256,
        hex: hex::encode(digest),
    })
}
