use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses a validated identifier from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    Timestamp,
    "UTC RFC3339 timestamp with `Z` suffix.",
    r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?Z$"
);
newtype!(
    EvidenceId,
    "Opaque identifier of one sealing act (`ev-<uuid>` when minted by the store).",
    r"^[A-Za-z0-9][A-Za-z0-9_.:-]{0,127}$"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_requires_utc_suffix() {
        assert!(Timestamp::parse("2024-01-01T00:00:00Z").is_ok());
        assert!(Timestamp::parse("2024-01-01T00:00:00.123456Z").is_ok());
        assert!(Timestamp::parse("2024-01-01T00:00:00+00:00").is_err());
    }

    #[test]
    fn evidence_id_rejects_path_separators() {
        assert!(EvidenceId::parse("ev-0b7e4c1e-8f4d-4a57-9d0e-3f3c1b2a9e11").is_ok());
        assert!(EvidenceId::parse("../escape").is_err());
        assert!(EvidenceId::parse("").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<Timestamp, _> = serde_json::from_str(r#""2024-05-06T07:08:09Z""#);
        assert!(ok.is_ok());
        let bad: Result<Timestamp, _> = serde_json::from_str(r#""yesterday""#);
        assert!(bad.is_err());
    }
}
