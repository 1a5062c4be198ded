//! Sealing configuration.
//!
//! ```json
//! {
//!   "version": "1",
//!   "evidence_dir": ".governance/evidence",
//!   "governance_dir": ".governance",
//!   "sync_writes": false
//! }
//! ```
//!
//! Every field except `version` may be omitted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the event stream inside `governance_dir`.
pub const EVENT_STREAM_FILE: &str = "event-stream.jsonl";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Config JSON did not parse.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Version is not supported.
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
    /// A field holds an unusable value.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Where evidence records and the event stream live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SealConfig {
    /// Configuration format version.
    pub version: String,
    /// Directory of evidence records.
    #[serde(default = "default_evidence_dir")]
    pub evidence_dir: PathBuf,
    /// Directory holding the event stream.
    #[serde(default = "default_governance_dir")]
    pub governance_dir: PathBuf,
    /// Fsync record files and event lines.
    #[serde(default)]
    pub sync_writes: bool,
}

fn default_evidence_dir() -> PathBuf {
    PathBuf::from(".governance").join("evidence")
}

fn default_governance_dir() -> PathBuf {
    PathBuf::from(".governance")
}

impl Default for SealConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            evidence_dir: default_evidence_dir(),
            governance_dir: default_governance_dir(),
            sync_writes: false,
        }
    }
}

impl SealConfig {
    /// Loads and validates a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses and validates JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SealConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Default layout under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            evidence_dir: root.join(defaults.evidence_dir),
            governance_dir: root.join(defaults.governance_dir),
            ..Self::default()
        }
    }

    /// Checks the version and that no path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.version.as_str() {
            "1" => {}
            v => return Err(ConfigError::UnsupportedVersion(v.to_string())),
        }
        if self.evidence_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("evidence_dir is empty".to_string()));
        }
        if self.governance_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("governance_dir is empty".to_string()));
        }
        Ok(())
    }

    /// Path of the event stream.
    pub fn event_stream_path(&self) -> PathBuf {
        self.governance_dir.join(EVENT_STREAM_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let config = SealConfig::from_json(r#"{"version": "1"}"#).unwrap();
        assert_eq!(config, SealConfig::default());
        assert_eq!(
            config.event_stream_path(),
            Path::new(".governance").join("event-stream.jsonl")
        );
    }

    #[test]
    fn rooted_layout() {
        let config = SealConfig::rooted_at("/srv/repo");
        assert_eq!(config.evidence_dir, Path::new("/srv/repo/.governance/evidence"));
        assert_eq!(
            config.event_stream_path(),
            Path::new("/srv/repo/.governance/event-stream.jsonl")
        );
    }

    #[test]
    fn rejects_bad_versions_paths_and_fields() {
        assert!(matches!(
            SealConfig::from_json(r#"{"version": "2"}"#),
            Err(ConfigError::UnsupportedVersion(v)) if v == "2"
        ));
        assert!(matches!(
            SealConfig::from_json(r#"{"version": "1", "evidence_dir": ""}"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            SealConfig::from_json(r#"{"version": "1", "evidence": "x"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seal.json");
        fs::write(&path, r#"{"version": "1", "sync_writes": true}"#).unwrap();
        assert!(SealConfig::from_file(&path).unwrap().sync_writes);
        assert!(matches!(
            SealConfig::from_file(dir.path().join("absent.json")),
            Err(ConfigError::FileRead(_))
        ));
    }
}
