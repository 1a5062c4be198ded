//! Content-addressed evidence store.

use crate::error::StoreError;
use crate::filter::{FilteredReader, FingerprintFilter};
use crate::journal::{JournalBackendReader, JournalBackendWriter};
use crate::record::EvidenceRecord;
use crate::traits::StoreWriter;
use crate::view::seal_history;
use chrono::{SecondsFormat, Utc};
use semseal_canonical::{
    analyze, hash, CanonicalNode, CoverageStatus, EvidenceId, Language, SemanticFingerprint,
    Timestamp, LEXICON_VERSION,
};
use semseal_journal::{ReadMode, SealEvent, WriteOptions};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Evidence records on disk plus the shared event stream.
///
/// Records live at `<evidence_dir>/<fingerprint with ':' → '_'>.json`; the
/// path depends on the fingerprint only. Directories are created on the
/// first seal.
#[derive(Debug, Clone)]
pub struct EvidenceStore {
    evidence_dir: PathBuf,
    event_stream: PathBuf,
    options: WriteOptions,
}

impl EvidenceStore {
    /// Creates a store; nothing is touched on disk until the first seal.
    pub fn new(
        evidence_dir: impl Into<PathBuf>,
        event_stream: impl Into<PathBuf>,
        options: WriteOptions,
    ) -> Self {
        Self {
            evidence_dir: evidence_dir.into(),
            event_stream: event_stream.into(),
            options,
        }
    }

    /// Directory holding evidence records.
    pub fn evidence_dir(&self) -> &Path {
        &self.evidence_dir
    }

    /// Path of the event stream.
    pub fn event_stream(&self) -> &Path {
        &self.event_stream
    }

    /// Path of the record for `fingerprint`.
    pub fn record_path(&self, fingerprint: &SemanticFingerprint) -> PathBuf {
        self.evidence_dir
            .join(format!("{}.json", fingerprint.file_stem()))
    }

    /// Writes the record for `fingerprint` and appends an `evidence_sealed`
    /// event.
    ///
    /// When `tree` is `None` it is built from the first expression in
    /// language order. The tree must hash to `fingerprint`. An existing record
    /// for the same fingerprint is replaced; each seal gets its own event.
    ///
    /// # Errors
    ///
    /// I/O failures are returned as-is and nothing is retried. If the record
    /// was written but the event append failed, the record stays in place and
    /// [`StoreError::EventNotRecorded`] is returned.
    pub fn seal(
        &self,
        fingerprint: &SemanticFingerprint,
        expressions: &BTreeMap<Language, String>,
        tree: Option<CanonicalNode>,
    ) -> Result<PathBuf, StoreError> {
        let span = tracing::info_span!("seal", fingerprint = %fingerprint);
        let _enter = span.enter();

        let (language, text) = expressions.iter().next().ok_or(StoreError::NoExpressions)?;
        let tree = match tree {
            Some(tree) => tree,
            None => analyze(text, Some(*language))?.tree,
        };
        let actual = hash(&tree)?;
        if actual != *fingerprint {
            return Err(StoreError::FingerprintMismatch {
                expected: fingerprint.clone(),
                actual,
            });
        }

        let record = EvidenceRecord {
            semantic_hash: fingerprint.clone(),
            canonical_ast: tree,
            expressions: expressions.clone(),
            sealed_at: Timestamp::parse(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))?,
            evidence_id: EvidenceId::parse(format!("ev-{}", Uuid::new_v4()))?,
            lexicon_version: Some(LEXICON_VERSION.to_string()),
        };

        fs::create_dir_all(&self.evidence_dir)?;
        let path = self.record_path(fingerprint);
        self.write_atomically(&path, &serde_json::to_vec_pretty(&record)?)?;

        let event = SealEvent::new(
            record.evidence_id.clone(),
            fingerprint.clone(),
            record.languages(),
            record.sealed_at.clone(),
        );
        if let Err(err) = self.append_event(&event) {
            tracing::error!(
                evidence_id = %record.evidence_id,
                path = %path.display(),
                error = %err,
                "evidence record written without seal event"
            );
            return Err(StoreError::EventNotRecorded {
                record: path,
                source: Box::new(err),
            });
        }

        tracing::info!(
            evidence_id = %record.evidence_id,
            languages = ?record.languages(),
            path = %path.display(),
            "sealed evidence"
        );
        Ok(path)
    }

    fn append_event(&self, event: &SealEvent) -> Result<(), StoreError> {
        if let Some(parent) = self.event_stream.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = JournalBackendWriter::open(&self.event_stream, self.options.clone())?;
        writer.append(&serde_json::to_value(event)?)?;
        writer.finish()
    }

    fn write_atomically(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        let tmp = self
            .evidence_dir
            .join(format!(".tmp-{}.json", Uuid::new_v4()));
        let result = (|| -> io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            if self.options.sync {
                file.sync_all()?;
            }
            fs::rename(&tmp, path)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        Ok(result?)
    }

    /// Loads the record for `fingerprint`.
    ///
    /// Returns `Ok(None)` if it was never sealed.
    ///
    /// # Errors
    ///
    /// [`StoreError::Malformed`] if the file exists but does not parse or is
    /// inconsistent with `fingerprint`.
    pub fn load(
        &self,
        fingerprint: &SemanticFingerprint,
    ) -> Result<Option<EvidenceRecord>, StoreError> {
        let path = self.record_path(fingerprint);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let malformed = |reason: String| {
            tracing::warn!(path = %path.display(), %reason, "malformed evidence file");
            StoreError::Malformed {
                path: path.clone(),
                reason,
            }
        };
        let record: EvidenceRecord =
            serde_json::from_slice(&bytes).map_err(|err| malformed(err.to_string()))?;
        record.validate(fingerprint).map_err(malformed)?;
        Ok(Some(record))
    }

    /// Whether `expression`, read as `language`, hashes to `fingerprint`.
    ///
    /// Never fails: unrecognized input and any internal error yield `false`.
    pub fn verify(
        &self,
        fingerprint: &SemanticFingerprint,
        expression: &str,
        language: Language,
    ) -> bool {
        match analyze(expression, Some(language)) {
            Ok(analysis) => {
                analysis.tokenization.report.status != CoverageStatus::Unrecognized
                    && analysis.fingerprint == *fingerprint
            }
            Err(err) => {
                tracing::debug!(error = %err, "verification failed to hash");
                false
            }
        }
    }

    /// Every seal of `fingerprint` recorded in the event stream, oldest first.
    ///
    /// Damaged lines and seal events with the wrong shape are skipped. A
    /// missing stream means no history.
    pub fn history(
        &self,
        fingerprint: &SemanticFingerprint,
    ) -> Result<Vec<SealEvent>, StoreError> {
        if !self.event_stream.exists() {
            return Ok(Vec::new());
        }
        let reader = JournalBackendReader::open(&self.event_stream, ReadMode::Permissive)?;
        let mut reader = FilteredReader::new(
            reader,
            FingerprintFilter {
                fingerprint: fingerprint.clone(),
            },
        );
        seal_history(&mut reader, fingerprint, ReadMode::Permissive)
    }
}
