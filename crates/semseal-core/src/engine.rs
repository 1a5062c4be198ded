//! Library surface consumed by the governance pipeline.

use crate::config::SealConfig;
use crate::errors::CoreError;
use semseal_canonical::{
    detect, Analysis, Canonicalizer, CoverageStatus, Language, SemanticFingerprint, TokenSequence,
    Tokenization,
};
use semseal_journal::{SealEvent, WriteOptions};
use semseal_store::{EvidenceRecord, EvidenceStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Result of a successful seal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealReceipt {
    /// Fingerprint the expressions were sealed under.
    pub semantic_hash: SemanticFingerprint,
    /// Path of the written evidence record.
    pub evidence_file: PathBuf,
    /// Lexicon coverage of the primary expression. `Unrecognized` means the
    /// seal carries no detectable semantics; the caller decides what that
    /// blocks.
    pub coverage: CoverageStatus,
}

/// Canonicalization plus an evidence store, addressed with string language
/// tags as the pipeline passes them.
///
/// Tags accept region variants (`zh-TW`). Where a hint is allowed, `auto`
/// requests detection.
#[derive(Debug, Clone)]
pub struct Engine {
    config: SealConfig,
    canonicalizer: Canonicalizer,
    store: EvidenceStore,
}

fn language(tag: &str) -> Result<Language, CoreError> {
    Language::parse(tag).map_err(|_| CoreError::UnknownLanguage(tag.to_string()))
}

fn language_hint(tag: &str, text: &str) -> Result<Language, CoreError> {
    let hint =
        Language::parse_hint(tag).map_err(|_| CoreError::UnknownLanguage(tag.to_string()))?;
    Ok(hint.unwrap_or_else(|| detect(text)))
}

fn fingerprint(value: &str) -> Result<SemanticFingerprint, CoreError> {
    SemanticFingerprint::parse(value).map_err(|err| CoreError::InvalidFingerprint(err.to_string()))
}

impl Engine {
    /// Creates an engine; no files are touched until the first seal.
    pub fn new(config: SealConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let options = WriteOptions {
            sync: config.sync_writes,
            create: true,
        };
        let store = EvidenceStore::new(
            config.evidence_dir.clone(),
            config.event_stream_path(),
            options,
        );
        Ok(Self {
            config,
            canonicalizer: Canonicalizer::default(),
            store,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &SealConfig {
        &self.config
    }

    /// Underlying evidence store.
    pub fn store(&self) -> &EvidenceStore {
        &self.store
    }

    /// Tokenizes `text`; `language` may be `auto`.
    pub fn tokenize(&self, text: &str, language: &str) -> Result<Tokenization, CoreError> {
        let language = language_hint(language, text)?;
        Ok(self.canonicalizer.tokenizer().tokenize(text, language))
    }

    /// Renders tokens in the `target` language.
    pub fn detokenize(&self, tokens: &TokenSequence, target: &str) -> Result<String, CoreError> {
        Ok(self
            .canonicalizer
            .tokenizer()
            .detokenize(tokens, language(target)?))
    }

    /// Normalized base-language rendering of `text`; `language` may be `auto`.
    pub fn canonicalize(&self, text: &str, language: &str) -> Result<String, CoreError> {
        let language = language_hint(language, text)?;
        Ok(self.canonicalizer.canonicalize(text, Some(language)))
    }

    /// Fingerprint of `text`; `language` may be `auto`.
    pub fn hash_text(&self, text: &str, language: &str) -> Result<SemanticFingerprint, CoreError> {
        let language = language_hint(language, text)?;
        Ok(self.canonicalizer.hash_text(text, Some(language))?)
    }

    /// Seals equivalent expressions under one fingerprint.
    ///
    /// The first pair is the primary expression: its tree is stored and its
    /// fingerprint is the seal's address. Every other expression must hash to
    /// the same fingerprint. A primary expression with no lexicon hits is
    /// sealed under the empty-sequence fingerprint and reported through
    /// [`SealReceipt::coverage`].
    ///
    /// # Errors
    ///
    /// - [`CoreError::NoExpressions`] for an empty input
    /// - [`CoreError::UnknownLanguage`] for an unsupported tag
    /// - [`CoreError::DivergentExpression`] if expressions disagree
    /// - [`CoreError::DuplicateLanguage`] if one language appears twice
    /// - [`CoreError::Store`] on I/O failure
    pub fn seal_from_texts<I, L, T>(&self, texts: I) -> Result<SealReceipt, CoreError>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: AsRef<str>,
    {
        let mut expressions = BTreeMap::new();
        let mut primary: Option<Analysis> = None;

        for (tag, text) in texts {
            let language = language(tag.as_ref())?;
            let text = text.as_ref();
            let analysis = self.canonicalizer.analyze(text, Some(language))?;
            match &primary {
                None => {
                    if analysis.tokenization.report.is_unrecognized() {
                        tracing::warn!(
                            language = %language,
                            fingerprint = %analysis.fingerprint,
                            "sealing expression with no recognized semantics"
                        );
                    }
                    primary = Some(analysis);
                }
                Some(first) if first.fingerprint != analysis.fingerprint => {
                    return Err(CoreError::DivergentExpression {
                        language,
                        expected: first.fingerprint.clone(),
                        actual: analysis.fingerprint,
                    });
                }
                Some(_) => {}
            }
            if expressions.insert(language, text.to_string()).is_some() {
                return Err(CoreError::DuplicateLanguage(language));
            }
        }

        let primary = primary.ok_or(CoreError::NoExpressions)?;
        let coverage = primary.tokenization.report.status;
        let evidence_file =
            self.store
                .seal(&primary.fingerprint, &expressions, Some(primary.tree))?;
        Ok(SealReceipt {
            semantic_hash: primary.fingerprint,
            evidence_file,
            coverage,
        })
    }

    /// Whether `expression` in `language` hashes to `fingerprint`.
    ///
    /// Never fails: a malformed fingerprint, an unknown tag, or unrecognized
    /// input all yield `false`.
    pub fn verify_multilang(&self, fingerprint: &str, expression: &str, language: &str) -> bool {
        let Ok(fingerprint) = SemanticFingerprint::parse(fingerprint) else {
            return false;
        };
        let Ok(language) = language_hint(language, expression) else {
            return false;
        };
        self.store.verify(&fingerprint, expression, language)
    }

    /// Loads the evidence record for `fingerprint`; `Ok(None)` if never sealed.
    pub fn load_evidence(&self, fingerprint: &str) -> Result<Option<EvidenceRecord>, CoreError> {
        Ok(self.store.load(&self::fingerprint(fingerprint)?)?)
    }

    /// Every seal of `fingerprint` in the event stream, oldest first.
    pub fn seal_history(&self, fingerprint: &str) -> Result<Vec<SealEvent>, CoreError> {
        Ok(self.store.history(&self::fingerprint(fingerprint)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn engine(dir: &TempDir) -> Engine {
        Engine::new(SealConfig::rooted_at(dir.path())).unwrap()
    }

    #[test]
    fn rejects_unknown_tags() {
        let dir = TempDir::new().unwrap();
        let engine = engine(&dir);
        assert!(matches!(
            engine.hash_text("create user", "fr"),
            Err(CoreError::UnknownLanguage(tag)) if tag == "fr"
        ));
        assert!(matches!(
            engine.detokenize(&TokenSequence::default(), "auto"),
            Err(CoreError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn auto_detects_language() {
        let dir = TempDir::new().unwrap();
        let engine = engine(&dir);
        let tokenization = engine.tokenize("重启服务器", "auto").unwrap();
        assert_eq!(tokenization.language, Language::Zh);
        assert_eq!(
            engine.hash_text("重启服务器", "auto").unwrap(),
            engine.hash_text("restart server", "en").unwrap()
        );
    }

    #[test]
    fn seal_rejects_divergent_and_duplicate_input() {
        let dir = TempDir::new().unwrap();
        let engine = engine(&dir);
        assert!(matches!(
            engine.seal_from_texts([("en", "create user alice"), ("zh", "刪除用戶 alice")]),
            Err(CoreError::DivergentExpression {
                language: Language::Zh,
                ..
            })
        ));
        assert!(matches!(
            engine.seal_from_texts(Vec::<(&str, &str)>::new()),
            Err(CoreError::NoExpressions)
        ));
        assert!(matches!(
            engine.seal_from_texts([("zh-TW", "重啟伺服器"), ("zh-CN", "重启服务器")]),
            Err(CoreError::DuplicateLanguage(Language::Zh))
        ));
        assert!(!engine.config().evidence_dir.exists());
    }

    #[test]
    fn unrecognized_primary_is_sealed_and_reported() {
        let dir = TempDir::new().unwrap();
        let engine = engine(&dir);
        let receipt = engine.seal_from_texts([("en", "we did a thing")]).unwrap();
        assert_eq!(receipt.coverage, CoverageStatus::Unrecognized);
        assert_eq!(
            receipt.semantic_hash,
            engine.hash_text("hello there", "en").unwrap()
        );
        assert!(receipt.evidence_file.exists());

        let recognized = engine
            .seal_from_texts([("en", "create user alice")])
            .unwrap();
        assert_eq!(recognized.coverage, CoverageStatus::Partial);
    }

    #[test]
    fn malformed_fingerprints_never_verify() {
        let dir = TempDir::new().unwrap();
        let engine = engine(&dir);
        assert!(!engine.verify_multilang("sha256:xyz", "create user", "en"));
        assert!(!engine.verify_multilang("", "create user", "en"));
        assert!(matches!(
            engine.load_evidence("not-a-fingerprint"),
            Err(CoreError::InvalidFingerprint(_))
        ));
    }
}
