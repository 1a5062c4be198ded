use crate::ast::CanonicalNode;
use crate::encoder::EncodingError;
use crate::fingerprint::{hash, SemanticFingerprint};
use crate::language::{detect, Language};
use crate::synonyms::Canonicalizer;
use crate::token::TokenSequence;
use crate::tokenizer::Tokenization;

/// Every intermediate of text → fingerprint.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Language the text was tokenized as.
    pub language: Language,
    /// Raw tokenization, with fine lemmas and the coverage report.
    pub tokenization: Tokenization,
    /// Tokens after synonym normalization.
    pub normalized: TokenSequence,
    /// Canonical tree over `normalized`.
    pub tree: CanonicalNode,
    /// Fingerprint of `tree`.
    pub fingerprint: SemanticFingerprint,
}

impl Canonicalizer {
    /// Runs the full pipeline: detect, tokenize, normalize, build, hash.
    pub fn analyze(
        &self,
        text: &str,
        language: Option<Language>,
    ) -> Result<Analysis, EncodingError> {
        let language = language.unwrap_or_else(|| detect(text));
        let tokenization = self.tokenizer().tokenize(text, language);
        let normalized = self.normalize(&tokenization.tokens);
        let tree = CanonicalNode::build(&normalized);
        let fingerprint = hash(&tree)?;
        tracing::debug!(
            language = language.tag(),
            tokens = normalized.len(),
            fingerprint = %fingerprint,
            "hashed statement"
        );
        Ok(Analysis {
            language,
            tokenization,
            normalized,
            tree,
            fingerprint,
        })
    }

    /// Fingerprint of `text`; equal across synonymous phrasings and languages.
    pub fn hash_text(
        &self,
        text: &str,
        language: Option<Language>,
    ) -> Result<SemanticFingerprint, EncodingError> {
        self.analyze(text, language).map(|a| a.fingerprint)
    }
}

/// Runs the full pipeline with the built-in lexicon.
pub fn analyze(text: &str, language: Option<Language>) -> Result<Analysis, EncodingError> {
    Canonicalizer::default().analyze(text, language)
}

/// Hashes `text` with the built-in lexicon.
pub fn hash_text(
    text: &str,
    language: Option<Language>,
) -> Result<SemanticFingerprint, EncodingError> {
    Canonicalizer::default().hash_text(text, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageStatus;

    #[test]
    fn analysis_keeps_every_stage() {
        let analysis = analyze("Restart the DB server", None).unwrap();
        assert_eq!(analysis.language, Language::En);
        assert_eq!(analysis.tokenization.report.status, CoverageStatus::Partial);
        let fine: Vec<_> = analysis.tokenization.tokens.iter().map(|t| t.canonical()).collect();
        assert_eq!(fine, ["restart", "db", "server"]);
        let normalized: Vec<_> = analysis.normalized.iter().map(|t| t.canonical()).collect();
        assert_eq!(normalized, ["restart", "database", "server"]);
        assert_eq!(hash(&analysis.tree).unwrap(), analysis.fingerprint);
    }

    #[test]
    fn compounds_do_not_shift_the_fingerprint() {
        assert_eq!(
            hash_text("重启当前服务", None).unwrap(),
            hash_text("restart the current service", None).unwrap()
        );
    }

    #[test]
    fn explicit_language_overrides_detection() {
        let detected = hash_text("用户", None).unwrap();
        let forced_en = hash_text("用户", Some(Language::En)).unwrap();
        assert_ne!(detected, forced_en);
    }
}
