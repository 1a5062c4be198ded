use semseal_canonical::{Language, SemanticFingerprint};
use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// Evidence store failure; sealing is not retried.
    #[error("store error: {0}")]
    Store(#[from] semseal_store::StoreError),
    /// Canonical tree could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] semseal_canonical::EncodingError),
    /// Language tag is not supported.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    /// Fingerprint string is malformed.
    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),
    /// Nothing to seal.
    #[error("no expressions to seal")]
    NoExpressions,
    /// Two expressions were given for one language.
    #[error("duplicate expression for {0}")]
    DuplicateLanguage(Language),
    /// An expression does not mean the same thing as the primary one.
    #[error("expression in {language} hashes to {actual}, expected {expected}")]
    DivergentExpression {
        /// Language of the divergent expression.
        language: Language,
        /// Fingerprint of the primary expression.
        expected: SemanticFingerprint,
        /// Fingerprint of this expression.
        actual: SemanticFingerprint,
    },
}
