use thiserror::Error;

/// Validation errors for canonical primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a language tag is not part of the supported set.
    #[error("unsupported language tag '{0}'")]
    UnsupportedLanguage(String),
    /// When a fingerprint names a digest algorithm this build does not know.
    #[error("unsupported digest algorithm '{0}'")]
    UnsupportedAlgorithm(String),
}
