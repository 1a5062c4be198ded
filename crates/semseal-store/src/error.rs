//! Error types for store operations.

use semseal_canonical::{EncodingError, SemanticFingerprint, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Event stream error.
    #[error("journal error: {0}")]
    Journal(#[from] semseal_journal::JournalError),
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Canonical tree could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    /// Generated identifier or timestamp failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// A seal event in the stream has the wrong shape.
    #[error("parse error: {0}")]
    Parse(#[from] crate::typed::ParseError),
    /// No expressions were supplied to seal.
    #[error("no expressions to seal")]
    NoExpressions,
    /// Supplied tree does not hash to the fingerprint it is sealed under.
    #[error("tree hashes to {actual}, expected {expected}")]
    FingerprintMismatch {
        /// Fingerprint the caller asked to seal under.
        expected: SemanticFingerprint,
        /// Fingerprint of the supplied tree.
        actual: SemanticFingerprint,
    },
    /// The evidence record is in place but its `evidence_sealed` event was
    /// not appended; the stream needs reconciling.
    #[error("evidence record {} written but seal event not recorded: {source}", record.display())]
    EventNotRecorded {
        /// Path of the record that was written.
        record: PathBuf,
        /// Why the append failed.
        source: Box<StoreError>,
    },
    /// An evidence file exists but cannot be used.
    #[error("malformed evidence file {}: {reason}", path.display())]
    Malformed {
        /// Path of the evidence file.
        path: PathBuf,
        /// Reason for rejection.
        reason: String,
    },
}
