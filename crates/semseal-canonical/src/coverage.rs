use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How much of an input the lexicon accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// Every word-like segment produced a token.
    Complete,
    /// Some segments were dropped as unclassified.
    Partial,
    /// No token was produced; the input carries no detectable semantics.
    Unrecognized,
}

/// A segment that matched neither a structured pattern nor the lexicon.
///
/// Unclassified segments never reach the canonical sequence (and so never
/// affect a fingerprint); they are reported for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnclassifiedSpan {
    /// The dropped text.
    pub text: String,
    /// Byte range into the normalized input.
    pub range: Range<usize>,
}

/// Coverage report produced alongside every tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Overall status.
    pub status: CoverageStatus,
    /// Dropped segments in input order.
    pub unclassified: Vec<UnclassifiedSpan>,
}

impl CoverageReport {
    pub(crate) fn new(token_count: usize, unclassified: Vec<UnclassifiedSpan>) -> Self {
        let status = if token_count == 0 {
            CoverageStatus::Unrecognized
        } else if unclassified.is_empty() {
            CoverageStatus::Complete
        } else {
            CoverageStatus::Partial
        };
        Self {
            status,
            unclassified,
        }
    }

    /// Whether the input produced no tokens at all.
    pub fn is_unrecognized(&self) -> bool {
        self.status == CoverageStatus::Unrecognized
    }
}
