//! Language-neutral canonical form for short operational statements.
//!
//! Text in English, Chinese, Japanese, or Korean is tokenized into typed
//! semantic units, normalized through a synonym table, arranged into a
//! canonical tree, and hashed over the tree's RFC 8785 encoding. Statements
//! that mean the same operation hash to the same [`SemanticFingerprint`]
//! regardless of language or phrasing.
//!
#![deny(missing_docs)]

/// Canonical tree built from a token sequence.
pub mod ast;
/// Coverage reports for dropped input.
pub mod coverage;
/// RFC 8785 encoding of canonical trees.
pub mod encoder;
/// Structured-value extraction (emails, URLs, paths, numbers).
pub mod extractor;
/// Fingerprint type and tree hashing.
pub mod fingerprint;
/// Timestamp and evidence identifier newtypes.
pub mod identifiers;
/// Supported languages and script-based detection.
pub mod language;
/// Multilingual lexicon of actions, entities, and conditions.
pub mod lexicon;
/// End-to-end text → fingerprint pipeline.
pub mod pipeline;
/// Synonym normalization and base-language canonicalization.
pub mod synonyms;
mod tables;
/// Token and token sequence types.
pub mod token;
/// Tokenizer and detokenizer.
pub mod tokenizer;
/// Validation errors shared by the newtypes.
pub mod validation;

pub use ast::{build, CanonicalNode};
pub use coverage::{CoverageReport, CoverageStatus, UnclassifiedSpan};
pub use encoder::{to_canonical_json, EncodingError};
pub use extractor::{StructuredSpan, ValueKind};
pub use fingerprint::{hash, DigestAlg, SemanticFingerprint};
pub use identifiers::{EvidenceId, Timestamp};
pub use language::{detect, Language, Segmentation};
pub use lexicon::{Lexicon, LEXICON_VERSION};
pub use pipeline::{analyze, hash_text, Analysis};
pub use synonyms::{canonicalize, Canonicalizer};
pub use token::{Token, TokenSequence, TokenType};
pub use tokenizer::{detokenize, tokenize, Tokenization, Tokenizer};
pub use validation::ValidationError;
