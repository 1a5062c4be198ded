//! Multi-language semantic fingerprinting and evidence sealing.
//!
//! This crate provides:
//! - [`Engine`], the surface the governance pipeline calls: `tokenize`,
//!   `detokenize`, `canonicalize`, `hash_text`, `seal_from_texts`,
//!   `verify_multilang`, `load_evidence`
//! - [`SealConfig`] for evidence and event stream locations
//! - Re-exports of the typed pure operations
//!
//! Core invariants:
//! - Equivalent statements in supported languages share one fingerprint
//! - A fingerprint depends only on the text and the lexicon version
//! - Evidence paths depend only on the fingerprint
//! - Verification never fails; it answers `false`
//!
//! ## Quick Start
//!
//! ```rust
//! use semseal_core::{Engine, SealConfig};
//!
//! let dir = tempfile::tempdir()?;
//! let engine = Engine::new(SealConfig::rooted_at(dir.path()))?;
//!
//! let receipt = engine.seal_from_texts([
//!     ("zh", "創建用戶 alice@example.com"),
//!     ("en", "create user alice@example.com"),
//! ])?;
//! let fp = receipt.semantic_hash.to_string();
//! assert!(engine.verify_multilang(&fp, "create user alice@example.com", "en"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Sealing configuration.
pub mod config;
/// Engine facade.
pub mod engine;
/// Error types for core operations.
pub mod errors;

pub use config::{ConfigError, SealConfig, EVENT_STREAM_FILE};
pub use engine::{Engine, SealReceipt};
pub use errors::CoreError;
pub use semseal_canonical::{
    analyze, build, canonicalize, detect, detokenize, hash, hash_text, to_canonical_json,
    tokenize, CanonicalNode, CoverageReport, CoverageStatus, Language, SemanticFingerprint,
    Token, TokenSequence, TokenType, Tokenization,
};
pub use semseal_store::{EvidenceRecord, SealEvent, StoreError};
