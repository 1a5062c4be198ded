//! Evidence sealing: content-addressed records plus an audit event stream.
//!
//! This crate provides:
//! - [`EvidenceStore`] with `seal`, `load`, `verify`, and `history`
//! - `StoreWriter` and `StoreReader` traits over the event stream
//! - Default implementation backed by `semseal-journal`
//! - Event filtering API for selective iteration
//! - Typed seal events and history views

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Evidence record store.
pub mod evidence;
/// Event filtering API.
pub mod filter;
/// Event-stream-backed storage implementation.
pub mod journal;
/// Evidence record document.
pub mod record;
/// Storage backend traits.
pub mod traits;
/// Typed event parsing.
pub mod typed;
/// Seal history views.
pub mod view;

pub use error::StoreError;
pub use evidence::EvidenceStore;
pub use filter::{
    AndFilter, EventFilter, EventTypeFilter, FilteredReader, FingerprintFilter, LanguageFilter,
    OrFilter, TimeRangeFilter,
};
pub use journal::{JournalBackendReader, JournalBackendWriter};
pub use record::EvidenceRecord;
pub use semseal_journal::{EventJson, ReadMode, SealEvent, WriteOptions};
pub use traits::{StoreReader, StoreWriter};
pub use typed::{parse_event, ParseError, TypedEvent};
pub use view::{latest_seal, seal_history};
