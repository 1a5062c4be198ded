//! Append-only JSON Lines event stream.
//!
//! This crate provides:
//! - A writer that appends one JSON object per line, safely across threads
//! - A reader with strict and permissive handling of damaged lines
//! - The typed `evidence_sealed` event
//!
//! ## Quick Start
//!
//! ```rust
//! use semseal_journal::{EventStreamReader, EventStreamWriter, ReadMode, WriteOptions};
//! use serde_json::json;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("event-stream.jsonl");
//!
//! let writer = EventStreamWriter::open(&path, WriteOptions::default())?;
//! writer.append_event(&json!({"event_type": "note", "text": "first"}))?;
//! writer.finish()?;
//!
//! let mut reader = EventStreamReader::open(&path, ReadMode::Strict)?;
//! let events = reader.read_all()?;
//! assert_eq!(events.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Error types for event stream operations.
pub mod errors;
/// Event JSON type alias and the seal event.
pub mod event;
/// Event stream reader implementation.
pub mod reader;
/// Event stream writer implementation.
pub mod writer;

pub use errors::JournalError;
pub use event::{event_type, is_valid_event_structure, EventJson, SealEvent, EVIDENCE_SEALED};
pub use reader::{EventStreamReader, ReadMode};
pub use writer::{EventStreamWriter, WriteOptions, MAX_LINE_BYTES};
